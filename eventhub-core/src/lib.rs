//! Core types for the eventhub app.
//!
//! This crate provides everything the CLI builds its views from:
//! - `event` — the event data model
//! - `grid` — month-grid construction for the calendar view
//! - `month` — month navigation with year rollover
//! - `store` — the seeded in-memory event store
//! - `forms` — registration and event-creation form validation
//! - `config` — UI preferences at ~/.config/eventhub/config.toml

pub mod config;
pub mod error;
pub mod event;
pub mod forms;
pub mod grid;
pub mod month;
pub mod store;

pub use error::{HubError, HubResult};
pub use event::{Event, EventCategory};
