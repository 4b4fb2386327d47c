pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod events;
pub mod new;
pub mod register;
pub mod show;
