//! Event types.
//!
//! These types represent events in a storage-agnostic way. The grid builder,
//! the store, and the CLI all work exclusively with them.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// An event on the platform.
///
/// Grid placement only looks at `start_date`; `end_date` is present for
/// multi-day events and drives listing labels and past/upcoming partitioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    /// Extended detail text shown on the event page
    pub long_description: Option<String>,

    pub start_date: NaiveDate,
    /// Present only for multi-day events; invariant: `end_date >= start_date`
    pub end_date: Option<NaiveDate>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    pub location: String,
    pub address: Option<String>,
    pub organizer: Option<String>,
    pub category: EventCategory,

    /// Current registration count
    pub attendees: u32,
    /// Maximum number of attendees
    pub capacity: u32,
}

impl Event {
    pub fn is_multi_day(&self) -> bool {
        self.end_date.is_some()
    }

    /// Last calendar day the event occupies (start day for single-day events).
    pub fn last_day(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    /// An event is past once its last day is before `today`.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.last_day() < today
    }

    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.attendees)
    }

    pub fn is_full(&self) -> bool {
        self.attendees >= self.capacity
    }

    /// Human date label, e.g. "June 15-17, 2025" or "May 25, 2025".
    pub fn date_label(&self) -> String {
        match self.end_date {
            None => self.start_date.format("%B %-d, %Y").to_string(),
            Some(end) if end == self.start_date => {
                self.start_date.format("%B %-d, %Y").to_string()
            }
            Some(end)
                if end.year() == self.start_date.year()
                    && end.month() == self.start_date.month() =>
            {
                format!(
                    "{}-{}",
                    self.start_date.format("%B %-d"),
                    end.format("%-d, %Y")
                )
            }
            Some(end) if end.year() == self.start_date.year() => {
                format!(
                    "{} - {}",
                    self.start_date.format("%B %-d"),
                    end.format("%B %-d, %Y")
                )
            }
            Some(end) => {
                format!(
                    "{} - {}",
                    self.start_date.format("%B %-d, %Y"),
                    end.format("%B %-d, %Y")
                )
            }
        }
    }

    /// Human time label, e.g. "9:00 AM - 6:00 PM".
    pub fn time_label(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%-I:%M %p"),
            self.end_time.format("%-I:%M %p")
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Event category, matching the creation form's selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Conference,
    Workshop,
    Webinar,
    Networking,
    Social,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Conference,
        EventCategory::Workshop,
        EventCategory::Webinar,
        EventCategory::Networking,
        EventCategory::Social,
        EventCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Conference => "conference",
            EventCategory::Workshop => "workshop",
            EventCategory::Webinar => "webinar",
            EventCategory::Networking => "networking",
            EventCategory::Social => "social",
            EventCategory::Other => "other",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conference" => Ok(EventCategory::Conference),
            "workshop" => Ok(EventCategory::Workshop),
            "webinar" => Ok(EventCategory::Webinar),
            "networking" => Ok(EventCategory::Networking),
            "social" => Ok(EventCategory::Social),
            "other" => Ok(EventCategory::Other),
            _ => Err(format!(
                "Unknown category '{}'. Expected one of: conference, workshop, webinar, networking, social, other",
                s
            )),
        }
    }
}
