//! Form input validation.
//!
//! The registration and event-creation forms collect raw user input and
//! validate it field by field, reporting every problem at once rather than
//! stopping at the first. Successful validation of an [`EventDraft`] yields
//! a typed [`NewEvent`] ready for the store.

use chrono::{NaiveDate, NaiveTime};

use crate::event::EventCategory;

/// A single validation problem, keyed by the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

/// Attendee details for registering to an event.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !email_looks_valid(&self.email) {
            errors.push(FieldError::new("email", "Email is invalid"));
        }

        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "Phone number is required"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Shape check only: somewhere in the input, a whitespace-free run of the
/// form `x@y.z`. Deliverability is the (simulated) backend's problem.
fn email_looks_valid(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        token.char_indices().any(|(i, c)| {
            if c != '@' || i == 0 {
                return false;
            }
            let rest = &token[i + 1..];
            rest.char_indices()
                .any(|(j, d)| d == '.' && j > 0 && j + 1 < rest.len())
        })
    })
}

/// Raw input for the event-creation form.
///
/// Fields mirror the form controls: free text stays as entered, the date
/// and time selectors are already-parsed options, and `capacity` stays a
/// string until validation so a non-numeric entry produces a field error
/// instead of a parse failure upstream.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub capacity: String,
    pub category: String,
}

/// A validated draft, ready to be added to the store.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: u32,
    pub category: EventCategory,
}

impl EventDraft {
    pub fn validate(&self) -> Result<NewEvent, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }

        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        }

        if self.location.trim().is_empty() {
            errors.push(FieldError::new("location", "Location is required"));
        }

        if self.date.is_none() {
            errors.push(FieldError::new("date", "Date is required"));
        }

        if let (Some(start), Some(end)) = (self.date, self.end_date) {
            if end < start {
                errors.push(FieldError::new("endDate", "End date must not be before the start date"));
            }
        }

        if self.start_time.is_none() {
            errors.push(FieldError::new("startTime", "Start time is required"));
        }

        if self.end_time.is_none() {
            errors.push(FieldError::new("endTime", "End time is required"));
        }

        let capacity = if self.capacity.trim().is_empty() {
            errors.push(FieldError::new("capacity", "Capacity is required"));
            None
        } else {
            match self.capacity.trim().parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    errors.push(FieldError::new(
                        "capacity",
                        "Capacity must be a positive number",
                    ));
                    None
                }
            }
        };

        let category = if self.category.trim().is_empty() {
            errors.push(FieldError::new("eventType", "Event type is required"));
            None
        } else {
            match self.category.trim().parse::<EventCategory>() {
                Ok(cat) => Some(cat),
                Err(msg) => {
                    errors.push(FieldError::new("eventType", msg));
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // All None cases pushed an error above
        Ok(NewEvent {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            start_date: self.date.unwrap(),
            end_date: self.end_date.filter(|end| Some(*end) != self.date),
            start_time: self.start_time.unwrap(),
            end_time: self.end_time.unwrap(),
            capacity: capacity.unwrap(),
            category: category.unwrap(),
        })
    }
}
