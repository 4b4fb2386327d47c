//! In-memory event store.
//!
//! The app runs against a seeded, in-memory data set; nothing is persisted
//! between runs. A real deployment would put a persistence layer behind the
//! same surface.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{HubError, HubResult};
use crate::event::Event;
use crate::forms::{NewEvent, RegistrationForm};

/// A recorded registration for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Owns all events and registrations for the lifetime of the process.
pub struct EventStore {
    events: Vec<Event>,
    registrations: Vec<Registration>,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        EventStore {
            events,
            registrations: Vec::new(),
        }
    }

    /// Store pre-loaded with the sample data set.
    pub fn seeded() -> Self {
        Self::new(sample_events())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Events whose last day is today or later, soonest first.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| !e.is_past(today)).collect();
        events.sort_by_key(|e| e.start_date);
        events
    }

    /// Events already over, most recent first.
    pub fn past(&self, today: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| e.is_past(today)).collect();
        events.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        events
    }

    /// Highlighted event for the landing view: the most-attended upcoming one.
    pub fn featured(&self, today: NaiveDate) -> Option<&Event> {
        self.upcoming(today)
            .into_iter()
            .max_by_key(|e| e.attendees)
    }

    /// Add a newly created event, assigning it a fresh id.
    pub fn add(&mut self, new_event: NewEvent, organizer: Option<String>) -> &Event {
        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: new_event.title,
            description: new_event.description,
            long_description: None,
            start_date: new_event.start_date,
            end_date: new_event.end_date,
            start_time: new_event.start_time,
            end_time: new_event.end_time,
            location: new_event.location,
            address: None,
            organizer,
            category: new_event.category,
            attendees: 0,
            capacity: new_event.capacity,
        };

        self.events.push(event);
        self.events.last().expect("just pushed")
    }

    /// Register an attendee for an event.
    ///
    /// The form is expected to be validated already; this checks only that
    /// the event exists and still has room.
    pub fn register(&mut self, event_id: &str, form: RegistrationForm) -> HubResult<&Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == event_id)
            .ok_or_else(|| HubError::EventNotFound(event_id.to_string()))?;

        if self.events[index].is_full() {
            return Err(HubError::EventFull {
                title: self.events[index].title.clone(),
                capacity: self.events[index].capacity,
            });
        }

        self.events[index].attendees += 1;
        self.registrations.push(Registration {
            event_id: event_id.to_string(),
            name: form.name,
            email: form.email,
            phone: form.phone,
        });

        Ok(&self.events[index])
    }
}

/// The sample data set, as seeded by the original application.
pub fn sample_events() -> Vec<Event> {
    use crate::event::EventCategory::*;

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date");
    let time = |h, m| chrono::NaiveTime::from_hms_opt(h, m, 0).expect("valid sample time");

    vec![
        Event {
            id: "1".to_string(),
            title: "Tech Conference 2025".to_string(),
            description: "Join us for the biggest tech conference of the year featuring \
                          industry leaders and innovative workshops."
                .to_string(),
            long_description: Some(
                "The Tech Conference 2025 is the premier event for technology \
                 professionals, bringing together industry leaders, innovators, and \
                 enthusiasts from around the world.\n\n\
                 What to expect: keynote presentations from industry leaders, hands-on \
                 workshops on cutting-edge technologies, networking opportunities, \
                 product demonstrations, and career development sessions.\n\n\
                 Day 1: Opening keynote, AI and Machine Learning tracks, evening \
                 networking reception.\n\
                 Day 2: Web Development and Cloud Computing tracks, tech startup \
                 showcase.\n\
                 Day 3: Cybersecurity summit, career fair, closing keynote."
                    .to_string(),
            ),
            start_date: date(2025, 6, 15),
            end_date: Some(date(2025, 6, 17)),
            start_time: time(9, 0),
            end_time: time(18, 0),
            location: "San Francisco Convention Center".to_string(),
            address: Some("747 Howard St, San Francisco, CA 94103".to_string()),
            organizer: Some("Tech Events Inc.".to_string()),
            category: Conference,
            attendees: 1250,
            capacity: 2000,
        },
        Event {
            id: "2".to_string(),
            title: "Web Development Workshop".to_string(),
            description: "Learn the latest web development techniques and tools.".to_string(),
            long_description: None,
            start_date: date(2025, 5, 25),
            end_date: None,
            start_time: time(10, 0),
            end_time: time(15, 0),
            location: "Online".to_string(),
            address: None,
            organizer: None,
            category: Workshop,
            attendees: 120,
            capacity: 200,
        },
        Event {
            id: "3".to_string(),
            title: "Networking Mixer".to_string(),
            description: "Connect with professionals in your industry.".to_string(),
            long_description: None,
            start_date: date(2025, 6, 5),
            end_date: None,
            start_time: time(18, 0),
            end_time: time(21, 0),
            location: "Downtown Business Center".to_string(),
            address: None,
            organizer: None,
            category: Networking,
            attendees: 75,
            capacity: 150,
        },
        Event {
            id: "4".to_string(),
            title: "Product Management Seminar".to_string(),
            description: "Strategies for effective product management.".to_string(),
            long_description: None,
            start_date: date(2025, 6, 10),
            end_date: None,
            start_time: time(9, 0),
            end_time: time(12, 0),
            location: "Innovation Hub".to_string(),
            address: None,
            organizer: None,
            category: Other,
            attendees: 90,
            capacity: 120,
        },
        Event {
            id: "5".to_string(),
            title: "Design Systems Webinar".to_string(),
            description: "A comprehensive overview of design systems and their \
                          implementation."
                .to_string(),
            long_description: None,
            start_date: date(2025, 4, 10),
            end_date: None,
            start_time: time(13, 0),
            end_time: time(15, 0),
            location: "Online".to_string(),
            address: None,
            organizer: None,
            category: Webinar,
            attendees: 350,
            capacity: 500,
        },
        Event {
            id: "6".to_string(),
            title: "Startup Networking Event".to_string(),
            description: "Connect with founders, investors, and industry experts.".to_string(),
            long_description: None,
            start_date: date(2025, 3, 22),
            end_date: None,
            start_time: time(18, 0),
            end_time: time(21, 0),
            location: "Innovation Hub".to_string(),
            address: None,
            organizer: None,
            category: Networking,
            attendees: 175,
            capacity: 200,
        },
    ]
}
