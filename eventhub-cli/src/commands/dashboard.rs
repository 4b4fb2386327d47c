use anyhow::Result;
use chrono::NaiveDate;
use eventhub_core::event::Event;
use eventhub_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::{capacity_line, pluralize};

pub fn run(store: &EventStore, today: NaiveDate, past: bool) -> Result<()> {
    let (label, events, empty_message) = if past {
        ("Past Events", store.past(today), "No past events")
    } else {
        ("Upcoming Events", store.upcoming(today), "No upcoming events")
    };

    println!("{}", label.bold().underline());
    println!();

    if events.is_empty() {
        println!("{}", empty_message.dimmed());
        if !past {
            println!(
                "{}",
                "Create your first event with `eventhub new`".dimmed()
            );
        }
        return Ok(());
    }

    for (i, event) in events.iter().enumerate() {
        print_card(event);
        if i < events.len() - 1 {
            println!();
        }
    }

    println!();
    let registrations: u32 = events.iter().map(|e| e.attendees).sum();
    println!(
        "{}",
        format!(
            "{} {}, {} {}",
            events.len(),
            pluralize("event", events.len()),
            registrations,
            pluralize("registration", registrations as usize)
        )
        .dimmed()
    );

    Ok(())
}

fn print_card(event: &Event) {
    println!("{} {}", event.title.bold(), format!("[{}]", event.id).dimmed());
    println!("   {}, {}", event.date_label(), event.time_label());
    println!("   {}", event.location);
    println!("   {}", capacity_line(event));
}
