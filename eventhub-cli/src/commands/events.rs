use anyhow::Result;
use chrono::NaiveDate;
use eventhub_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::{Render, capacity_line, event_card};

pub fn run(store: &EventStore, today: NaiveDate) -> Result<()> {
    let upcoming = store.upcoming(today);

    // --- Featured event ---
    if let Some(featured) = store.featured(today) {
        println!("{}", "Featured Event".bold().underline());
        println!();
        println!("{}", event_card(featured));
        println!("   {}", capacity_line(featured));
        println!();
    }

    // --- Upcoming events ---
    println!("{}", "Upcoming Events".bold().underline());
    println!();

    if upcoming.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    for event in upcoming {
        println!("  {}", event.render());
    }

    println!();
    println!(
        "{}",
        "View details with `eventhub show <id>`, register with `eventhub register <id>`".dimmed()
    );

    Ok(())
}
