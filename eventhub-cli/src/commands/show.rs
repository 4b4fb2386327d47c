use anyhow::Result;
use chrono::NaiveDate;
use eventhub_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::capacity_line;

pub fn run(store: &EventStore, id: &str, today: NaiveDate) -> Result<()> {
    let Some(event) = store.get(id) else {
        let available: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();
        anyhow::bail!("Event '{}' not found. Available: {}", id, available.join(", "));
    };

    println!("{}", event.title.bold().underline());
    println!();
    println!("{}", event.description);
    println!();

    println!("  When:      {}, {}", event.date_label(), event.time_label());
    println!("  Where:     {}", event.location);
    if let Some(address) = &event.address {
        println!("             {}", address.dimmed());
    }
    if let Some(organizer) = &event.organizer {
        println!("  Organizer: {}", organizer);
    }
    println!("  Category:  {}", event.category);

    println!();
    println!("  {}", capacity_line(event));

    if event.is_past(today) {
        println!();
        println!("  {}", "This event has already taken place".yellow());
    } else if !event.is_full() {
        println!();
        println!(
            "  {}",
            format!("Register with `eventhub register {}`", event.id).dimmed()
        );
    }

    if let Some(details) = &event.long_description {
        println!();
        println!("{}", "About this event".bold());
        println!();
        for paragraph in details.split("\n\n") {
            println!("{}", paragraph);
            println!();
        }
    }

    Ok(())
}
