use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use dialoguer::{Input, Select};
use eventhub_core::config::HubConfig;
use eventhub_core::event::EventCategory;
use eventhub_core::forms::EventDraft;
use eventhub_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::utils::tui::simulate_backend;

/// Raw creation-form input from the command line.
pub struct Args {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub capacity: Option<String>,
    pub category: Option<String>,
}

pub async fn run(store: &mut EventStore, config: &HubConfig, args: Args) -> Result<()> {
    let interactive = args.title.is_none() || args.date.is_none();

    // --- Title ---
    let title = match args.title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Description ---
    let description = match args.description {
        Some(d) => d,
        None if interactive => Input::<String>::new()
            .with_prompt("  Description")
            .interact_text()?,
        None => String::new(),
    };

    // --- Date ---
    let date = match args.date {
        Some(s) => Some(parse_date(&s)?),
        None => Some(prompt_with_retry("  Date (YYYY-MM-DD)", parse_date)?),
    };

    // --- End date (multi-day events) ---
    let end_date = match args.end_date {
        Some(s) => Some(parse_date(&s)?),
        None if interactive => prompt_optional("  End date (skip for single-day)", parse_date)?,
        None => None,
    };

    // --- Times ---
    let start_time = match args.start_time {
        Some(s) => Some(parse_time(&s)?),
        None => Some(prompt_with_retry("  Start time (HH:MM)", parse_time)?),
    };

    let end_time = match args.end_time {
        Some(s) => Some(parse_time(&s)?),
        None => Some(prompt_with_retry("  End time (HH:MM)", parse_time)?),
    };

    // --- Location ---
    let location = match args.location {
        Some(l) => l,
        None if interactive => Input::<String>::new()
            .with_prompt("  Location")
            .interact_text()?,
        None => String::new(),
    };

    // --- Capacity ---
    let capacity = match args.capacity {
        Some(c) => c,
        None if interactive => Input::<String>::new()
            .with_prompt("  Capacity")
            .interact_text()?,
        None => String::new(),
    };

    // --- Category ---
    let category = match args.category {
        Some(c) => c,
        None if interactive => {
            let labels: Vec<&str> = EventCategory::ALL.iter().map(|c| c.as_str()).collect();
            let picked = Select::new()
                .with_prompt("  Category")
                .items(&labels)
                .default(0)
                .interact()?;
            labels[picked].to_string()
        }
        None => String::new(),
    };

    let draft = EventDraft {
        title,
        description,
        location,
        date,
        end_date,
        start_time,
        end_time,
        capacity,
        category,
    };

    let new_event = match draft.validate() {
        Ok(new_event) => new_event,
        Err(errors) => {
            for error in &errors {
                eprintln!("  {}", error.message.red());
            }
            anyhow::bail!("Event not created");
        }
    };

    simulate_backend("  Creating event").await;

    let event = store.add(new_event, config.organizer.clone());

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", event.title).green());
    println!(
        "  {}",
        format!(
            "{}, {} at {} (id: {})",
            event.date_label(),
            event.time_label(),
            event.location,
            event.id
        )
        .dimmed()
    );

    Ok(())
}

/// Parse YYYY-MM-DD.
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Parse HH:MM (24-hour).
fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| anyhow::anyhow!("Invalid time '{}'. Expected HH:MM (24-hour)", s))
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for an optional value; empty input means "none", bad input retries.
fn prompt_optional<T, F>(prompt: &str, parse: F) -> Result<Option<T>>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.is_empty() {
            return Ok(None);
        }
        match parse(&input) {
            Ok(result) => return Ok(Some(result)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_date ---

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2025-06-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
        );
        // Surrounding whitespace is tolerated
        assert_eq!(
            parse_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn rejects_non_iso_dates() {
        assert!(parse_date("June 15, 2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    // --- parse_time ---

    #[test]
    fn parses_24_hour_times() {
        assert_eq!(
            parse_time("09:00").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("18:30").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
    }

    #[test]
    fn rejects_am_pm_and_garbage() {
        assert!(parse_time("6 PM").is_err());
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }
}
