use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use eventhub_core::config::{HubConfig, ViewMode};
use eventhub_core::event::Event;
use eventhub_core::grid::build_month_grid;
use eventhub_core::month::MonthCursor;
use eventhub_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::{event_card, month_event_lines, month_grid_lines};

pub fn run(
    store: &EventStore,
    config: &HubConfig,
    today: NaiveDate,
    month: Option<&str>,
    offset: i32,
    view: Option<&str>,
) -> Result<()> {
    let view = match view {
        Some(s) => s.parse::<ViewMode>().map_err(|e| anyhow::anyhow!(e))?,
        None => config.default_view,
    };

    // Anchor at the requested (or current) month, then apply navigation.
    // The cursor owns the year-rollover arithmetic; the grid builder only
    // ever sees normalized (year, month) pairs.
    let anchor = match month {
        Some(s) => parse_month(s)?,
        None => MonthCursor::from_date(today),
    };
    let cursor = anchor.advance(offset);

    match view {
        ViewMode::Month => render_month(store, cursor, today),
        ViewMode::List => render_list(store),
    }

    Ok(())
}

/// Parse "YYYY-MM" into a cursor.
fn parse_month(s: &str) -> Result<MonthCursor> {
    let (year, month) = s
        .split_once('-')
        .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s))?;

    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year in '{}'", s))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month in '{}'", s))?;

    if !(1..=12).contains(&month) {
        bail!("Month out of range in '{}'. Expected 01-12", s);
    }

    Ok(MonthCursor::new(year, month - 1))
}

fn render_month(store: &EventStore, cursor: MonthCursor, today: NaiveDate) {
    let grid = build_month_grid(cursor.year, cursor.month0, store.events(), today);

    println!("{}", cursor.label().bold());
    println!();
    for line in month_grid_lines(&grid) {
        println!("{}", line);
    }

    let listing = month_event_lines(&grid);
    if listing.is_empty() {
        println!();
        println!("{}", "No events this month".dimmed());
    } else {
        println!();
        for line in listing {
            println!("{}", line);
        }
    }
}

/// Every event, date order. The list view shows past events too; only the
/// grid view is scoped to a single month.
fn list_events(store: &EventStore) -> Vec<&Event> {
    let mut events: Vec<&Event> = store.events().iter().collect();
    events.sort_by_key(|e| e.start_date);
    events
}

fn render_list(store: &EventStore) {
    let events = list_events(store);

    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return;
    }

    for (i, event) in events.iter().enumerate() {
        println!("{}", event_card(event));
        if i < events.len() - 1 {
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_month ---

    #[test]
    fn parses_year_and_month() {
        assert_eq!(parse_month("2025-06").unwrap(), MonthCursor::new(2025, 5));
        assert_eq!(parse_month("2024-01").unwrap(), MonthCursor::new(2024, 0));
        assert_eq!(parse_month("2024-12").unwrap(), MonthCursor::new(2024, 11));
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(parse_month("2025-00").is_err());
        assert!(parse_month("2025-13").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_month("june").is_err());
        assert!(parse_month("2025/06").is_err());
    }

    // --- list_events ---

    #[test]
    fn list_view_includes_past_events_in_date_order() {
        let store = EventStore::seeded();
        let ids: Vec<&str> = list_events(&store).iter().map(|e| e.id.as_str()).collect();

        // Past events (6: March, 5: April) come first, nothing is filtered
        assert_eq!(ids, vec!["6", "5", "2", "3", "4", "1"]);
    }

    #[test]
    fn offset_navigation_rolls_years() {
        let cursor = parse_month("2025-01").unwrap().advance(-1);
        assert_eq!(cursor, MonthCursor::new(2024, 11));

        let cursor = parse_month("2025-12").unwrap().advance(1);
        assert_eq!(cursor, MonthCursor::new(2026, 0));
    }
}
