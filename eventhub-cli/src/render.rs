//! Terminal rendering for eventhub types.
//!
//! Extension traits that add colored output to eventhub-core types using
//! owo_colors.

use eventhub_core::event::Event;
use eventhub_core::grid::MonthGrid;
use owo_colors::OwoColorize;

/// Extension trait for colored one-line rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{}  {}, {} {}",
            self.title.bold(),
            self.date_label(),
            self.location,
            format!("[{}]", self.id).dimmed()
        )
    }
}

/// Multi-line event card for listings: title, date, time, location.
pub fn event_card(event: &Event) -> String {
    let mut lines = vec![
        event.title.bold().to_string(),
        format!("   {}", event.description),
        format!("   When:  {}, {}", event.date_label(), event.time_label()),
        format!("   Where: {}", event.location),
    ];
    lines.push(format!("   {}", format!("id: {}", event.id).dimmed()));
    lines.join("\n")
}

/// Width of one grid column, day number plus event marker.
const CELL_WIDTH: usize = 4;

/// Render the month grid: weekday header, one row per week, a `*` on days
/// with events, today inverted. Returns the lines to print.
pub fn month_grid_lines(grid: &MonthGrid<'_>) -> Vec<String> {
    let mut lines = Vec::new();

    let header = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .iter()
        .map(|d| format!("{:>width$}", d, width = CELL_WIDTH))
        .collect::<String>();
    lines.push(header.bold().to_string());

    for week in grid.weeks() {
        let mut row = String::new();
        for cell in week {
            match cell.day {
                None => row.push_str(&" ".repeat(CELL_WIDTH)),
                Some(day) => {
                    let marker = if cell.has_events() { "*" } else { " " };
                    let text = format!("{:>3}{}", day, marker);
                    if cell.is_today {
                        row.push_str(&text.reversed().to_string());
                    } else if cell.has_events() {
                        row.push_str(&text.green().to_string());
                    } else {
                        row.push_str(&text);
                    }
                }
            }
        }
        lines.push(row);
    }

    lines
}

/// Per-day event listing below the grid, e.g. "15  Tech Conference 2025".
pub fn month_event_lines(grid: &MonthGrid<'_>) -> Vec<String> {
    let mut lines = Vec::new();

    for cell in &grid.cells {
        let Some(day) = cell.day else { continue };
        for event in &cell.events {
            lines.push(format!(
                "{:>3}  {} {}",
                day,
                event.title,
                format!("[{}]", event.id).dimmed()
            ));
        }
    }

    lines
}

/// Registration bar like "registrations: 1250/2000 (750 spots left)".
pub fn capacity_line(event: &Event) -> String {
    let filled = capacity_bar(event.attendees, event.capacity);
    let summary = format!("{}/{}", event.attendees, event.capacity);

    if event.is_full() {
        format!("{} {} {}", filled, summary, "Sold out".red())
    } else {
        let left = format!(
            "({} {} left)",
            event.spots_left(),
            pluralize("spot", event.spots_left() as usize)
        );
        format!("{} {} {}", filled, summary, left.dimmed())
    }
}

const BAR_WIDTH: usize = 20;

fn capacity_bar(attendees: u32, capacity: u32) -> String {
    let filled = if capacity == 0 {
        BAR_WIDTH
    } else {
        (attendees as usize * BAR_WIDTH / capacity as usize).min(BAR_WIDTH)
    };

    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
