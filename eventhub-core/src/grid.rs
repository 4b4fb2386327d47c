//! Month-grid construction.
//!
//! Builds the ordered sequence of day cells backing the calendar's month
//! view: leading blank cells to align day 1 with its weekday column,
//! followed by one populated cell per day of the month, each annotated with
//! the events starting on that day.
//!
//! Months are zero-based (0 = January) throughout this module. Callers are
//! expected to normalize month overflow/underflow (see [`MonthCursor`])
//! before calling in; these are total functions over well-formed
//! `(year, month0)` pairs and report no errors.
//!
//! [`MonthCursor`]: crate::month::MonthCursor

use chrono::{Datelike, NaiveDate};

use crate::event::Event;

/// One cell of the month grid: either blank leading padding or a day of the
/// month with its events.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    /// 1-based day of month; `None` for a leading blank cell
    pub day: Option<u32>,
    /// True iff this cell's date equals the injected `today`
    pub is_today: bool,
    /// Events starting on this day, in input order
    pub events: Vec<&'a Event>,
}

impl DayCell<'_> {
    fn blank() -> Self {
        DayCell {
            day: None,
            is_today: false,
            events: Vec::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// A full month view: `first_weekday_of_month` blank cells, then exactly
/// `days_in_month` populated cells. The grid is not padded out to end on a
/// week boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    pub year: i32,
    /// Zero-based month (0 = January)
    pub month0: u32,
    pub cells: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Number of leading blank cells.
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_blank()).count()
    }

    /// Cells grouped into week rows of 7 (the last row may be short).
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell<'a>> {
        self.cells.chunks(7)
    }
}

/// First day of the given zero-based month.
fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .unwrap_or_else(|| panic!("invalid year/month: {}/{}", year, month0))
}

/// Number of days in the given month (zero-based, 0 = January).
///
/// Computed as the day-of-month of the date one day before the first day of
/// the following month, so leap years fall out of the calendar arithmetic.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = if month0 == 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };

    first_of_month(next_year, next_month0)
        .pred_opt()
        .unwrap_or_else(|| panic!("date out of range: {}/{}", year, month0))
        .day()
}

/// Weekday of the 1st of the month, 0 = Sunday .. 6 = Saturday.
///
/// Proleptic Gregorian calendar, no locale dependency.
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    first_of_month(year, month0).weekday().num_days_from_sunday()
}

/// Events whose start date equals `date`, in input order.
///
/// Start-date match only: a multi-day event is associated with the day it
/// begins, not with intermediate or end days, even though `end_date` would
/// cover them.
pub fn events_on_date<'a>(events: &'a [Event], date: NaiveDate) -> Vec<&'a Event> {
    events.iter().filter(|e| e.start_date == date).collect()
}

/// Build the month grid for `(year, month0)` from `events`.
///
/// `today` is injected rather than read from the clock so the result is a
/// pure function of its inputs.
pub fn build_month_grid<'a>(
    year: i32,
    month0: u32,
    events: &'a [Event],
    today: NaiveDate,
) -> MonthGrid<'a> {
    let leading = first_weekday_of_month(year, month0);
    let days = days_in_month(year, month0);

    let mut cells = Vec::with_capacity((leading + days) as usize);

    for _ in 0..leading {
        cells.push(DayCell::blank());
    }

    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(year, month0 + 1, day)
            .unwrap_or_else(|| panic!("invalid date: {}-{}-{}", year, month0 + 1, day));

        cells.push(DayCell {
            day: Some(day),
            is_today: date == today,
            events: events_on_date(events, date),
        });
    }

    MonthGrid {
        year,
        month0,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event_on(id: &str, start: NaiveDate, end: Option<NaiveDate>) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: String::new(),
            long_description: None,
            start_date: start,
            end_date: end,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            location: "Online".to_string(),
            address: None,
            organizer: None,
            category: EventCategory::Other,
            attendees: 0,
            capacity: 100,
        }
    }

    // --- days_in_month ---

    #[test]
    fn february_leap_and_common_years() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
    }

    #[test]
    fn century_leap_year_rules() {
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
    }

    #[test]
    fn month_lengths_across_a_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month0, days) in expected.into_iter().enumerate() {
            assert_eq!(days_in_month(2023, month0 as u32), days);
        }
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(days_in_month(2025, 11), 31);
    }

    // --- first_weekday_of_month ---

    #[test]
    fn first_weekday_known_dates() {
        // June 1, 2025 is a Sunday; September 1, 2025 is a Monday
        assert_eq!(first_weekday_of_month(2025, 5), 0);
        assert_eq!(first_weekday_of_month(2025, 8), 1);
        // February 1, 2020 is a Saturday
        assert_eq!(first_weekday_of_month(2020, 1), 6);
    }

    // --- events_on_date ---

    #[test]
    fn filters_by_exact_start_date_preserving_order() {
        let events = vec![
            event_on("a", date(2025, 6, 15), None),
            event_on("b", date(2025, 6, 5), None),
            event_on("c", date(2025, 6, 15), None),
        ];

        let hits = events_on_date(&events, date(2025, 6, 15));
        let ids: Vec<&str> = hits.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn end_date_does_not_extend_the_match() {
        // Multi-day event June 15-17: only the start day matches
        let events = vec![event_on("a", date(2025, 6, 15), Some(date(2025, 6, 17)))];

        assert_eq!(events_on_date(&events, date(2025, 6, 16)).len(), 0);
        assert_eq!(events_on_date(&events, date(2025, 6, 17)).len(), 0);
        assert_eq!(events_on_date(&events, date(2025, 6, 15)).len(), 1);
    }

    // --- build_month_grid ---

    #[test]
    fn grid_length_is_padding_plus_days() {
        let today = date(2025, 1, 1);
        for year in [1900, 2000, 2023, 2024, 2025] {
            for month0 in 0..12 {
                let grid = build_month_grid(year, month0, &[], today);
                let expected = first_weekday_of_month(year, month0) + days_in_month(year, month0);
                assert_eq!(grid.cells.len() as u32, expected, "{}/{}", year, month0);
                assert_eq!(grid.leading_blanks() as u32, first_weekday_of_month(year, month0));
            }
        }
    }

    #[test]
    fn populated_cells_count_from_one() {
        let grid = build_month_grid(2025, 5, &[], date(2025, 1, 1));
        let days: Vec<u32> = grid.cells.iter().filter_map(|c| c.day).collect();
        assert_eq!(days, (1..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn event_lands_only_on_its_start_day() {
        let events = vec![event_on("1", date(2025, 6, 15), None)];
        let grid = build_month_grid(2025, 5, &events, date(2025, 1, 1));

        for cell in &grid.cells {
            match cell.day {
                Some(15) => {
                    assert_eq!(cell.events.len(), 1);
                    assert_eq!(cell.events[0].id, "1");
                }
                _ => assert!(cell.events.is_empty()),
            }
        }
    }

    #[test]
    fn empty_events_yield_empty_cells() {
        let grid = build_month_grid(2025, 5, &[], date(2025, 6, 10));
        assert!(grid.cells.iter().all(|c| c.events.is_empty()));
    }

    #[test]
    fn today_marks_exactly_one_cell_in_displayed_month() {
        let grid = build_month_grid(2025, 5, &[], date(2025, 6, 10));
        let marked: Vec<u32> = grid
            .cells
            .iter()
            .filter(|c| c.is_today)
            .filter_map(|c| c.day)
            .collect();
        assert_eq!(marked, vec![10]);
    }

    #[test]
    fn today_outside_displayed_month_marks_nothing() {
        let grid = build_month_grid(2025, 5, &[], date(2025, 7, 10));
        assert!(grid.cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn building_twice_is_structurally_equal() {
        let events = vec![
            event_on("1", date(2025, 6, 15), Some(date(2025, 6, 17))),
            event_on("2", date(2025, 6, 5), None),
        ];
        let today = date(2025, 6, 10);

        let a = build_month_grid(2025, 5, &events, today);
        let b = build_month_grid(2025, 5, &events, today);
        assert_eq!(a, b);
    }

    #[test]
    fn weeks_chunk_into_rows_of_seven() {
        // June 2025: no leading blanks, 30 days -> rows of 7,7,7,7,2
        let grid = build_month_grid(2025, 5, &[], date(2025, 1, 1));
        let lens: Vec<usize> = grid.weeks().map(|w| w.len()).collect();
        assert_eq!(lens, vec![7, 7, 7, 7, 2]);
    }
}
