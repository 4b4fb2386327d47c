//! Month navigation.
//!
//! The grid builder requires an already-normalized `(year, month0)` pair;
//! this cursor owns the rollover arithmetic for moving through months, the
//! way the calendar view's previous/next buttons do.

use chrono::{Datelike, NaiveDate};

/// A `(year, month)` position in the calendar, month zero-based
/// (0 = January). Always normalized: `month0` is in `0..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        debug_assert!(month0 < 12);
        MonthCursor { year, month0 }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Move forward one month, rolling December into the next year.
    pub fn next(self) -> Self {
        if self.month0 == 11 {
            MonthCursor {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            MonthCursor {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// Move back one month, rolling January into the previous year.
    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            MonthCursor {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            MonthCursor {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    /// Move by a signed number of months.
    pub fn advance(self, months: i32) -> Self {
        let total = self.year as i64 * 12 + self.month0 as i64 + months as i64;
        MonthCursor {
            year: total.div_euclid(12) as i32,
            month0: total.rem_euclid(12) as u32,
        }
    }

    /// First day of the month under the cursor.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .unwrap_or_else(|| panic!("invalid cursor: {}/{}", self.year, self.month0))
    }

    /// Display label, e.g. "June 2025".
    pub fn label(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- next / prev ---

    #[test]
    fn next_within_year() {
        assert_eq!(MonthCursor::new(2025, 4).next(), MonthCursor::new(2025, 5));
    }

    #[test]
    fn next_rolls_december_into_next_year() {
        assert_eq!(MonthCursor::new(2025, 11).next(), MonthCursor::new(2026, 0));
    }

    #[test]
    fn prev_rolls_january_into_previous_year() {
        assert_eq!(MonthCursor::new(2025, 0).prev(), MonthCursor::new(2024, 11));
    }

    #[test]
    fn next_then_prev_is_identity() {
        let cursor = MonthCursor::new(2025, 11);
        assert_eq!(cursor.next().prev(), cursor);
    }

    // --- advance ---

    #[test]
    fn advance_matches_repeated_next() {
        let mut stepped = MonthCursor::new(2025, 10);
        for _ in 0..15 {
            stepped = stepped.next();
        }
        assert_eq!(MonthCursor::new(2025, 10).advance(15), stepped);
    }

    #[test]
    fn advance_negative_across_years() {
        assert_eq!(
            MonthCursor::new(2025, 1).advance(-14),
            MonthCursor::new(2023, 11)
        );
    }

    #[test]
    fn advance_zero_is_identity() {
        let cursor = MonthCursor::new(2025, 5);
        assert_eq!(cursor.advance(0), cursor);
    }

    // --- label ---

    #[test]
    fn label_formats_month_and_year() {
        assert_eq!(MonthCursor::new(2025, 5).label(), "June 2025");
        assert_eq!(MonthCursor::new(2024, 0).label(), "January 2024");
    }
}
