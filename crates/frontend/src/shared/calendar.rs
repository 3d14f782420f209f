//! Month-grid math for the order calendar.

use chrono::{Datelike, NaiveDate, Weekday};

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The month currently shown in the calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl MonthView {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", MONTHS[(self.month - 1) as usize], self.year)
    }

    /// Forward navigation stops at the real current month.
    pub fn next_disabled(&self, today: NaiveDate) -> bool {
        self.year == today.year() && self.month >= today.month()
    }

    pub fn date_string(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next_first {
        Some(d) => d.pred_opt().map(|p| p.day()).unwrap_or(31),
        None => 31,
    }
}

/// Weekday of the 1st, with Sunday as 0 (the layout the grid header uses).
fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// The month laid out as a flat 7-column grid: `None` leading blanks up to
/// the first weekday, then `Some(day)` for each day of the month.
pub fn month_grid(view: MonthView) -> Vec<Option<u32>> {
    let blanks = first_weekday(view.year, view.month) as usize;
    let days = days_in_month(view.year, view.month);
    let mut grid = vec![None; blanks];
    grid.extend((1..=days).map(Some));
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_for_march_2024() {
        // 2024-03-01 is a Friday: five leading blanks, 31 days.
        let grid = month_grid(MonthView {
            year: 2024,
            month: 3,
        });
        assert_eq!(grid.len(), 5 + 31);
        assert_eq!(grid[4], None);
        assert_eq!(grid[5], Some(1));
        assert_eq!(grid.last().copied().unwrap(), Some(31));
    }

    #[test]
    fn leap_february_has_29_days() {
        let grid = month_grid(MonthView {
            year: 2024,
            month: 2,
        });
        assert_eq!(grid.iter().filter(|d| d.is_some()).count(), 29);
    }

    #[test]
    fn prev_and_next_wrap_year_boundaries() {
        let jan = MonthView {
            year: 2024,
            month: 1,
        };
        assert_eq!(
            jan.prev(),
            MonthView {
                year: 2023,
                month: 12
            }
        );
        let dec = MonthView {
            year: 2023,
            month: 12,
        };
        assert_eq!(
            dec.next(),
            MonthView {
                year: 2024,
                month: 1
            }
        );
    }

    #[test]
    fn next_is_clamped_at_current_month() {
        let today = date(2024, 3, 15);
        assert!(MonthView {
            year: 2024,
            month: 3
        }
        .next_disabled(today));
        assert!(MonthView {
            year: 2024,
            month: 4
        }
        .next_disabled(today));
        assert!(!MonthView {
            year: 2024,
            month: 2
        }
        .next_disabled(today));
        assert!(!MonthView {
            year: 2023,
            month: 12
        }
        .next_disabled(today));
    }

    #[test]
    fn date_string_is_zero_padded() {
        let view = MonthView {
            year: 2024,
            month: 3,
        };
        assert_eq!(view.date_string(7), "2024-03-07");
    }
}
