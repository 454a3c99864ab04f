//! Pay period model: one calendar month of one year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A payroll period: one (month, year) pair.
///
/// Payroll records are unique per (employee, month, year), and attendance
/// aggregation selects rows between the period's first and last day
/// inclusive.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::models::PayMonth;
/// use chrono::NaiveDate;
///
/// let period = PayMonth { month: 2, year: 2026 };
/// assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2026, 2, 1));
/// assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2026, 2, 28));
/// assert!(period.contains(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayMonth {
    /// The calendar month, 1-12.
    pub month: u32,
    /// The calendar year.
    pub year: i32,
}

impl PayMonth {
    /// Returns the first day of the period, or `None` if the month is out
    /// of range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Returns the last day of the period, or `None` if the month is out
    /// of range.
    pub fn last_day(&self) -> Option<NaiveDate> {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
    }

    /// Checks if a date falls within this period, inclusive of both ends.
    ///
    /// Returns `false` for an out-of-range month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.first_day(), self.last_day()) {
            (Some(first), Some(last)) => date >= first && date <= last,
            _ => false,
        }
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
