//! Attendance aggregation functionality.
//!
//! This module reduces the raw day-records of one employee over one pay
//! month into the counts the payroll calculator consumes, applying the
//! late-to-absent conversion and summing overtime hours from check-in and
//! check-out stamps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AttendanceRecord, AttendanceStatus, PayMonth};

/// Daily hours above which time counts as overtime.
pub const OVERTIME_DAILY_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// How many accumulated late days convert into one additional absent day.
pub const LATE_DAYS_PER_ABSENT: u32 = 3;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// The aggregated attendance picture for one employee over one pay month.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::calculation::AttendanceSummary;
/// use rust_decimal::Decimal;
///
/// let summary = AttendanceSummary {
///     present_days: 21,
///     absent_days: 2,
///     late_days: 4,
///     half_days: 1,
///     overtime_hours: Decimal::ZERO,
/// };
/// // 4 late days: 3 converted to one absence, 1 left for deduction
/// assert_eq!(summary.residual_late_days(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Days counted as worked. Late and half days increment this too.
    pub present_days: u32,
    /// Absent days, including those converted from accumulated lates.
    pub absent_days: u32,
    /// The raw number of late days in the month.
    pub late_days: u32,
    /// Half days worked.
    pub half_days: u32,
    /// Total hours worked above the daily threshold, across the month.
    #[serde(with = "rust_decimal::serde::str")]
    pub overtime_hours: Decimal,
}

impl AttendanceSummary {
    /// Late days not yet converted into a full absence. These attract the
    /// partial one-third-of-a-day deduction.
    pub fn residual_late_days(&self) -> u32 {
        self.late_days % LATE_DAYS_PER_ABSENT
    }
}

/// Aggregates one employee's attendance rows for a pay month.
///
/// Rows outside the month are skipped. Each remaining row is classified by
/// status: `present` increments the present count; `absent` the absent
/// count; `late` increments both present and late (a late arrival is still
/// a worked day); `half_day` increments both present and half-day. Rows
/// with a status this engine does not recognize are ignored without
/// aborting aggregation.
///
/// After classification, every [`LATE_DAYS_PER_ABSENT`] accumulated late
/// days convert into one additional absent day; the remainder stays as
/// residual lateness for the partial deduction.
///
/// Overtime hours are summed from rows that carry both check-in and
/// check-out stamps: any elapsed time above
/// [`OVERTIME_DAILY_THRESHOLD_HOURS`] counts. Missing or reversed stamps
/// are skipped, never an error. Whether those hours are monetized is the
/// payroll calculator's decision, driven by the overtime setting.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::calculation::aggregate_attendance;
/// use payroll_ledger_engine::models::{AttendanceRecord, AttendanceStatus, PayMonth};
/// use chrono::NaiveDate;
///
/// let period = PayMonth { month: 1, year: 2026 };
/// let records = vec![
///     AttendanceRecord {
///         employee_id: "emp_001".to_string(),
///         date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///         status: AttendanceStatus::Late,
///         check_in: None,
///         check_out: None,
///     },
/// ];
///
/// let summary = aggregate_attendance(&records, period);
/// assert_eq!(summary.present_days, 1);
/// assert_eq!(summary.late_days, 1);
/// ```
pub fn aggregate_attendance(records: &[AttendanceRecord], period: PayMonth) -> AttendanceSummary {
    let mut present_days = 0u32;
    let mut absent_days = 0u32;
    let mut late_days = 0u32;
    let mut half_days = 0u32;
    let mut overtime_hours = Decimal::ZERO;

    for record in records {
        if !period.contains(record.date) {
            continue;
        }

        match record.status {
            AttendanceStatus::Present => present_days += 1,
            AttendanceStatus::Absent => absent_days += 1,
            AttendanceStatus::Late => {
                present_days += 1;
                late_days += 1;
            }
            AttendanceStatus::HalfDay => {
                present_days += 1;
                half_days += 1;
            }
            AttendanceStatus::Unknown => {
                debug!(
                    employee_id = %record.employee_id,
                    date = %record.date,
                    "Skipping attendance record with unrecognized status"
                );
                continue;
            }
        }

        if let Some(excess) = overtime_excess(record) {
            overtime_hours += excess;
        }
    }

    // Every accumulated block of lates becomes a full absence; the
    // remainder stays as partial-day lateness for deduction purposes.
    absent_days += late_days / LATE_DAYS_PER_ABSENT;

    AttendanceSummary {
        present_days,
        absent_days,
        late_days,
        half_days,
        overtime_hours,
    }
}

/// Returns the hours worked above the daily threshold for one record, or
/// `None` when stamps are missing, reversed, or under the threshold.
fn overtime_excess(record: &AttendanceRecord) -> Option<Decimal> {
    let check_in = record.check_in?;
    let check_out = record.check_out?;
    if check_out <= check_in {
        debug!(
            employee_id = %record.employee_id,
            date = %record.date,
            "Skipping reversed check-in/check-out pair for overtime"
        );
        return None;
    }

    let minutes = (check_out - check_in).num_minutes();
    let hours = Decimal::from(minutes) / MINUTES_PER_HOUR;
    if hours > OVERTIME_DAILY_THRESHOLD_HOURS {
        Some(hours - OVERTIME_DAILY_THRESHOLD_HOURS)
    } else {
        None
    }
}
