//! Attendance record models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The recorded status of one employee on one calendar date.
///
/// `Late` and `HalfDay` still count as worked days during aggregation.
/// Statuses this engine does not know about deserialize to [`Unknown`]
/// and are ignored for counting rather than aborting aggregation, so
/// newer upstream statuses stay forward-compatible.
///
/// [`Unknown`]: AttendanceStatus::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked a full day.
    Present,
    /// The employee did not work.
    Absent,
    /// The employee arrived late but worked the day.
    Late,
    /// The employee worked half the day.
    HalfDay,
    /// Any status this engine does not recognize.
    #[serde(other)]
    Unknown,
}

/// One attendance row: one employee on one calendar date.
///
/// At most one record exists per (employee, date); the data store enforces
/// that invariant. Check-in/check-out stamps are optional because records
/// can also come from manual entry.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     status: AttendanceStatus::Present,
///     check_in: None,
///     check_out: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date the record covers.
    pub date: NaiveDate,
    /// The recorded status for the day.
    pub status: AttendanceStatus,
    /// When the employee checked in, if captured.
    pub check_in: Option<DateTime<Utc>>,
    /// When the employee checked out, if captured.
    pub check_out: Option<DateTime<Utc>>,
}
