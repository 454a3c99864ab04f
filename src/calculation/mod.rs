//! Calculation logic for the Payroll & Ledger Engine.
//!
//! This module contains the pure calculation functions: attendance
//! aggregation with the late-to-absent conversion, per-employee payroll
//! calculation from a salary structure and an attendance summary,
//! adjustment recomputation that keeps net salary a pure function of the
//! current adjustment list, and the general ledger running-balance
//! computation.

mod adjustments;
mod attendance;
mod ledger;
mod salary;

pub use adjustments::{AdjustmentRecomputation, recompute_adjustments};
pub use attendance::{
    AttendanceSummary, LATE_DAYS_PER_ABSENT, OVERTIME_DAILY_THRESHOLD_HOURS, aggregate_attendance,
};
pub use ledger::compute_general_ledger;
pub use salary::{
    MONTH_DIVISOR_DAYS, OVERTIME_RATE_MULTIPLIER, STANDARD_DAILY_HOURS, calculate_payroll,
};
