//! Per-employee payroll calculation.
//!
//! This module combines a salary structure with an aggregated attendance
//! summary to produce one payroll record per employee per month. It is a
//! pure function of its inputs; the overtime flag arrives explicitly via
//! [`PayrollSettings`] rather than being read from global state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::PayrollSettings;
use crate::models::{PayMonth, PayrollRecord, PayrollStatus, SalaryStructure};
use crate::money::round_money;

use super::attendance::AttendanceSummary;

/// The fixed divisor used to derive the daily rate from the monthly basic
/// salary. Preserved as observed: 30 regardless of the actual number of
/// days in the month, including February.
pub const MONTH_DIVISOR_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Hours in a standard working day, used to derive the hourly rate.
pub const STANDARD_DAILY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The multiplier applied to the hourly rate for overtime pay.
pub const OVERTIME_RATE_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

const HALF_DAY_FACTOR: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const LATE_FRACTION_DIVISOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Calculates one payroll record from a salary structure and an attendance
/// summary.
///
/// The calculation follows the fixed business-rule set:
///
/// 1. `daily_rate = basic_salary / 30`; `hourly_rate = daily_rate / 8`.
/// 2. Absent days (already including converted lates) deduct a full daily
///    rate each.
/// 3. Residual late days (those not converted to an absence) each deduct
///    one third of a daily rate.
/// 4. Half days each deduct half a daily rate.
/// 5. Overtime pays `hourly_rate * 1.5` per hour, but only when
///    `settings.overtime_enabled` is set; otherwise the hours are carried
///    on the record unmonetized.
/// 6. `gross = basic + allowances`; `net = gross - deductions + overtime`.
///
/// Each monetary component is rounded to currency precision before the net
/// is assembled, so the stored fields always reconcile exactly.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::calculation::{AttendanceSummary, calculate_payroll};
/// use payroll_ledger_engine::config::PayrollSettings;
/// use payroll_ledger_engine::models::{PayMonth, SalaryStructure};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let structure = SalaryStructure {
///     employee_id: "emp_001".to_string(),
///     basic_salary: Decimal::from_str("30000").unwrap(),
///     house_allowance: Decimal::ZERO,
///     medical_allowance: Decimal::ZERO,
///     travel_allowance: Decimal::ZERO,
///     food_allowance: Decimal::ZERO,
///     other_allowance: Decimal::ZERO,
///     effective_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// };
/// let attendance = AttendanceSummary {
///     present_days: 20,
///     absent_days: 2,
///     late_days: 1,
///     half_days: 0,
///     overtime_hours: Decimal::ZERO,
/// };
/// let period = PayMonth { month: 1, year: 2026 };
///
/// let record = calculate_payroll(
///     &structure,
///     &attendance,
///     &PayrollSettings::default(),
///     period,
///     "admin",
///     Utc::now(),
/// );
///
/// assert_eq!(record.net_salary, Decimal::from_str("27666.67").unwrap());
/// ```
pub fn calculate_payroll(
    structure: &SalaryStructure,
    attendance: &AttendanceSummary,
    settings: &PayrollSettings,
    period: PayMonth,
    generated_by: &str,
    generated_at: DateTime<Utc>,
) -> PayrollRecord {
    let basic_salary = round_money(structure.basic_salary);
    let total_allowances = round_money(structure.total_allowances());
    let gross_salary = basic_salary + total_allowances;

    let daily_rate = structure.basic_salary / MONTH_DIVISOR_DAYS;
    let hourly_rate = daily_rate / STANDARD_DAILY_HOURS;

    let absent_deduction = round_money(daily_rate * Decimal::from(attendance.absent_days));
    let late_deduction = round_money(
        daily_rate * Decimal::from(attendance.residual_late_days()) / LATE_FRACTION_DIVISOR,
    );
    let half_day_deduction =
        round_money(daily_rate * HALF_DAY_FACTOR * Decimal::from(attendance.half_days));
    let attendance_deduction = absent_deduction + late_deduction + half_day_deduction;

    let overtime_amount = if settings.overtime_enabled {
        round_money(hourly_rate * OVERTIME_RATE_MULTIPLIER * attendance.overtime_hours)
    } else {
        if attendance.overtime_hours > Decimal::ZERO {
            debug!(
                employee_id = %structure.employee_id,
                overtime_hours = %attendance.overtime_hours,
                "Overtime disabled; hours recorded but not monetized"
            );
        }
        Decimal::ZERO
    };

    // Loan and other deductions are zero at generation; loans come from an
    // external collaborator and other deductions only ever hold the net
    // effect of later adjustments.
    let loan_deduction = Decimal::ZERO;
    let other_deductions = Decimal::ZERO;
    let total_deductions = attendance_deduction + loan_deduction + other_deductions;
    let net_salary = gross_salary - total_deductions + overtime_amount;

    PayrollRecord {
        id: Uuid::new_v4(),
        employee_id: structure.employee_id.clone(),
        month: period.month,
        year: period.year,
        basic_salary,
        total_allowances,
        gross_salary,
        attendance_deduction,
        loan_deduction,
        other_deductions,
        total_deductions,
        overtime_amount,
        net_salary,
        present_days: attendance.present_days,
        absent_days: attendance.absent_days,
        late_days: attendance.late_days,
        half_days: attendance.half_days,
        overtime_hours: attendance.overtime_hours,
        status: PayrollStatus::Generated,
        generated_at,
        generated_by: generated_by.to_string(),
        paid_at: None,
    }
}
