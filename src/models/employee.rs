//! Employee and salary structure models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee known to the payroll engine.
///
/// Employees are soft-deactivated via the `active` flag rather than
/// deleted, so payroll history stays resolvable.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::models::Employee;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ayesha Rahman".to_string(),
///     department: Some("Engineering".to_string()),
///     designation: Some("Developer".to_string()),
///     active: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Caller-supplied unique employee id.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to, if assigned.
    pub department: Option<String>,
    /// The employee's designation (job title), if assigned.
    pub designation: Option<String>,
    /// Whether the employee is currently active. Inactive employees are
    /// excluded from batch payroll generation.
    pub active: bool,
}

/// An employee's recurring compensation template.
///
/// A structure is effective-dated; the one with the most recent
/// `effective_from` on or before the calculation date is "current".
/// All monetary fields serialize as decimal strings.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::models::SalaryStructure;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let structure = SalaryStructure {
///     employee_id: "emp_001".to_string(),
///     basic_salary: Decimal::from_str("30000").unwrap(),
///     house_allowance: Decimal::from_str("5000").unwrap(),
///     medical_allowance: Decimal::from_str("1500").unwrap(),
///     travel_allowance: Decimal::ZERO,
///     food_allowance: Decimal::ZERO,
///     other_allowance: Decimal::ZERO,
///     effective_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// };
///
/// assert_eq!(structure.total_allowances(), Decimal::from_str("6500").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// The employee this structure belongs to.
    pub employee_id: String,
    /// Monthly basic salary.
    #[serde(with = "rust_decimal::serde::str")]
    pub basic_salary: Decimal,
    /// House rent allowance.
    #[serde(with = "rust_decimal::serde::str")]
    pub house_allowance: Decimal,
    /// Medical allowance.
    #[serde(with = "rust_decimal::serde::str")]
    pub medical_allowance: Decimal,
    /// Travel allowance.
    #[serde(with = "rust_decimal::serde::str")]
    pub travel_allowance: Decimal,
    /// Food allowance.
    #[serde(with = "rust_decimal::serde::str")]
    pub food_allowance: Decimal,
    /// Any other recurring allowance.
    #[serde(with = "rust_decimal::serde::str")]
    pub other_allowance: Decimal,
    /// The date this structure takes effect.
    pub effective_from: NaiveDate,
}

impl SalaryStructure {
    /// Returns the exact sum of the five named allowance components.
    pub fn total_allowances(&self) -> Decimal {
        self.house_allowance
            + self.medical_allowance
            + self.travel_allowance
            + self.food_allowance
            + self.other_allowance
    }
}
