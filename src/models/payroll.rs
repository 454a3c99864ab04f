//! Payroll record and salary adjustment models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::EngineError;

/// The lifecycle status of a payroll record.
///
/// Transitions are monotonic in practice (draft, then generated, then
/// paid), though the engine does not hard-enforce the order. Setting
/// `Paid` stamps the payment timestamp the general ledger later uses to
/// decide inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Created but not yet confirmed.
    Draft,
    /// Produced by a generation run.
    Generated,
    /// Paid out; included in the general ledger.
    Paid,
}

impl FromStr for PayrollStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "generated" => Ok(Self::Generated),
            "paid" => Ok(Self::Paid),
            other => Err(EngineError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Generated => "generated",
            Self::Paid => "paid",
        };
        f.write_str(s)
    }
}

/// The type of a discretionary salary adjustment.
///
/// Only [`Bonus`] adds to net salary; every other type subtracts.
///
/// [`Bonus`]: AdjustmentType::Bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    /// A one-off addition to net salary.
    Bonus,
    /// A disciplinary or corrective subtraction.
    Penalty,
    /// An instalment against an outstanding loan.
    LoanDeduction,
    /// Recovery of a salary advance.
    Advance,
    /// Any other subtraction.
    Other,
}

impl AdjustmentType {
    /// Whether this adjustment type adds to net salary. Only bonuses add;
    /// all other types subtract.
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Bonus)
    }
}

impl FromStr for AdjustmentType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bonus" => Ok(Self::Bonus),
            "penalty" => Ok(Self::Penalty),
            "loan_deduction" => Ok(Self::LoanDeduction),
            "advance" => Ok(Self::Advance),
            "other" => Ok(Self::Other),
            other => Err(EngineError::InvalidAdjustmentType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AdjustmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Bonus => "bonus",
            Self::Penalty => "penalty",
            Self::LoanDeduction => "loan_deduction",
            Self::Advance => "advance",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

/// A discretionary one-off addition or subtraction against one payroll
/// record.
///
/// Adjustments are immutable once created; the only mutation is deletion,
/// after which the owning record's net salary is recomputed from the
/// remaining adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryAdjustment {
    /// Unique adjustment id.
    pub id: Uuid,
    /// The payroll record this adjustment belongs to.
    pub payroll_id: Uuid,
    /// The adjustment type.
    #[serde(rename = "type")]
    pub kind: AdjustmentType,
    /// The adjustment amount. Strictly positive, enforced at insertion;
    /// the type decides the sign applied during recomputation.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Free-text reason supplied by the actor.
    pub reason: String,
    /// Who created the adjustment.
    pub created_by: String,
    /// When the adjustment was created.
    pub created_at: DateTime<Utc>,
}

/// One month's computed pay outcome for one employee.
///
/// Records are unique per (employee, month, year); regeneration for a
/// period deletes the existing record before inserting the fresh one. All
/// monetary fields are rounded to currency precision and serialize as
/// decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique record id.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar month, 1-12.
    pub month: u32,
    /// The calendar year.
    pub year: i32,

    /// Monthly basic salary at generation time.
    #[serde(with = "rust_decimal::serde::str")]
    pub basic_salary: Decimal,
    /// Sum of the five allowance components.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_allowances: Decimal,
    /// Basic salary plus total allowances.
    #[serde(with = "rust_decimal::serde::str")]
    pub gross_salary: Decimal,
    /// Attendance-based deductions: absent days, residual late days, and
    /// half days combined.
    #[serde(with = "rust_decimal::serde::str")]
    pub attendance_deduction: Decimal,
    /// Loan instalment deduction, provisioned by the loans collaborator.
    /// Zero at generation.
    #[serde(with = "rust_decimal::serde::str")]
    pub loan_deduction: Decimal,
    /// Net effect of non-bonus adjustments, clamped at zero when bonuses
    /// outweigh them.
    #[serde(with = "rust_decimal::serde::str")]
    pub other_deductions: Decimal,
    /// Sum of attendance, loan, and other deductions.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_deductions: Decimal,
    /// Monetized overtime, zero when overtime is disabled.
    #[serde(with = "rust_decimal::serde::str")]
    pub overtime_amount: Decimal,
    /// The salary actually owed for the month.
    #[serde(with = "rust_decimal::serde::str")]
    pub net_salary: Decimal,

    /// Days counted as worked (includes late and half days).
    pub present_days: u32,
    /// Absent days, after late-to-absent conversion.
    pub absent_days: u32,
    /// Raw late-day count for the month.
    pub late_days: u32,
    /// Half days worked.
    pub half_days: u32,
    /// Overtime hours above the daily threshold.
    #[serde(with = "rust_decimal::serde::str")]
    pub overtime_hours: Decimal,

    /// Lifecycle status.
    pub status: PayrollStatus,
    /// When the record was generated.
    pub generated_at: DateTime<Utc>,
    /// Who triggered generation.
    pub generated_by: String,
    /// When the record was marked paid, if it has been.
    pub paid_at: Option<DateTime<Utc>>,
}

impl PayrollRecord {
    /// The net salary before any adjustments: gross salary minus the
    /// attendance deduction, plus overtime. Adjustment recomputation always
    /// starts from this figure, never from the previously stored net, so
    /// repeated add/delete cycles cannot drift.
    pub fn base_net_salary(&self) -> Decimal {
        self.gross_salary - self.attendance_deduction + self.overtime_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record() -> PayrollRecord {
        PayrollRecord {
            id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            month: 1,
            year: 2026,
            basic_salary: dec("30000"),
            total_allowances: dec("5000"),
            gross_salary: dec("35000"),
            attendance_deduction: dec("2333.33"),
            loan_deduction: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            total_deductions: dec("2333.33"),
            overtime_amount: dec("150.00"),
            net_salary: dec("32816.67"),
            present_days: 20,
            absent_days: 2,
            late_days: 1,
            half_days: 0,
            overtime_hours: dec("4"),
            status: PayrollStatus::Generated,
            generated_at: Utc::now(),
            generated_by: "admin".to_string(),
            paid_at: None,
        }
    }

    #[test]
    fn test_base_net_salary_ignores_adjustment_fields() {
        let mut r = record();
        r.other_deductions = dec("500");
        // base net is gross - attendance deduction + overtime, regardless
        // of what adjustments have done to other fields
        assert_eq!(r.base_net_salary(), dec("32816.67"));
    }

    #[test]
    fn test_payroll_status_from_str() {
        assert_eq!("draft".parse::<PayrollStatus>().unwrap(), PayrollStatus::Draft);
        assert_eq!(
            "generated".parse::<PayrollStatus>().unwrap(),
            PayrollStatus::Generated
        );
        assert_eq!("paid".parse::<PayrollStatus>().unwrap(), PayrollStatus::Paid);
    }

    #[test]
    fn test_payroll_status_rejects_unknown_value() {
        match "archived".parse::<PayrollStatus>().unwrap_err() {
            EngineError::InvalidStatus { value } => assert_eq!(value, "archived"),
            other => panic!("Expected InvalidStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_adjustment_type_from_str_accepts_all_five() {
        assert_eq!("bonus".parse::<AdjustmentType>().unwrap(), AdjustmentType::Bonus);
        assert_eq!(
            "penalty".parse::<AdjustmentType>().unwrap(),
            AdjustmentType::Penalty
        );
        assert_eq!(
            "loan_deduction".parse::<AdjustmentType>().unwrap(),
            AdjustmentType::LoanDeduction
        );
        assert_eq!(
            "advance".parse::<AdjustmentType>().unwrap(),
            AdjustmentType::Advance
        );
        assert_eq!("other".parse::<AdjustmentType>().unwrap(), AdjustmentType::Other);
    }

    #[test]
    fn test_adjustment_type_rejects_unknown_value() {
        match "gift".parse::<AdjustmentType>().unwrap_err() {
            EngineError::InvalidAdjustmentType { value } => assert_eq!(value, "gift"),
            other => panic!("Expected InvalidAdjustmentType, got {:?}", other),
        }
    }

    #[test]
    fn test_only_bonus_is_credit() {
        assert!(AdjustmentType::Bonus.is_credit());
        assert!(!AdjustmentType::Penalty.is_credit());
        assert!(!AdjustmentType::LoanDeduction.is_credit());
        assert!(!AdjustmentType::Advance.is_credit());
        assert!(!AdjustmentType::Other.is_credit());
    }

    #[test]
    fn test_adjustment_serializes_kind_as_type() {
        let adjustment = SalaryAdjustment {
            id: Uuid::new_v4(),
            payroll_id: Uuid::new_v4(),
            kind: AdjustmentType::LoanDeduction,
            amount: dec("1200.50"),
            reason: "Loan instalment for March".to_string(),
            created_by: "admin".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&adjustment).unwrap();
        assert!(json.contains("\"type\":\"loan_deduction\""));
        assert!(json.contains("\"amount\":\"1200.50\""));
    }

    #[test]
    fn test_payroll_record_serializes_amounts_as_strings() {
        let json = serde_json::to_string(&record()).unwrap();
        assert!(json.contains("\"net_salary\":\"32816.67\""));
        assert!(json.contains("\"status\":\"generated\""));
    }
}
