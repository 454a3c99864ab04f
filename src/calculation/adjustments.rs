//! Adjustment recomputation functionality.
//!
//! After every adjustment insert or delete, the owning payroll record's
//! net salary is recomputed from the full current adjustment list, never
//! from accumulated deltas. That keeps net salary a pure function of
//! adjustment state, so any sequence of adds and deletes that ends with
//! the same adjustments yields the same net salary, with no decimal drift.

use rust_decimal::Decimal;

use crate::models::{PayrollRecord, SalaryAdjustment};
use crate::money::round_money;

/// The recomputed figures derived from a payroll record and its current
/// adjustment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentRecomputation {
    /// Signed net effect of all adjustments: bonuses add, every other
    /// type subtracts.
    pub total_adjustments: Decimal,
    /// The deduction-side view of the adjustments, clamped at zero when
    /// bonuses outweigh the subtracting types.
    pub other_deductions: Decimal,
    /// The resulting net salary: base net plus the signed adjustment total.
    pub net_salary: Decimal,
}

impl AdjustmentRecomputation {
    /// Writes the recomputed figures back onto a payroll record, keeping
    /// its deduction total consistent.
    pub fn apply_to(&self, record: &mut PayrollRecord) {
        record.other_deductions = self.other_deductions;
        record.total_deductions =
            record.attendance_deduction + record.loan_deduction + record.other_deductions;
        record.net_salary = self.net_salary;
    }
}

/// Recomputes a payroll record's net salary from its current adjustments.
///
/// The base net salary is `gross - attendance deduction + overtime`
/// ([`PayrollRecord::base_net_salary`]); the signed sum of adjustments is
/// added on top. `other_deductions` persists `max(0, -total)` — when the
/// bonus total exceeds the subtracting types, the excess appears only in
/// the net salary, a behavior preserved as observed.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::calculation::recompute_adjustments;
/// # use payroll_ledger_engine::models::{PayrollRecord, PayrollStatus};
/// # use chrono::Utc;
/// # use rust_decimal::Decimal;
/// # use std::str::FromStr;
/// # use uuid::Uuid;
/// # let record = PayrollRecord {
/// #     id: Uuid::new_v4(),
/// #     employee_id: "emp_001".to_string(),
/// #     month: 1,
/// #     year: 2026,
/// #     basic_salary: Decimal::from_str("30000").unwrap(),
/// #     total_allowances: Decimal::ZERO,
/// #     gross_salary: Decimal::from_str("30000").unwrap(),
/// #     attendance_deduction: Decimal::ZERO,
/// #     loan_deduction: Decimal::ZERO,
/// #     other_deductions: Decimal::ZERO,
/// #     total_deductions: Decimal::ZERO,
/// #     overtime_amount: Decimal::ZERO,
/// #     net_salary: Decimal::from_str("30000").unwrap(),
/// #     present_days: 22,
/// #     absent_days: 0,
/// #     late_days: 0,
/// #     half_days: 0,
/// #     overtime_hours: Decimal::ZERO,
/// #     status: PayrollStatus::Generated,
/// #     generated_at: Utc::now(),
/// #     generated_by: "admin".to_string(),
/// #     paid_at: None,
/// # };
/// let recomputation = recompute_adjustments(&record, &[]);
/// assert_eq!(recomputation.net_salary, record.base_net_salary());
/// ```
pub fn recompute_adjustments(
    record: &PayrollRecord,
    adjustments: &[SalaryAdjustment],
) -> AdjustmentRecomputation {
    let mut total_adjustments = Decimal::ZERO;
    for adjustment in adjustments {
        if adjustment.kind.is_credit() {
            total_adjustments += adjustment.amount;
        } else {
            total_adjustments -= adjustment.amount;
        }
    }

    let other_deductions = round_money(Decimal::ZERO.max(-total_adjustments));
    let net_salary = round_money(record.base_net_salary() + total_adjustments);

    AdjustmentRecomputation {
        total_adjustments,
        other_deductions,
        net_salary,
    }
}
