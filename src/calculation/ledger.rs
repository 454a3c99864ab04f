//! General ledger balance computation.
//!
//! Merges income, expense, and paid-payroll rows into one chronological
//! stream and computes a running debit-minus-credit balance. The view is
//! synthesized fresh on every call and never persisted, so it cannot go
//! stale against its source tables. Unlike batch payroll generation, a
//! single malformed row aborts the whole computation: a silently-wrong
//! running balance is worse than no balance.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ExpenseRecord, IncomeRecord, LedgerEntry, LedgerEntryKind, LedgerReport, PayrollRecord,
    PayrollStatus,
};
use crate::money::parse_amount;

/// Computes the general ledger over the given finance and payroll rows.
///
/// Income rows become debit-only entries, expense rows credit-only
/// entries, and payroll rows with status `paid` become credit-only entries
/// dated by their payment stamp and described `"Payroll {month}/{year}"`.
/// The merged entries are sorted by date ascending (ties keep their input
/// order), then walked once to assign each entry its running balance.
///
/// # Errors
///
/// Returns [`EngineError::InconsistentLedgerData`] if any income or
/// expense amount fails to parse, or if a paid payroll record is missing
/// its payment timestamp. No partial report is produced.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::calculation::compute_general_ledger;
/// use payroll_ledger_engine::models::IncomeRecord;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let incomes = vec![IncomeRecord {
///     id: Uuid::new_v4(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
///     description: "Invoice #42".to_string(),
///     category: "client_payment".to_string(),
///     amount: "15000".to_string(),
/// }];
///
/// let report = compute_general_ledger(&incomes, &[], &[]).unwrap();
/// assert_eq!(report.entries.len(), 1);
/// assert_eq!(report.final_balance.to_string(), "15000");
/// ```
pub fn compute_general_ledger(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    payrolls: &[PayrollRecord],
) -> EngineResult<LedgerReport> {
    let mut entries: Vec<LedgerEntry> = Vec::new();

    for income in incomes {
        let amount = parse_row_amount(&income.amount, format!("income {}", income.id))?;
        entries.push(LedgerEntry {
            date: income.date,
            kind: LedgerEntryKind::Income,
            description: income.description.clone(),
            category: income.category.clone(),
            debit: amount,
            credit: Decimal::ZERO,
            balance: Decimal::ZERO,
        });
    }

    for expense in expenses {
        let amount = parse_row_amount(&expense.amount, format!("expense {}", expense.id))?;
        entries.push(LedgerEntry {
            date: expense.date,
            kind: LedgerEntryKind::Expense,
            description: expense.description.clone(),
            category: expense.category.clone(),
            debit: Decimal::ZERO,
            credit: amount,
            balance: Decimal::ZERO,
        });
    }

    for payroll in payrolls {
        if payroll.status != PayrollStatus::Paid {
            continue;
        }
        let paid_at = payroll
            .paid_at
            .ok_or_else(|| EngineError::InconsistentLedgerData {
                source: format!("payroll {}", payroll.id),
                message: "paid record has no payment timestamp".to_string(),
            })?;
        entries.push(LedgerEntry {
            date: paid_at.date_naive(),
            kind: LedgerEntryKind::Payroll,
            description: format!("Payroll {}/{}", payroll.month, payroll.year),
            category: "payroll".to_string(),
            debit: Decimal::ZERO,
            credit: payroll.net_salary,
            balance: Decimal::ZERO,
        });
    }

    // Chronological order is required for a meaningful running balance.
    // The sort is stable, so same-date entries keep their input order.
    entries.sort_by_key(|entry| entry.date);

    let mut running_balance = Decimal::ZERO;
    let mut total_debits = Decimal::ZERO;
    let mut total_credits = Decimal::ZERO;
    for entry in &mut entries {
        running_balance += entry.debit - entry.credit;
        entry.balance = running_balance;
        total_debits += entry.debit;
        total_credits += entry.credit;
    }

    debug!(
        entries = entries.len(),
        total_debits = %total_debits,
        total_credits = %total_credits,
        "General ledger computed"
    );

    Ok(LedgerReport {
        entries,
        total_debits,
        total_credits,
        final_balance: total_debits - total_credits,
    })
}

fn parse_row_amount(amount: &str, source: String) -> EngineResult<Decimal> {
    parse_amount(amount).map_err(|e| EngineError::InconsistentLedgerData {
        source,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    fn income(day: u32, amount: &str) -> IncomeRecord {
        IncomeRecord {
            id: Uuid::new_v4(),
            date: date(day),
            description: "income".to_string(),
            category: "client_payment".to_string(),
            amount: amount.to_string(),
        }
    }

    fn expense(day: u32, amount: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: Uuid::new_v4(),
            date: date(day),
            description: "expense".to_string(),
            category: "office_rent".to_string(),
            amount: amount.to_string(),
        }
    }

    fn paid_payroll(day: u32, net: &str) -> PayrollRecord {
        PayrollRecord {
            id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            month: 1,
            year: 2026,
            basic_salary: dec(net),
            total_allowances: Decimal::ZERO,
            gross_salary: dec(net),
            attendance_deduction: Decimal::ZERO,
            loan_deduction: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            overtime_amount: Decimal::ZERO,
            net_salary: dec(net),
            present_days: 22,
            absent_days: 0,
            late_days: 0,
            half_days: 0,
            overtime_hours: Decimal::ZERO,
            status: PayrollStatus::Paid,
            generated_at: Utc::now(),
            generated_by: "admin".to_string(),
            paid_at: Some(
                date(day)
                    .and_hms_opt(12, 0, 0)
                    .unwrap()
                    .and_utc(),
            ),
        }
    }

    #[test]
    fn test_entries_are_sorted_by_date() {
        let incomes = vec![income(20, "100"), income(5, "200")];
        let expenses = vec![expense(10, "50")];

        let report = compute_general_ledger(&incomes, &expenses, &[]).unwrap();

        let dates: Vec<NaiveDate> = report.entries.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(5), date(10), date(20)]);
    }

    #[test]
    fn test_running_balance_sequence() {
        let incomes = vec![income(1, "1000")];
        let expenses = vec![expense(2, "300")];
        let payrolls = vec![paid_payroll(3, "500")];

        let report = compute_general_ledger(&incomes, &expenses, &payrolls).unwrap();

        let balances: Vec<Decimal> = report.entries.iter().map(|e| e.balance).collect();
        assert_eq!(balances, vec![dec("1000"), dec("700"), dec("200")]);
    }

    #[test]
    fn test_totals_and_final_balance() {
        let incomes = vec![income(1, "1000.50"), income(15, "2000.25")];
        let expenses = vec![expense(10, "750.75")];

        let report = compute_general_ledger(&incomes, &expenses, &[]).unwrap();

        assert_eq!(report.total_debits, dec("3000.75"));
        assert_eq!(report.total_credits, dec("750.75"));
        assert_eq!(report.final_balance, dec("2250.00"));
    }

    #[test]
    fn test_unpaid_payroll_is_excluded() {
        let mut draft = paid_payroll(3, "500");
        draft.status = PayrollStatus::Generated;
        draft.paid_at = None;

        let report = compute_general_ledger(&[], &[], &[draft]).unwrap();

        assert!(report.entries.is_empty());
        assert_eq!(report.final_balance, Decimal::ZERO);
    }

    #[test]
    fn test_payroll_entry_description_and_category() {
        let payrolls = vec![paid_payroll(3, "500")];
        let report = compute_general_ledger(&[], &[], &payrolls).unwrap();

        let entry = &report.entries[0];
        assert_eq!(entry.description, "Payroll 1/2026");
        assert_eq!(entry.category, "payroll");
        assert_eq!(entry.kind, LedgerEntryKind::Payroll);
        assert_eq!(entry.credit, dec("500"));
        assert_eq!(entry.debit, Decimal::ZERO);
    }

    #[test]
    fn test_malformed_income_amount_aborts_whole_computation() {
        let incomes = vec![income(1, "1000"), income(2, "not-a-number")];

        let result = compute_general_ledger(&incomes, &[], &[]);

        match result.unwrap_err() {
            EngineError::InconsistentLedgerData { source, .. } => {
                assert!(source.starts_with("income "));
            }
            other => panic!("Expected InconsistentLedgerData, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_expense_amount_aborts_whole_computation() {
        let expenses = vec![expense(1, "")];
        let result = compute_general_ledger(&[], &expenses, &[]);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::InconsistentLedgerData { .. }
        ));
    }

    #[test]
    fn test_paid_payroll_without_stamp_is_inconsistent() {
        let mut payroll = paid_payroll(3, "500");
        payroll.paid_at = None;

        let result = compute_general_ledger(&[], &[], &[payroll]);

        match result.unwrap_err() {
            EngineError::InconsistentLedgerData { source, message } => {
                assert!(source.starts_with("payroll "));
                assert_eq!(message, "paid record has no payment timestamp");
            }
            other => panic!("Expected InconsistentLedgerData, got {:?}", other),
        }
    }

    #[test]
    fn test_final_balance_is_insertion_order_independent() {
        let a = vec![income(1, "100"), income(15, "250.25")];
        let b = vec![income(15, "250.25"), income(1, "100")];
        let expenses = vec![expense(10, "99.99")];

        let first = compute_general_ledger(&a, &expenses, &[]).unwrap();
        let second = compute_general_ledger(&b, &expenses, &[]).unwrap();

        assert_eq!(first.final_balance, second.final_balance);
        assert_eq!(first.total_debits, second.total_debits);
    }

    #[test]
    fn test_exact_decimal_accumulation_over_many_entries() {
        // dozens of sequential 0.1 additions would drift under binary
        // floats; they must stay exact here
        let incomes: Vec<IncomeRecord> = (0..100).map(|_| income(1, "0.1")).collect();
        let report = compute_general_ledger(&incomes, &[], &[]).unwrap();
        assert_eq!(report.final_balance, dec("10"));
    }

    #[test]
    fn test_empty_ledger_is_all_zeros() {
        let report = compute_general_ledger(&[], &[], &[]).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.total_debits, Decimal::ZERO);
        assert_eq!(report.total_credits, Decimal::ZERO);
        assert_eq!(report.final_balance, Decimal::ZERO);
    }
}
