//! Finance rows and the derived general ledger view.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An income row recorded by the finance module.
///
/// The amount is kept as the raw decimal string it arrived with; it is
/// parsed only when a ledger balance is computed, and a malformed value
/// aborts that computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRecord {
    /// Unique row id.
    pub id: Uuid,
    /// The date the income was received.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Category label (e.g. "client_payment").
    pub category: String,
    /// The amount as a raw decimal string.
    pub amount: String,
}

/// An expense row recorded by the finance module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique row id.
    pub id: Uuid,
    /// The date the expense was incurred.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Category label (e.g. "office_rent").
    pub category: String,
    /// The amount as a raw decimal string.
    pub amount: String,
}

/// The kind of financial event a ledger entry was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerEntryKind {
    /// Derived from an income row; debit-only.
    Income,
    /// Derived from an expense row; credit-only.
    Expense,
    /// Derived from a paid payroll record; credit-only.
    Payroll,
}

/// One derived debit/credit view of a financial event.
///
/// Ledger entries are never persisted; they are synthesized fresh on every
/// balance computation so the view cannot go stale against its source rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The date of the underlying event.
    pub date: NaiveDate,
    /// What kind of event this entry was derived from.
    #[serde(rename = "type")]
    pub kind: LedgerEntryKind,
    /// Description carried over (or synthesized for payroll entries).
    pub description: String,
    /// Category carried over; `"payroll"` for payroll entries.
    pub category: String,
    /// The debit side of the entry; zero for credits.
    #[serde(with = "rust_decimal::serde::str")]
    pub debit: Decimal,
    /// The credit side of the entry; zero for debits.
    #[serde(with = "rust_decimal::serde::str")]
    pub credit: Decimal,
    /// Cumulative debit-minus-credit up to and including this entry, in
    /// date order.
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

/// The materialized result of a general ledger computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReport {
    /// All entries in ascending date order, each with its running balance.
    pub entries: Vec<LedgerEntry>,
    /// Sum of all debits.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_debits: Decimal,
    /// Sum of all credits.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_credits: Decimal,
    /// `total_debits - total_credits`.
    #[serde(with = "rust_decimal::serde::str")]
    pub final_balance: Decimal,
}
