//! Domain models for the Payroll & Ledger Engine.
//!
//! This module contains the persistent and derived types the engine
//! operates on: employees and their salary structures, attendance records,
//! payroll records with their adjustments, and the finance rows the general
//! ledger is derived from.

mod attendance;
mod employee;
mod finance;
mod pay_month;
mod payroll;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, SalaryStructure};
pub use finance::{ExpenseRecord, IncomeRecord, LedgerEntry, LedgerEntryKind, LedgerReport};
pub use pay_month::PayMonth;
pub use payroll::{AdjustmentType, PayrollRecord, PayrollStatus, SalaryAdjustment};
