//! Error types for the Payroll & Ledger Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll generation,
//! adjustment handling, and ledger balance computation.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Payroll & Ledger Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::error::EngineError;
///
/// let error = EngineError::InvalidAmount {
///     value: "12.3.4".to_string(),
///     message: "not a decimal number".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid amount '12.3.4': not a decimal number");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A monetary amount string could not be parsed, or an arithmetic
    /// operation on amounts was undefined (e.g. division by zero).
    #[error("Invalid amount '{value}': {message}")]
    InvalidAmount {
        /// The offending amount string.
        value: String,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// No payroll record exists with the given id.
    #[error("Payroll record not found: {id}")]
    PayrollNotFound {
        /// The payroll record id that was not found.
        id: Uuid,
    },

    /// No adjustment exists with the given id on the given payroll record.
    #[error("Adjustment {adjustment_id} not found on payroll record {payroll_id}")]
    AdjustmentNotFound {
        /// The payroll record the adjustment was looked up on.
        payroll_id: Uuid,
        /// The adjustment id that was not found.
        adjustment_id: Uuid,
    },

    /// An adjustment type string was outside the allowed set
    /// (bonus, penalty, loan_deduction, advance, other).
    #[error("Invalid adjustment type: {value}")]
    InvalidAdjustmentType {
        /// The type string that was rejected.
        value: String,
    },

    /// A payroll status string was outside the allowed set
    /// (draft, generated, paid).
    #[error("Invalid payroll status: {value}")]
    InvalidStatus {
        /// The status string that was rejected.
        value: String,
    },

    /// A pay period had an out-of-range month.
    #[error("Invalid pay period: month {month} of year {year}")]
    InvalidPeriod {
        /// The rejected month (expected 1-12).
        month: u32,
        /// The year the period referred to.
        year: i32,
    },

    /// An employee has no salary structure; during batch generation this is
    /// a counted skip, not a fatal failure.
    #[error("Employee {employee_id} has no salary structure")]
    MissingSalaryStructure {
        /// The employee lacking a structure.
        employee_id: String,
    },

    /// A source row for the general ledger was malformed. This aborts the
    /// whole balance computation: a silently-wrong running balance is worse
    /// than no balance.
    #[error("Inconsistent ledger data in {source}: {message}")]
    InconsistentLedgerData {
        /// The row the problem was found on (e.g. "income 3f2e...").
        // Declared as a raw identifier so thiserror does not infer this
        // String field as the error's `source()`.
        r#source: String,
        /// A description of the problem.
        message: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
