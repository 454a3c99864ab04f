//! HR settings for the Payroll & Ledger Engine.
//!
//! The one setting the calculator depends on, the overtime flag, is always
//! passed in explicitly as [`PayrollSettings`] rather than read from
//! ambient global state, so the calculation stays a pure function of its
//! inputs.

mod loader;
mod types;

pub use types::PayrollSettings;
