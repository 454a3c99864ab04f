//! Payroll Computation & Financial Ledger Engine
//!
//! This crate turns raw attendance records into deterministic salary
//! figures, applies manual adjustments while keeping net salary consistent,
//! and produces running-balance ledger views over income, expense, and
//! payroll events. All monetary arithmetic is exact decimal; amounts cross
//! every boundary as decimal strings.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod money;
pub mod store;
