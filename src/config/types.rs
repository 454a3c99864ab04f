//! Settings types.

use serde::{Deserialize, Serialize};

/// HR settings consumed by payroll generation.
///
/// Read once per generation batch and passed into every calculation, never
/// consulted as global state.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::config::PayrollSettings;
///
/// let settings = PayrollSettings::default();
/// assert!(!settings.overtime_enabled);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Whether overtime hours are computed and monetized. When disabled,
    /// qualifying hours are logged but never paid.
    #[serde(default)]
    pub overtime_enabled: bool,
}
