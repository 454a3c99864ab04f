//! Decimal arithmetic over monetary amount strings.
//!
//! Monetary values cross every boundary of this engine as decimal strings
//! (`"1234.50"`), never as binary floats. This module is the single place
//! where those strings are parsed, combined, and formatted, so repeated
//! aggregation cannot accumulate floating-point drift. All other modules
//! route their monetary arithmetic through [`Decimal`] values obtained from
//! [`parse_amount`].

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// Parses a decimal amount string into a [`Decimal`].
///
/// Leading and trailing whitespace is tolerated; anything else that is not
/// a plain decimal number is rejected.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmount`](crate::error::EngineError::InvalidAmount)
/// if the string is empty or not a valid decimal number.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::money::parse_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_amount("1234.50").unwrap(), Decimal::from_str("1234.50").unwrap());
/// assert!(parse_amount("12.3.4").is_err());
/// ```
pub fn parse_amount(value: &str) -> EngineResult<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidAmount {
            value: value.to_string(),
            message: "empty amount".to_string(),
        });
    }
    Decimal::from_str(trimmed).map_err(|e| EngineError::InvalidAmount {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Formats a [`Decimal`] as a canonical amount string.
///
/// Trailing zeros after the decimal point are dropped, so `0.1 + 0.2`
/// renders as `"0.3"`, not `"0.30"`.
pub fn format_amount(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Rounds a monetary value to two decimal places, midpoint away from zero.
///
/// Every monetary field persisted on a payroll record passes through this
/// function, so stored figures are always at currency precision.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::money::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let third = Decimal::from_str("333.333333").unwrap();
/// assert_eq!(round_money(third), Decimal::from_str("333.33").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums a list of amount strings exactly.
///
/// The empty list sums to `"0"`; this is the one documented place where an
/// absent value coerces to zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmount`](crate::error::EngineError::InvalidAmount)
/// on the first malformed element.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::money::sum_amounts;
///
/// assert_eq!(sum_amounts(&["0.1", "0.2"]).unwrap(), "0.3");
/// assert_eq!(sum_amounts::<&str>(&[]).unwrap(), "0");
/// ```
pub fn sum_amounts<S: AsRef<str>>(values: &[S]) -> EngineResult<String> {
    let mut total = Decimal::ZERO;
    for value in values {
        total += parse_amount(value.as_ref())?;
    }
    Ok(format_amount(total))
}

/// Subtracts one amount string from another exactly.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmount`](crate::error::EngineError::InvalidAmount)
/// if either operand is malformed.
pub fn subtract_amounts(minuend: &str, subtrahend: &str) -> EngineResult<String> {
    let result = parse_amount(minuend)? - parse_amount(subtrahend)?;
    Ok(format_amount(result))
}

/// Divides one amount string by another exactly.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmount`](crate::error::EngineError::InvalidAmount)
/// if either operand is malformed or the divisor is zero.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::money::divide_amounts;
///
/// assert_eq!(divide_amounts("30000", "30").unwrap(), "1000");
/// assert!(divide_amounts("1", "0").is_err());
/// ```
pub fn divide_amounts(dividend: &str, divisor: &str) -> EngineResult<String> {
    let dividend = parse_amount(dividend)?;
    let divisor_value = parse_amount(divisor)?;
    if divisor_value.is_zero() {
        return Err(EngineError::InvalidAmount {
            value: divisor.to_string(),
            message: "division by zero".to_string(),
        });
    }
    Ok(format_amount(dividend / divisor_value))
}
