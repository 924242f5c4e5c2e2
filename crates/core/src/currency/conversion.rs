//! Conversion between lumens and an outside currency.
//!
//! CRITICAL: Rounding strategy:
//! - All arithmetic is exact (`BigRational`), nothing passes through `f64`
//! - Only the final result is rounded, to 7 digits past the decimal
//! - Halves are rounded away from zero

use num_rational::BigRational;
use tracing::debug;

use crate::amount::{self, DECIMAL_PLACES};
use crate::decimal::{format_fixed, parse_decimal_strict};
use crate::error::ConversionError;
use crate::rate::ExchangeRate;

/// Converts an amount of lumens into an amount of outside currency.
///
/// `rate` is the amount of outside currency that 1 XLM is worth.
///
/// # Example
///
/// ```
/// use lumenrate_core::currency::convert_xlm_to_outside;
///
/// let outside = convert_xlm_to_outside("100.0000000", "2").unwrap();
/// assert_eq!(outside, "200.0000000");
/// ```
pub fn convert_xlm_to_outside(xlm_amount: &str, rate: &str) -> Result<String, ConversionError> {
    let rate = ExchangeRate::parse(rate)?;
    let units = amount::parse_minor_units(xlm_amount).map_err(|source| {
        ConversionError::InvalidAmount {
            amount: xlm_amount.to_string(),
            source,
        }
    })?;

    let outside = xlm_to_outside(units, &rate);
    let formatted = format_fixed(&outside, DECIMAL_PLACES);
    debug!(xlm_amount, %rate, outside = %formatted, "converted lumens to outside currency");
    Ok(formatted)
}

/// Converts an amount of outside currency into an amount of lumens.
///
/// `rate` is the amount of outside currency that 1 XLM is worth. The outside
/// amount may carry any number of fractional digits. The result is rounded
/// to 7 digits but is not range checked, so it can exceed what a minor-unit
/// amount can hold.
pub fn convert_outside_to_xlm(outside_amount: &str, rate: &str) -> Result<String, ConversionError> {
    let rate = ExchangeRate::parse(rate)?;
    let outside = parse_decimal_strict(outside_amount).map_err(|source| {
        ConversionError::InvalidOutsideAmount {
            amount: outside_amount.to_string(),
            source,
        }
    })?;

    let xlm = outside_to_xlm(&outside, &rate);
    let formatted = format_fixed(&xlm, DECIMAL_PLACES);
    debug!(outside_amount, %rate, xlm = %formatted, "converted outside currency to lumens");
    Ok(formatted)
}

/// Exact value of `units` minor units in outside currency.
#[must_use]
pub fn xlm_to_outside(units: i64, rate: &ExchangeRate) -> BigRational {
    amount::to_rational(units) * rate.as_rational()
}

/// Exact number of whole lumens worth `outside` in outside currency.
#[must_use]
pub fn outside_to_xlm(outside: &BigRational, rate: &ExchangeRate) -> BigRational {
    outside * rate.inverse().as_rational()
}
