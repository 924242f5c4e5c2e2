//! Minor-unit amount codec.
//!
//! A lumen amount is a signed 64-bit count of minor units with seven implied
//! decimal places, so `"1"` decodes to `10_000_000` and `"0.0000001"` to `1`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::decimal::parse_decimal_strict;
use crate::error::AmountError;

/// Minor units in one whole lumen.
pub const ONE: i64 = 10_000_000;

/// Fractional digits carried by a minor-unit amount.
pub const DECIMAL_PLACES: usize = 7;

// `rust_decimal` takes its scale as `u32`.
const DECIMAL_SCALE: u32 = 7;

/// Parses a decimal amount into minor units.
///
/// # Example
///
/// ```
/// use lumenrate_core::amount::parse_minor_units;
///
/// assert_eq!(parse_minor_units("1.5").unwrap(), 15_000_000);
/// assert!(parse_minor_units("0.00000001").is_err());
/// ```
pub fn parse_minor_units(s: &str) -> Result<i64, AmountError> {
    let value = parse_decimal_strict(s).map_err(|source| AmountError::Invalid {
        amount: s.to_string(),
        source,
    })?;

    let scaled = value * BigInt::from(ONE);
    if !scaled.is_integer() {
        return Err(AmountError::TooPrecise(s.to_string()));
    }

    scaled
        .to_integer()
        .to_i64()
        .ok_or_else(|| AmountError::OutOfRange(s.to_string()))
}

/// Formats minor units with all seven fractional digits.
#[must_use]
pub fn format_minor_units(units: i64) -> String {
    to_decimal(units).to_string()
}

/// Converts minor units to a `Decimal` with seven decimal places.
///
/// Every `i64` fits in the 96-bit mantissa, so this never loses precision.
#[must_use]
pub fn to_decimal(units: i64) -> Decimal {
    Decimal::new(units, DECIMAL_SCALE)
}

/// Converts minor units to an exact rational number of whole lumens.
#[must_use]
pub fn to_rational(units: i64) -> BigRational {
    BigRational::new(BigInt::from(units), BigInt::from(ONE))
}
