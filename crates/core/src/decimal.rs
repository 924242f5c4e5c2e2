//! Strict decimal parsing into exact rationals.
//!
//! CRITICAL: Never route amounts through `f64`. Every value here is a
//! `BigRational` so that parsing and formatting are exact.
//!
//! The accepted grammar is deliberately narrow: an optional leading `-`,
//! then digits with at most one `.`, and at least one digit overall.
//! `"-1"`, `"1."`, `".1"` and `"1.1"` are accepted; `""`, `"."`, `"1/2"`,
//! `"1e10"` and `"+1"` are not.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Signed;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::error::DecimalError;

static DECIMAL_STRICT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(([0-9]+\.?[0-9]*)|([0-9]*\.?[0-9]+))$")
        .expect("decimal grammar is a valid pattern")
});

/// Parses a decimal number into an exact rational.
///
/// The grammar is checked before any numeric parsing so that alternate
/// notations such as fractions or exponents are never accepted.
///
/// # Example
///
/// ```
/// use lumenrate_core::decimal::parse_decimal_strict;
/// use num_rational::BigRational;
///
/// let tenth = parse_decimal_strict("0.1").unwrap();
/// assert_eq!(tenth, BigRational::new(1.into(), 10.into()));
/// assert!(parse_decimal_strict("1e10").is_err());
/// ```
pub fn parse_decimal_strict(s: &str) -> Result<BigRational, DecimalError> {
    if s.is_empty() {
        return Err(DecimalError::Empty);
    }
    if !DECIMAL_STRICT.is_match(s) {
        trace!(input = s, "rejected by decimal grammar");
        return Err(DecimalError::InvalidFormat(s.to_string()));
    }

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let digits = [whole, fraction].concat();
    let numer = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| DecimalError::InvalidFormat(s.to_string()))?;
    let denom = num_traits::pow(BigInt::from(10u8), fraction.len());

    let value = BigRational::new(numer, denom);
    Ok(if negative { -value } else { value })
}

/// Formats a rational with exactly `digits` digits after the decimal point.
///
/// The last digit is rounded to nearest, with halves rounded away from zero.
/// A negative value keeps its sign even when it rounds to zero, so
/// `-0.00000001` formats as `"-0.0000000"` at seven digits.
#[must_use]
pub fn format_fixed(value: &BigRational, digits: usize) -> String {
    let scale = num_traits::pow(BigInt::from(10u8), digits);
    let numer = value.numer().abs() * scale;
    let denom = value.denom().abs();

    let (mut quotient, remainder) = numer.div_rem(&denom);
    if remainder * 2u8 >= denom {
        quotient += 1u8;
    }

    let mut out = quotient.to_string();
    if digits > 0 {
        if out.len() <= digits {
            out = format!("{}{out}", "0".repeat(digits + 1 - out.len()));
        }
        out.insert(out.len() - digits, '.');
    }
    if value.is_negative() {
        out.insert(0, '-');
    }
    out
}
