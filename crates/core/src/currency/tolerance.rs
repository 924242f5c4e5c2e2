//! Relative closeness of lumen amounts.

use std::str::FromStr;

use num_rational::BigRational;
use num_traits::{Signed, Zero};
use tracing::debug;

use crate::amount::{parse_minor_units, to_rational};
use crate::decimal::parse_decimal_strict;
use crate::error::FactorError;

/// A non-negative tolerance, e.g. `0.01` for 1%.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativeFactor(BigRational);

impl RelativeFactor {
    /// Parses a factor, rejecting malformed and negative values.
    pub fn parse(factor: &str) -> Result<Self, FactorError> {
        let value = parse_decimal_strict(factor).map_err(|source| FactorError::InvalidFactor {
            factor: factor.to_string(),
            source,
        })?;
        if value.is_negative() {
            return Err(FactorError::NegativeFactor(factor.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the factor as an exact rational.
    #[must_use]
    pub const fn as_rational(&self) -> &BigRational {
        &self.0
    }
}

impl FromStr for RelativeFactor {
    type Err = FactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns whether two amounts are within `max_factor` of each other.
///
/// For example `max_factor = "0.01"` asks whether they are within 1%.
/// See [`within_factor_units`] for the exact rule.
///
/// # Example
///
/// ```
/// use lumenrate_core::currency::within_factor;
///
/// assert!(within_factor("100", "101", "0.01").unwrap());
/// assert!(!within_factor("100", "200", "0.01").unwrap());
/// ```
pub fn within_factor(amount1: &str, amount2: &str, max_factor: &str) -> Result<bool, FactorError> {
    let a = parse_minor_units(amount1)?;
    let b = parse_minor_units(amount2)?;
    let factor = RelativeFactor::parse(max_factor)?;

    let within = within_factor_units(a, b, &factor);
    debug!(amount1, amount2, max_factor, within, "checked relative closeness");
    Ok(within)
}

/// Closeness rule on minor units.
///
/// `|a - b| / |a| <= f` or `|a - b| / |b| <= f`. Passing on either side is
/// enough. Two zeros are close; a zero is never close to a non-zero amount.
#[must_use]
pub fn within_factor_units(a: i64, b: i64, factor: &RelativeFactor) -> bool {
    match (a, b) {
        (0, 0) => return true,
        (0, _) | (_, 0) => return false,
        _ => {}
    }

    let a = to_rational(a);
    let b = to_rational(b);
    let diff = (&a - &b).abs();
    if diff.is_zero() {
        return true;
    }

    let limit = factor.as_rational();
    &(&diff / a.abs()) <= limit || &(&diff / b.abs()) <= limit
}

/// Percentage difference between two amounts relative to their midpoint.
///
/// Display only. This uses `f64` and must never drive a decision; use
/// [`within_factor_units`] for that. Two zeros differ by `0%`. Returns `None`
/// when the midpoint is zero but the amounts are not, e.g. `1` and `-1`.
#[allow(clippy::float_arithmetic, clippy::cast_precision_loss)]
#[must_use]
pub fn percentage_amount_change(a: i64, b: i64) -> Option<f64> {
    if a == 0 && b == 0 {
        return Some(0.0);
    }
    if i128::from(a) + i128::from(b) == 0 {
        return None;
    }
    let (a, b) = (a as f64, b as f64);
    let mid = 0.5 * (a + b);
    Some((100.0 * (a - b) / mid).abs())
}
