//! Exchange rates between lumens and an outside currency.

use std::fmt;
use std::str::FromStr;

use num_bigint::Sign;
use num_rational::BigRational;

use crate::amount::DECIMAL_PLACES;
use crate::decimal::{format_fixed, parse_decimal_strict};
use crate::error::RateError;

/// Amount of outside currency that one whole lumen is worth.
///
/// Always strictly positive. Example: `"0.9389014463"` PLN per XLM.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExchangeRate(BigRational);

impl ExchangeRate {
    /// Parses a rate, rejecting malformed, zero and negative values.
    ///
    /// # Example
    ///
    /// ```
    /// use lumenrate_core::rate::ExchangeRate;
    /// use lumenrate_core::error::RateError;
    ///
    /// assert!(ExchangeRate::parse("0.9389014463").is_ok());
    /// assert_eq!(ExchangeRate::parse("0"), Err(RateError::Zero));
    /// ```
    pub fn parse(rate: &str) -> Result<Self, RateError> {
        let value = parse_decimal_strict(rate).map_err(|source| RateError::Invalid {
            rate: rate.to_string(),
            source,
        })?;

        match value.numer().sign() {
            Sign::Plus => Ok(Self(value)),
            Sign::NoSign => Err(RateError::Zero),
            Sign::Minus => Err(RateError::Negative),
        }
    }

    /// Returns the rate as an exact rational.
    #[must_use]
    pub const fn as_rational(&self) -> &BigRational {
        &self.0
    }

    /// Returns the rate for the opposite direction (lumens per outside unit).
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(self.0.recip())
    }
}

impl FromStr for ExchangeRate {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_fixed(&self.0, DECIMAL_PLACES))
    }
}
