//! Error types for decimal parsing, amount decoding and conversions.
//!
//! Every public operation returns the narrowest error type that covers its
//! failure modes. Wrapping errors keep the offending argument so callers can
//! tell which input was invalid.

use thiserror::Error;

/// A string could not be parsed as a strict decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The input was the empty string.
    #[error("expected decimal number but found empty string")]
    Empty,

    /// The input does not follow the decimal grammar.
    #[error("expected decimal number: {0}")]
    InvalidFormat(String),
}

/// A string could not be decoded into minor units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The amount is not a decimal number.
    #[error("cannot parse amount: {amount}")]
    Invalid {
        /// The rejected input.
        amount: String,
        /// Underlying grammar failure.
        #[source]
        source: DecimalError,
    },

    /// The amount has more fractional digits than a minor unit can hold.
    #[error("more than 7 significant digits: {0}")]
    TooPrecise(String),

    /// The amount does not fit in a signed 64-bit count of minor units.
    #[error("amount out of range: {0}")]
    OutOfRange(String),
}

/// A string is not a usable exchange rate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    /// The rate is not a decimal number.
    #[error("error parsing exchange rate: {rate:?}")]
    Invalid {
        /// The rejected input.
        rate: String,
        /// Underlying grammar failure.
        #[source]
        source: DecimalError,
    },

    /// The rate is zero.
    #[error("zero-value exchange rate")]
    Zero,

    /// The rate is negative.
    #[error("negative exchange rate")]
    Negative,
}

/// Errors from converting between lumens and an outside currency.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The lumen amount to convert could not be decoded into minor units.
    #[error("parsing amount to convert: {amount:?}")]
    InvalidAmount {
        /// The rejected input.
        amount: String,
        /// Underlying decoding failure.
        #[source]
        source: AmountError,
    },

    /// The outside currency amount to convert is not a decimal number.
    #[error("parsing outside amount to convert: {amount:?}")]
    InvalidOutsideAmount {
        /// The rejected input.
        amount: String,
        /// Underlying grammar failure.
        #[source]
        source: DecimalError,
    },

    /// The exchange rate was rejected.
    #[error(transparent)]
    Rate(#[from] RateError),
}

/// Errors from the relative closeness check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorError {
    /// One of the amounts could not be decoded.
    #[error(transparent)]
    Amount(#[from] AmountError),

    /// The factor is not a decimal number.
    #[error("error parsing factor: {factor:?}")]
    InvalidFactor {
        /// The rejected input.
        factor: String,
        /// Underlying grammar failure.
        #[source]
        source: DecimalError,
    },

    /// The factor is negative.
    #[error("negative factor: {0:?}")]
    NegativeFactor(String),
}
