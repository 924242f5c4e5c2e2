//! Exact lumen amount arithmetic.
//!
//! This crate contains pure numeric logic with ZERO I/O. Amounts and rates
//! are parsed from strings into exact rationals, so conversion and
//! comparison never suffer floating-point error.
//!
//! # Modules
//!
//! - `decimal` - Strict decimal grammar, exact parsing and fixed-point formatting
//! - `amount` - Minor-unit codec (1 XLM = 10,000,000 minor units)
//! - `rate` - Strictly positive exchange rates
//! - `currency` - Conversion, ordering and relative closeness of amounts
//! - `error` - Typed failures for every operation

pub mod amount;
pub mod currency;
pub mod decimal;
pub mod error;
pub mod rate;

pub use currency::{
    compare_amounts, convert_outside_to_xlm, convert_xlm_to_outside, within_factor,
};
pub use decimal::parse_decimal_strict;
pub use error::{AmountError, ConversionError, DecimalError, FactorError, RateError};
pub use rate::ExchangeRate;
