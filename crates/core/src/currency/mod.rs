//! Conversion, ordering and closeness of lumen amounts.

pub mod compare;
pub mod conversion;
pub mod tolerance;

#[cfg(test)]
mod props;

pub use compare::compare_amounts;
pub use conversion::{convert_outside_to_xlm, convert_xlm_to_outside};
pub use tolerance::{RelativeFactor, percentage_amount_change, within_factor, within_factor_units};
