//! Ordering of lumen amounts.

use std::cmp::Ordering;

use crate::amount::parse_minor_units;
use crate::error::AmountError;

/// Compares two lumen amounts.
///
/// Both sides share the minor-unit scale, so this is a plain integer
/// comparison. `Ordering as i8` yields the usual `-1`, `0`, `+1`.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use lumenrate_core::currency::compare_amounts;
///
/// assert_eq!(compare_amounts("1", "2").unwrap(), Ordering::Less);
/// assert_eq!(compare_amounts("2", "1").unwrap() as i8, 1);
/// ```
pub fn compare_amounts(amount1: &str, amount2: &str) -> Result<Ordering, AmountError> {
    let x = parse_minor_units(amount1)?;
    let y = parse_minor_units(amount2)?;
    Ok(x.cmp(&y))
}
