//! Property-based tests for conversion, ordering and closeness.
//!
//! - Property 1: Decimal formatting round-trips through the strict parser
//! - Property 2: Conversion round-trips within one minor unit
//! - Property 3: Ordering agrees with integer ordering
//! - Property 4: Closeness is symmetric and monotonic in the factor

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

use super::compare::compare_amounts;
use super::conversion::{convert_outside_to_xlm, convert_xlm_to_outside};
use super::tolerance::{RelativeFactor, within_factor, within_factor_units};
use crate::amount::{format_minor_units, parse_minor_units};
use crate::decimal::{format_fixed, parse_decimal_strict};

/// Strategy to generate lumen amounts in minor units (up to 10 million XLM).
fn minor_units() -> impl Strategy<Value = i64> {
    -100_000_000_000_000i64..100_000_000_000_000i64
}

/// Strategy to generate rates of at least 1 (1.0000000 to 10000.0000000).
fn rate_at_least_one() -> impl Strategy<Value = String> {
    (10_000_000i64..100_000_000_000i64).prop_map(format_minor_units)
}

/// Strategy to generate non-negative factors (0.0000 to 9.9999).
fn factor() -> impl Strategy<Value = String> {
    (0i64..100_000i64).prop_map(|v| format!("{}.{:04}", v / 10_000, v % 10_000))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Decimal formatting round-trips
    // =========================================================================

    /// *For any* integer numerator and scale, formatting `n / 10^scale` at
    /// `scale` digits and parsing it back SHALL yield the same rational.
    #[test]
    fn prop_format_then_parse_is_exact(
        numer in any::<i64>(),
        scale in 0usize..20,
    ) {
        let value = BigRational::new(
            BigInt::from(numer),
            num_traits::pow(BigInt::from(10u8), scale),
        );
        let formatted = format_fixed(&value, scale);
        prop_assert_eq!(parse_decimal_strict(&formatted).unwrap(), value);
    }

    /// *For any* amount, the codec SHALL decode its own formatting.
    #[test]
    fn prop_codec_round_trip(units in any::<i64>()) {
        prop_assert_eq!(parse_minor_units(&format_minor_units(units)).unwrap(), units);
    }

    // =========================================================================
    // Property 2: Conversion round-trips
    // =========================================================================

    /// *For any* amount and rate >= 1, converting out and back SHALL land
    /// within one minor unit of the original.
    #[test]
    fn prop_conversion_round_trip(
        units in minor_units(),
        rate in rate_at_least_one(),
    ) {
        let xlm = format_minor_units(units);
        let outside = convert_xlm_to_outside(&xlm, &rate).unwrap();
        let back = convert_outside_to_xlm(&outside, &rate).unwrap();
        let recovered = parse_minor_units(&back).unwrap();
        prop_assert!(
            (units - recovered).abs() <= 1,
            "{} -> {} -> {} at rate {}",
            xlm, outside, back, rate
        );
    }

    /// *For any* amount, a rate of exactly 1 SHALL return the amount unchanged.
    #[test]
    fn prop_unit_rate_is_identity(units in minor_units()) {
        let xlm = format_minor_units(units);
        prop_assert_eq!(convert_xlm_to_outside(&xlm, "1").unwrap(), xlm.clone());
        prop_assert_eq!(convert_outside_to_xlm(&xlm, "1").unwrap(), xlm);
    }

    // =========================================================================
    // Property 3: Ordering
    // =========================================================================

    /// *For any* two amounts, compare_amounts() SHALL agree with `i64::cmp`.
    #[test]
    fn prop_compare_matches_integers(a in any::<i64>(), b in any::<i64>()) {
        let ordering = compare_amounts(&format_minor_units(a), &format_minor_units(b)).unwrap();
        prop_assert_eq!(ordering, a.cmp(&b));
        let reversed = compare_amounts(&format_minor_units(b), &format_minor_units(a)).unwrap();
        prop_assert_eq!(reversed, ordering.reverse());
    }

    // =========================================================================
    // Property 4: Closeness
    // =========================================================================

    /// *For any* amounts and factor, swapping the amounts SHALL not change
    /// the answer.
    #[test]
    fn prop_within_factor_symmetric(
        a in minor_units(),
        b in minor_units(),
        f in factor(),
    ) {
        let (x, y) = (format_minor_units(a), format_minor_units(b));
        prop_assert_eq!(
            within_factor(&x, &y, &f).unwrap(),
            within_factor(&y, &x, &f).unwrap()
        );
    }

    /// *For any* amounts, a factor of zero SHALL accept exactly equal amounts.
    #[test]
    fn prop_zero_factor_means_equal(a in minor_units(), b in minor_units()) {
        let zero = RelativeFactor::parse("0").unwrap();
        prop_assert_eq!(within_factor_units(a, b, &zero), a.cmp(&b) == Ordering::Equal);
    }

    /// *For any* amounts, widening the factor SHALL never turn a pass into
    /// a failure.
    #[test]
    fn prop_within_factor_monotonic(
        a in minor_units(),
        b in minor_units(),
        f in factor(),
    ) {
        let narrow = RelativeFactor::parse(&f).unwrap();
        let wide = RelativeFactor::parse(&format!("{f}1")).unwrap();
        if within_factor_units(a, b, &narrow) {
            prop_assert!(within_factor_units(a, b, &wide));
        }
    }
}
