//! Property-based tests using `proptest` for the codec layers.
//!
//! 1. **Shift reversibility**: shifting canonical text by `k` then `-k`
//!    restores it.
//! 2. **Text round trip**: `from_text(to_text(v))` reproduces `v` to 15
//!    significant digits.
//! 3. **Quantize bound**: the quantized value is within half an interval.
//! 4. **Shift agrees with arithmetic**: parsing shifted text matches
//!    scaling the parsed value.
//! 5. **Quantized comparison**: raw values within the same interval bucket
//!    compare equal; values in distinct buckets order by bucket.

use proptest::prelude::*;

use super::{from_text, quantize, shift_text, to_text, to_text_with_interval};
use crate::numeric::QuantizedDecimal;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Canonical decimal text: no redundant leading zeros, fraction (if any)
/// ends in a non-zero digit.
fn canonical_decimal() -> impl Strategy<Value = String> {
    let integer = prop_oneof![Just("0".to_owned()), "[1-9][0-9]{0,5}"];
    let fraction = prop_oneof![Just(String::new()), "[0-9]{0,4}[1-9]"];
    (any::<bool>(), integer, fraction).prop_map(|(negative, int, frac)| {
        let sign = if negative && (int != "0" || !frac.is_empty()) {
            "-"
        } else {
            ""
        };
        if frac.is_empty() {
            format!("{sign}{int}")
        } else {
            format!("{sign}{int}.{frac}")
        }
    })
}

fn interval() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.001), Just(0.01), Just(0.5), Just(3.1), Just(10.0), Just(0.25)]
}

fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_shift_reversible(text in canonical_decimal(), power in -8i32..=8) {
        let shifted = shift_text(&text, power);
        prop_assert_eq!(shift_text(&shifted, -power), text);
    }

    #[test]
    fn prop_shift_matches_scaling(text in canonical_decimal(), power in -6i32..=6) {
        let shifted = from_text(&shift_text(&text, power));
        let scaled = from_text(&text) * 10f64.powi(power);
        prop_assert!(relative_error(shifted, scaled) < 1e-12);
    }

    #[test]
    fn prop_text_round_trip(value in -1e12f64..1e12) {
        let parsed = from_text(&to_text(value));
        prop_assert!(relative_error(parsed, value) < 1e-13);
    }

    #[test]
    fn prop_small_text_round_trip(value in 1e-9f64..1e-3) {
        let parsed = from_text(&to_text(value));
        prop_assert!(relative_error(parsed, value) < 1e-13);
    }

    #[test]
    fn prop_quantize_within_half_interval(value in -1e6f64..1e6, step in interval()) {
        let quantized = quantize(value, step);
        prop_assert!((quantized - value).abs() <= step / 2.0 + 1e-9);
    }

    #[test]
    fn prop_interval_text_has_interval_precision(value in -1e6f64..1e6, step in interval()) {
        let text = to_text_with_interval(value, step);
        let expected = super::precision(step);
        prop_assert!(super::fractional_part_len(&text) >= expected);
    }

    #[test]
    fn prop_compare_within_half_interval(
        step in interval(),
        k1 in -10_000i64..10_000,
        k2 in -10_000i64..10_000,
        e1 in -0.4f64..0.4,
        e2 in -0.4f64..0.4,
    ) {
        // Bucket zero would leave the raw value unrounded
        prop_assume!(k1 != 0 && k2 != 0);

        let a = QuantizedDecimal::new((k1 as f64 + e1) * step, step);
        let same = QuantizedDecimal::new((k1 as f64 + e2) * step, step);
        let b = QuantizedDecimal::new((k2 as f64 + e2) * step, step);

        prop_assert!(a == same);
        prop_assert_eq!(k1 < k2, a < b);
        prop_assert_eq!(k1 == k2, a == b);
    }
}
