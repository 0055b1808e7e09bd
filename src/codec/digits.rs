// ============================================================================
// Digit-Count Estimator
// Bounded shortest-round-trip search over the normalized mantissa
// ============================================================================

use super::config::{pow10, MAX_FRACTION_DIGITS, RANGE_MAX};
use super::normalize::normalize;

/// Minimal digit width needed to render `value` so that it parses back to
/// the same `f64` (within 15 significant digits).
///
/// The width is the digit count of the best rounded mantissa plus the
/// normalization exponent. [`to_text`](super::to_text) uses it as the
/// fixed-point fractional precision and strips the zeros it over-produces.
/// The result is negative for values large enough that no fractional digit
/// is needed.
///
/// # Example
/// ```
/// use decimal_codec::codec::minimal_digits;
///
/// assert_eq!(minimal_digits(123.123), 6);
/// assert_eq!(minimal_digits(-128.82), 5);
/// ```
pub fn minimal_digits(value: f64) -> i32 {
    let (mantissa, shift) = normalize(value.abs());
    let fraction_digits = best_fraction_digits(mantissa);
    let rounded = rounded_mantissa(mantissa, fraction_digits);

    digit_count(rounded) + shift
}

/// Fractional digit count in `0..=MAX_FRACTION_DIGITS` whose rounding lands
/// closest to `mantissa`. Ties keep the smaller count.
fn best_fraction_digits(mantissa: f64) -> i32 {
    let mut best = 0;
    let mut best_error = f64::INFINITY;

    for digits in 0..=MAX_FRACTION_DIGITS {
        let scale = pow10(digits);
        let candidate = rounded_mantissa(mantissa, digits);
        let error = (candidate / scale - mantissa).abs();

        if error < best_error {
            best_error = error;
            best = digits;
        }
    }

    best
}

/// `round(mantissa × 10^digits) mod RANGE_MAX`
#[inline]
fn rounded_mantissa(mantissa: f64, digits: i32) -> f64 {
    (mantissa * pow10(digits)).round() % RANGE_MAX
}

/// Decimal digit count of a non-negative integral value; zero counts as one.
fn digit_count(rounded: f64) -> i32 {
    // Saturating cast: NaN maps to 0, and the modulus keeps finite values
    // below 10^15.
    let integral = rounded as u64;
    integral.checked_ilog10().map_or(1, |log| log as i32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        // 123 needs no fraction; width is its three integer digits
        assert_eq!(minimal_digits(123.0), 3);
        assert_eq!(minimal_digits(-123.0), 3);
    }

    #[test]
    fn test_fractions() {
        assert_eq!(minimal_digits(123.123), 6);
        assert_eq!(minimal_digits(128.82), 5);
        assert_eq!(minimal_digits(7.402001334), 10);
    }

    #[test]
    fn test_small_values_add_normalization_shift() {
        // mantissa 7.402001334 (10 digits) scaled by 10^12
        assert_eq!(minimal_digits(0.000_000_000_007_402_001_334), 22);
        // 0.001 normalizes to 10 × 10^-4
        assert_eq!(minimal_digits(0.001), 6);
    }

    #[test]
    fn test_pi_uses_full_budget() {
        assert_eq!(minimal_digits(std::f64::consts::PI), 15);
    }

    #[test]
    fn test_best_fraction_digits_prefers_shortest() {
        assert_eq!(best_fraction_digits(124.0), 0);
        assert_eq!(best_fraction_digits(123.123), 3);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0.0), 1);
        assert_eq!(digit_count(9.0), 1);
        assert_eq!(digit_count(10.0), 2);
        assert_eq!(digit_count(999_999_999_999_999.0), 15);
        assert_eq!(digit_count(f64::NAN), 1);
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        assert_eq!(minimal_digits(0.0), 1);
        let _ = minimal_digits(f64::NAN);
        let _ = minimal_digits(f64::INFINITY);
        let _ = minimal_digits(f64::MIN_POSITIVE / 4.0);
        let _ = minimal_digits(f64::MAX);
    }
}
