// ============================================================================
// Normalizer
// Rescales a magnitude into the [RANGE_MIN, RANGE_MAX] decimal window
// ============================================================================

use super::config::{pow10, MAX_POW10, RANGE_MAX, RANGE_MIN};

/// Rescale `value` into the normalization window.
///
/// Returns `(mantissa, exponent)` with `mantissa = value × 10^exponent` and
/// `|mantissa|` inside `[RANGE_MIN, RANGE_MAX]`. The exponent is positive when
/// the value had to be scaled up and negative when it was scaled down. The
/// sign of `value` is carried on the mantissa.
///
/// Zero and non-finite inputs are returned as `(value, 0)`.
///
/// # Example
/// ```
/// use decimal_codec::codec::normalize;
///
/// assert_eq!(normalize(128.82), (128.82, 0));
/// assert_eq!(normalize(0.5), (5.0, 1));
/// assert_eq!(normalize(-0.05), (-5.0, 2));
/// ```
pub fn normalize(value: f64) -> (f64, i32) {
    let negative = value.is_sign_negative();
    let magnitude = value.abs();

    if magnitude == 0.0 || !magnitude.is_finite() {
        return (value, 0);
    }

    let mut scaled = magnitude;
    let mut exponent = 0i32;

    while scaled < RANGE_MIN {
        scaled *= 1e1;
        exponent += 1;
    }

    while scaled > RANGE_MAX {
        scaled *= 1e-1;
        exponent -= 1;
    }

    let mantissa = scale_by_pow10(magnitude, exponent);

    if negative {
        (-mantissa, exponent)
    } else {
        (mantissa, exponent)
    }
}

/// `value × 10^exp`, split in two steps when `10^exp` alone is not finite.
fn scale_by_pow10(value: f64, exp: i32) -> f64 {
    if exp.abs() <= MAX_POW10 {
        if exp >= 0 {
            value * pow10(exp)
        } else {
            value / pow10(-exp)
        }
    } else {
        let half = exp / 2;
        scale_by_pow10(scale_by_pow10(value, half), exp - half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_window_is_untouched() {
        assert_eq!(normalize(7.402001334), (7.402001334, 0));
        assert_eq!(normalize(128.82), (128.82, 0));
        assert_eq!(normalize(-128.82), (-128.82, 0));
    }

    #[test]
    fn test_small_values_scale_up() {
        let tiny = 0.000_000_000_007_402_001_334;
        assert_eq!(normalize(tiny), (tiny * 1e12, 12));
        assert_eq!(normalize(-tiny), (-(tiny * 1e12), 12));
    }

    #[test]
    fn test_one_is_pushed_past_lower_bound() {
        // 1.0 sits below RANGE_MIN, so it is scaled to 10
        assert_eq!(normalize(1.0), (10.0, 1));
    }

    #[test]
    fn test_large_values_scale_down() {
        let (mantissa, exponent) = normalize(1e20);
        assert!(exponent < 0);
        assert!(mantissa <= RANGE_MAX);
        assert!((mantissa * pow10(-exponent) - 1e20).abs() / 1e20 < 1e-15);
    }

    #[test]
    fn test_zero() {
        assert_eq!(normalize(0.0), (0.0, 0));

        let (mantissa, exponent) = normalize(-0.0);
        assert_eq!(exponent, 0);
        assert!(mantissa.is_sign_negative());
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(normalize(f64::INFINITY), (f64::INFINITY, 0));
        assert_eq!(normalize(f64::NEG_INFINITY), (f64::NEG_INFINITY, 0));
        assert!(normalize(f64::NAN).0.is_nan());
    }

    #[test]
    fn test_subnormal_stays_finite() {
        let (mantissa, exponent) = normalize(f64::MIN_POSITIVE / 4.0);
        assert!(mantissa.is_finite());
        assert!(exponent > MAX_POW10);
        assert!(mantissa >= 1.0 && mantissa <= RANGE_MAX);
    }
}
