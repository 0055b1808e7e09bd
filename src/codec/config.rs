// ============================================================================
// Codec Configuration
// Named constants that bound normalization and digit search
// ============================================================================

/// Lower bound of the normalization window.
///
/// Magnitudes at or below `1.0` are scaled up past this bound so the digit
/// search always sees at least one integer digit.
pub const RANGE_MIN: f64 = 1.0 + 1e-15;

/// Upper bound of the normalization window, and the modulus applied to
/// rounded candidates during digit search (15 decimal digits).
pub const RANGE_MAX: f64 = 1e15;

/// Highest fractional digit count tried by the digit search.
pub const MAX_FRACTION_DIGITS: i32 = 15;

/// Largest power of ten `shift_text` accepts in either direction.
///
/// Covers every normalization exponent of a finite `f64` (subnormals need
/// about 324); larger shifts would only pad unbounded runs of zeros.
pub const MAX_SHIFT_POWER: u32 = 400;

/// Text produced for `NaN`.
pub const NAN_TEXT: &str = "nan";

/// Text produced for positive infinity (negative infinity gets a `-` prefix).
pub const INF_TEXT: &str = "inf";

/// Largest power of ten representable as a finite `f64`.
pub(crate) const MAX_POW10: i32 = 308;

/// Computes `10^exp` for any `exp` in `[-MAX_POW10, MAX_POW10]`.
///
/// Negative exponents divide instead of multiplying by an inexact reciprocal,
/// so `pow10(-3) == 0.001` exactly as written.
#[inline]
pub(crate) fn pow10(exp: i32) -> f64 {
    if exp >= 0 {
        10f64.powi(exp)
    } else {
        1.0 / 10f64.powi(-exp)
    }
}
