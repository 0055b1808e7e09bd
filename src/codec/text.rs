// ============================================================================
// Value <-> Text Codec
// Shortest decimal rendering, total parsing and interval quantization
// ============================================================================

use super::config::{INF_TEXT, NAN_TEXT};
use super::digits::minimal_digits;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects which part of a decimal string to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parts {
    /// Digits after the decimal point
    #[default]
    Fraction,
    /// Characters before the decimal point (sign included)
    Integer,
    /// The whole string
    Decimal,
}

// ============================================================================
// Rendering
// ============================================================================

/// Render `value` as the shortest fixed-point text that parses back to it.
///
/// Signed zero is preserved (`-0.0` renders as `"-0"`). `NaN` renders as
/// `"nan"` and infinities as `"inf"` / `"-inf"`.
///
/// # Example
/// ```
/// use decimal_codec::codec::to_text;
///
/// assert_eq!(to_text(123.123), "123.123");
/// assert_eq!(to_text(-123.0), "-123");
/// assert_eq!(to_text(-0.0), "-0");
/// ```
pub fn to_text(value: f64) -> String {
    if value.is_nan() {
        return NAN_TEXT.to_owned();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    if value == 0.0 {
        return format!("{sign}0");
    }

    if value.is_infinite() {
        return format!("{sign}{INF_TEXT}");
    }

    let precision = minimal_digits(value).max(0) as usize;
    let rendered = format!("{:.*}", precision, value.abs());

    format!("{sign}{}", trim_fraction(&rendered))
}

/// Quantize `value` to `interval` and render it with exactly as many
/// fractional digits as the interval itself carries.
///
/// # Example
/// ```
/// use decimal_codec::codec::to_text_with_interval;
///
/// assert_eq!(to_text_with_interval(123.123, 3.1), "124.0");
/// assert_eq!(to_text_with_interval(123.0, 10.0), "120");
/// assert_eq!(to_text_with_interval(0.0, 0.001), "0.000");
/// ```
pub fn to_text_with_interval(value: f64, interval: f64) -> String {
    let quantized = quantize(value, interval);
    let mut text = to_text(quantized);

    if !quantized.is_finite() {
        return text;
    }

    let missing = precision(interval).saturating_sub(fractional_part_len(&text));
    if missing > 0 {
        if !text.contains('.') {
            text.push('.');
        }
        text.extend(std::iter::repeat('0').take(missing));
    }

    text
}

/// Drop trailing fractional zeros and a bare trailing point.
fn trim_fraction(rendered: &str) -> &str {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    }
}

// ============================================================================
// Parsing and Quantization
// ============================================================================

/// Parse decimal text into an `f64`.
///
/// Surrounding whitespace is ignored. Malformed text yields `NaN`; this
/// function never fails.
///
/// # Example
/// ```
/// use decimal_codec::codec::from_text;
///
/// assert_eq!(from_text("123.123"), 123.123);
/// assert!(from_text("12x").is_nan());
/// ```
pub fn from_text(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!("Unparseable decimal text {:?}: {}", text, err);
            f64::NAN
        },
    }
}

/// Round `value` to the nearest multiple of `interval` (ties to even).
///
/// When `value / interval` is not a normal number (zero interval, zero value,
/// non-finite or subnormal ratio) the value is returned unchanged.
///
/// # Example
/// ```
/// use decimal_codec::codec::quantize;
///
/// assert_eq!(quantize(123.123, 3.1), 124.0);
/// assert_eq!(quantize(123.123, 0.0), 123.123);
/// ```
pub fn quantize(value: f64, interval: f64) -> f64 {
    let ratio = value / interval;

    if ratio.is_normal() {
        ratio.round_ties_even() * interval
    } else {
        tracing::trace!(value, interval, "Quantization ratio not normal, keeping raw value");
        value
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// Total character count of a decimal string.
#[inline]
pub fn decimal_len(text: &str) -> usize {
    text.len()
}

/// Characters ahead of the decimal point, sign included.
#[inline]
pub fn integer_part_len(text: &str) -> usize {
    text.find('.').unwrap_or(text.len())
}

/// Characters after the decimal point.
#[inline]
pub fn fractional_part_len(text: &str) -> usize {
    decimal_len(text)
        .saturating_sub(integer_part_len(text))
        .saturating_sub(1)
}

/// Length of the selected part of `text`.
pub fn part_len(text: &str, part: Parts) -> usize {
    match part {
        Parts::Fraction => fractional_part_len(text),
        Parts::Integer => integer_part_len(text),
        Parts::Decimal => decimal_len(text),
    }
}

/// Fractional digit count of `value` as rendered by [`to_text`].
///
/// ```
/// use decimal_codec::codec::precision;
///
/// assert_eq!(precision(0.010), 2);
/// assert_eq!(precision(10.0), 0);
/// ```
pub fn precision(value: f64) -> usize {
    fractional_part_len(&to_text(value))
}
