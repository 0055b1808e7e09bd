// ============================================================================
// Quantized Decimal
// Raw f64 value paired with a quantization interval (tick size)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::codec::config::pow10;
use crate::codec::{self, Parts};
use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A floating-point value that is observed through its nearest multiple of
/// an interval.
///
/// `raw` keeps whatever was last assigned or computed; every read
/// ([`quantized_value`](Self::quantized_value), [`text`](Self::text),
/// comparisons, length queries) goes through [`codec::quantize`]. An interval
/// of `0` means no quantization.
///
/// The mutating operations ([`add`](Self::add), [`subtract`](Self::subtract),
/// [`multiply`](Self::multiply), [`divide`](Self::divide)) combine `raw` with
/// the right operand's *quantized* value and leave the interval alone. The
/// `+ - * /` operators copy the left operand first, so the result carries
/// the left operand's interval.
///
/// # Example
/// ```
/// use decimal_codec::numeric::QuantizedDecimal;
///
/// let mut price = QuantizedDecimal::from_text("100.25", 0.0);
/// assert_eq!(price.interval(), 0.01);
///
/// let tick = QuantizedDecimal::new(0.013, 0.01);
/// price.add(&tick).add(&tick);
/// assert_eq!(price.text(), "100.27");
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuantizedDecimal {
    raw: f64,
    interval: f64,
}

impl QuantizedDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw value and an interval (`0` for unconstrained).
    #[inline]
    pub const fn new(value: f64, interval: f64) -> Self {
        Self {
            raw: value,
            interval,
        }
    }

    /// Create with an interval that must be finite and non-negative.
    ///
    /// # Errors
    /// Returns `InvalidInterval` for a negative, NaN or infinite interval.
    pub fn try_new(value: f64, interval: f64) -> NumericResult<Self> {
        if interval.is_finite() && interval >= 0.0 {
            Ok(Self::new(value, interval))
        } else {
            Err(NumericError::InvalidInterval)
        }
    }

    /// Create from decimal text.
    ///
    /// Malformed text yields a `NaN` value. When `interval` is `0` it is
    /// inferred from how the literal is written:
    ///
    /// - `"123.123"` has three fractional digits, so the interval is `0.001`;
    /// - `"123"` has no fraction; the interval becomes `10^(3 - 1) = 100`,
    ///   the order of magnitude of the leading digit. This is a heuristic
    ///   reading of the literal's significance, not an exact rule;
    /// - text without integer or fractional digits keeps an interval of `0`.
    pub fn from_text(text: &str, interval: f64) -> Self {
        let value = codec::from_text(text);
        let interval = if interval == 0.0 {
            infer_interval(text)
        } else {
            interval
        };

        Self::new(value, interval)
    }

    /// Create from a `rust_decimal::Decimal`, inferring the interval from
    /// the decimal's written scale.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::from_text(&d.to_string(), 0.0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unquantized value.
    #[inline]
    pub const fn raw(&self) -> f64 {
        self.raw
    }

    /// The quantization interval (`0` when unconstrained).
    #[inline]
    pub const fn interval(&self) -> f64 {
        self.interval
    }

    /// The raw value rounded to the nearest multiple of the interval.
    #[inline]
    pub fn quantized_value(&self) -> f64 {
        codec::quantize(self.raw, self.interval)
    }

    /// Shorthand for [`quantized_value`](Self::quantized_value).
    #[inline]
    pub fn value(&self) -> f64 {
        self.quantized_value()
    }

    /// Quantized value rendered with the interval's fractional precision.
    pub fn text(&self) -> String {
        codec::to_text_with_interval(self.raw, self.interval)
    }

    /// Characters before the decimal point of the quantized value's
    /// shortest text, sign included.
    pub fn integer_part_length(&self) -> usize {
        self.size(Parts::Integer)
    }

    /// Fractional digits of the quantized value's shortest text.
    pub fn fractional_part_length(&self) -> usize {
        self.size(Parts::Fraction)
    }

    /// Total length of the quantized value's shortest text.
    pub fn total_length(&self) -> usize {
        self.size(Parts::Decimal)
    }

    /// Length of the selected part of the quantized value's shortest text.
    pub fn size(&self, part: Parts) -> usize {
        codec::part_len(&codec::to_text(self.quantized_value()), part)
    }

    /// Convert the displayed text into a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `NonFinite` if the quantized value is NaN or infinite
    /// - `Overflow` if the value is outside the `Decimal` range
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        if !self.quantized_value().is_finite() {
            return Err(NumericError::NonFinite);
        }

        self.text()
            .parse::<rust_decimal::Decimal>()
            .map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Compound Arithmetic
    // ========================================================================

    /// `raw += rhs.quantized_value()`
    #[inline]
    pub fn add(&mut self, rhs: &Self) -> &mut Self {
        self.raw += rhs.quantized_value();
        self
    }

    /// `raw -= rhs.quantized_value()`
    #[inline]
    pub fn subtract(&mut self, rhs: &Self) -> &mut Self {
        self.raw -= rhs.quantized_value();
        self
    }

    /// `raw *= rhs.quantized_value()`
    #[inline]
    pub fn multiply(&mut self, rhs: &Self) -> &mut Self {
        self.raw *= rhs.quantized_value();
        self
    }

    /// `raw /= rhs.quantized_value()`; division by zero follows IEEE 754.
    #[inline]
    pub fn divide(&mut self, rhs: &Self) -> &mut Self {
        self.raw /= rhs.quantized_value();
        self
    }
}

/// Interval implied by how a literal is written; see
/// [`QuantizedDecimal::from_text`].
fn infer_interval(text: &str) -> f64 {
    let literal = text.trim();
    let unsigned = literal
        .strip_prefix('-')
        .or_else(|| literal.strip_prefix('+'))
        .unwrap_or(literal);

    let fraction = codec::fractional_part_len(unsigned);
    if fraction > 0 {
        return pow10(-i32::try_from(fraction).unwrap_or(i32::MAX));
    }

    // Leading zeros are not significant; "0" and "000" still count one digit
    let integer_part = &unsigned[..codec::integer_part_len(unsigned)];
    if integer_part.is_empty() {
        return 0.0;
    }

    let digits = integer_part.trim_start_matches('0').len().max(1);
    pow10(i32::try_from(digits - 1).unwrap_or(i32::MAX))
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<f64> for QuantizedDecimal {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value, 0.0)
    }
}

impl From<&str> for QuantizedDecimal {
    #[inline]
    fn from(text: &str) -> Self {
        Self::from_text(text, 0.0)
    }
}

impl PartialEq for QuantizedDecimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.quantized_value() == other.quantized_value()
    }
}

impl PartialOrd for QuantizedDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.quantized_value().partial_cmp(&other.quantized_value())
    }
}

// `ops` is referenced by path so the inherent `add` keeps method-call
// priority over `Add::add` in this module.

impl ops::AddAssign for QuantizedDecimal {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        QuantizedDecimal::add(self, &rhs);
    }
}

impl ops::SubAssign for QuantizedDecimal {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract(&rhs);
    }
}

impl ops::MulAssign for QuantizedDecimal {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl ops::DivAssign for QuantizedDecimal {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.divide(&rhs);
    }
}

impl ops::Add for QuantizedDecimal {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl ops::Sub for QuantizedDecimal {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl ops::Mul for QuantizedDecimal {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl ops::Div for QuantizedDecimal {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: Self) -> Self::Output {
        self /= rhs;
        self
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for QuantizedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuantizedDecimal({}, raw={}, interval={})",
            self, self.raw, self.interval
        )
    }
}

impl fmt::Display for QuantizedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for QuantizedDecimal {
    type Err = NumericError;

    /// Strict parse; the interval is inferred as in
    /// [`QuantizedDecimal::from_text`].
    ///
    /// # Examples
    /// - "123.45" -> 123.45 with interval 0.01
    /// - "-7" -> -7 with interval 1
    /// - "abc", "nan", "inf" -> `InvalidInput`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: f64 = s.parse().map_err(|_| NumericError::InvalidInput)?;

        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }

        Ok(Self::from_text(s, 0.0))
    }
}

// ============================================================================
// Tests
// ============================================================================
