// ============================================================================
// Decimal Codec Library
// Canonical decimal text for f64 values with interval quantization
// ============================================================================

//! # Decimal Codec
//!
//! Converts `f64` values to the shortest decimal text that parses back to
//! them, parses decimal text back, and quantizes values to an interval
//! (a tick size) rendered with the interval's own precision.
//!
//! ## Features
//!
//! - **Shortest text** via a bounded 15-digit round-trip search
//! - **Text shifting** by powers of ten without re-parsing
//! - **Quantization** to any interval, rendered with matching precision
//! - **Total functions**: malformed text is `NaN`, degenerate intervals pass
//!   the value through
//!
//! ## Example
//!
//! ```rust
//! use decimal_codec::prelude::*;
//!
//! assert_eq!(to_text(123.123), "123.123");
//! assert_eq!(to_text_with_interval(123.123, 3.1), "124.0");
//! assert_eq!(shift_text("123.456", -4), "0.0123456");
//!
//! // Interval inferred from the literal: 0.001
//! let mut price = QuantizedDecimal::from_text("123.123", 0.0);
//! price.add(&QuantizedDecimal::new(0.0004, 0.001));
//! assert_eq!(price.text(), "123.123");
//!
//! let tick = QuantizedDecimal::new(0.0016, 0.001);
//! let moved = price + tick;
//! assert_eq!(moved.text(), "123.125");
//! assert_eq!(moved.interval(), price.interval());
//! ```

pub mod codec;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        from_text, minimal_digits, normalize, quantize, shift_text, to_text,
        to_text_with_interval, Parts,
    };
    pub use crate::numeric::{NumericError, NumericResult, QuantizedDecimal};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_price_ladder() {
        let tick = QuantizedDecimal::from_text("0.05", 0.0);
        assert_eq!(tick.interval(), 0.01);

        let mut price = QuantizedDecimal::new(99.9, tick.quantized_value());
        let mut ladder = Vec::new();
        for _ in 0..4 {
            price.add(&tick);
            ladder.push(price.text());
        }

        assert_eq!(ladder, ["99.95", "100.00", "100.05", "100.10"]);
        assert!(price > QuantizedDecimal::from(100.0));
    }

    #[test]
    fn test_text_value_text_round_trip() {
        for text in ["123.123", "-7.402001334", "0.000000000007402001334", "128.82", "-0"] {
            assert_eq!(to_text(from_text(text)), text);
        }
    }

    #[test]
    fn test_shift_undoes_normalization() {
        let value = 0.000_000_000_007_402_001_334;
        let (mantissa, exponent) = normalize(value);
        let mantissa_text = to_text(mantissa);

        assert_eq!(mantissa_text, "7.402001334");
        assert_eq!(shift_text(&mantissa_text, -exponent), to_text(value));
    }

    #[test]
    fn test_malformed_text_flows_through_as_nan() {
        let bad = QuantizedDecimal::from_text("12,5", 0.0);
        assert!(bad.raw().is_nan());

        let sum = QuantizedDecimal::from(1.0) + bad;
        assert!(sum.quantized_value().is_nan());
        assert_eq!(sum.text(), "nan");
        assert_eq!("12,5".parse::<QuantizedDecimal>(), Err(NumericError::InvalidInput));
    }
}
