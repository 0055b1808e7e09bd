// ============================================================================
// Numeric Errors
// Error types for the opt-in fallible decimal entry points
// ============================================================================

use std::fmt;

/// Errors returned by the strict constructors and conversions of
/// [`QuantizedDecimal`](super::QuantizedDecimal).
///
/// The codec itself is total; these only surface when a caller asks for a
/// checked operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text could not be parsed as a decimal
    InvalidInput,
    /// Interval is negative, NaN or infinite
    InvalidInterval,
    /// Value is NaN or infinite where a finite value is required
    NonFinite,
    /// Value exceeds the range of the target representation
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::InvalidInterval => {
                write!(f, "invalid interval: must be finite and non-negative")
            },
            NumericError::NonFinite => write!(f, "non-finite value: NaN or infinity"),
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target representation")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
