// ============================================================================
// Numeric Module
// Quantized decimal value type built on the codec
// ============================================================================
//
// This module provides:
// - QuantizedDecimal: raw f64 plus a quantization interval (tick size)
// - NumericError: Error types for the checked entry points
//
// Design principles:
// - Arithmetic updates the raw value; the interval belongs to the left operand
// - Equality and ordering see only the quantized value
// - Lightweight Copy type, no interior locking

mod errors;
mod quantized;

pub use errors::{NumericError, NumericResult};
pub use quantized::QuantizedDecimal;
