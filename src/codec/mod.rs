// ============================================================================
// Codec Module
// Canonical decimal text conversion for f64 values
// ============================================================================
//
// This module provides:
// - normalize: magnitude rescaling into a bounded decimal window
// - minimal_digits: bounded shortest-round-trip digit search
// - shift_text: power-of-ten scaling performed on the text itself
// - to_text / from_text / quantize: the value <-> text codec
//
// Design principles:
// - Every function is pure and total (no panics, no Result)
// - Parse failures surface as NaN, degenerate quantization as passthrough
// - At most 15 significant digits are searched

pub mod config;
mod digits;
mod normalize;
mod shift;
mod text;

#[cfg(test)]
mod properties;

pub use digits::minimal_digits;
pub use normalize::normalize;
pub use shift::shift_text;
pub use text::{
    decimal_len, fractional_part_len, from_text, integer_part_len, part_len, precision, quantize,
    to_text, to_text_with_interval, Parts,
};
