// ============================================================================
// Tracing Setup
// Installs a fmt subscriber so codec diagnostics become visible
// ============================================================================
//
// The library only emits events through the `tracing` facade:
// - DEBUG: decimal text that failed to parse (the value becomes NaN)
// - TRACE: quantization falling back to the raw value
//
// Binaries opt in with the `logging` feature and call `init_tracing` once.

use tracing::Level;

/// Install a global fmt subscriber capped at `level`.
///
/// Returns `false` if a global subscriber was already set; the existing one
/// is left in place.
///
/// # Example
/// ```ignore
/// use decimal_codec::utils::init_tracing;
///
/// init_tracing(tracing::Level::DEBUG);
/// ```
pub fn init_tracing(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
