// ============================================================================
// Utilities Module
// Helpers for binaries and demos built on the codec
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_tracing;
