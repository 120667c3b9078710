// ============================================================================
// Engine Factory
// Creates arithmetic engines with host-capability logging
// ============================================================================

use super::native::NativeEngine;
use crate::interfaces::BigIntOps;
use crate::platform::HostCapabilities;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates the default arithmetic engine behind the uniform interface.
///
/// The portable digit-string engine is always available; engines backed by
/// system bignum libraries plug in behind the same `BigIntOps` surface.
///
/// # Example
/// ```
/// use bigint_engine::engine::factory::create_engine;
/// use bigint_engine::interfaces::BigIntOps;
///
/// let engine = create_engine();
/// assert_eq!(engine.add("2", "3").unwrap(), "5");
/// ```
pub fn create_engine() -> Box<dyn BigIntOps> {
    let caps = HostCapabilities::detect();
    let engine = NativeEngine::new();

    tracing::debug!("arithmetic engine selected: {} ({})", engine.name(), caps);

    Box::new(engine)
}

/// Creates the portable native engine directly (for testing or comparison).
pub fn create_native_engine() -> NativeEngine {
    NativeEngine::new()
}
