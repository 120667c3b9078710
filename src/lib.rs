// ============================================================================
// BigInt Engine Library
// Arbitrary-precision integer arithmetic on decimal digit strings
// ============================================================================

//! # BigInt Engine
//!
//! Exact integer arithmetic of unbounded magnitude, computed with nothing but
//! native fixed-width machine arithmetic.
//!
//! ## Features
//!
//! - **Digit-string representation**: values are canonical decimal strings,
//!   processed in blocks sized to the host word width (9 digits on 32-bit
//!   hosts, 18 on 64-bit hosts)
//! - **Native fast path**: operands that fit an `i64` are computed with
//!   checked native arithmetic and only escalate on overflow
//! - **Pluggable engines** behind the [`BigIntOps`](interfaces::BigIntOps)
//!   interface, so accelerated bignum-backed engines can be swapped in
//! - **Purely functional**: no shared state, every operation re-entrant
//!
//! ## Example
//!
//! ```rust
//! use bigint_engine::prelude::*;
//!
//! let engine = create_engine();
//!
//! let sum = engine.add("999999999999999999", "1").unwrap();
//! assert_eq!(sum, "1000000000000000000");
//!
//! let (q, r) = engine.div_qr("100000000000000000000", "3").unwrap();
//! assert_eq!((q.as_str(), r.as_str()), ("33333333333333333333", "1"));
//!
//! let root = engine.sqrt("152415787532388367501905199875019052100").unwrap();
//! assert_eq!(root, "12345678901234567890");
//! ```

pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod platform;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{create_engine, create_native_engine, NativeEngine};
    pub use crate::interfaces::BigIntOps;
    pub use crate::numeric::{ArithmeticError, ArithmeticResult};
    pub use crate::platform::HostCapabilities;
}
