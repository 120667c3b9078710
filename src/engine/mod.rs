// ============================================================================
// Engine Module
// The portable arbitrary-precision arithmetic engine and its factory
// ============================================================================
//
// Layering, leaf-first:
// - unsigned: block-wise add/sub/mul and long division on magnitudes
// - native: signed dispatch, native fast path, degenerate shortcuts
// - power / roots: exponentiation and square root composed from the above
// - factory: constructs engines behind the BigIntOps interface

pub mod factory;

mod native;
mod power;
mod roots;
mod unsigned;

pub use factory::{create_engine, create_native_engine};
pub use native::NativeEngine;
