// ============================================================================
// Interfaces Module
// Contracts between the arithmetic engines and their callers
// ============================================================================

mod big_int_ops;

pub use big_int_ops::BigIntOps;
