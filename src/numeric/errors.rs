// ============================================================================
// Arithmetic Errors
// Error types for arbitrary-precision integer operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during arbitrary-precision arithmetic operations.
///
/// Every failure is detected at the call boundary, before any arithmetic is
/// attempted; operations never return partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticError {
    /// Attempted division (or modular reduction) by zero
    DivisionByZero,
    /// Input string is not a valid decimal integer literal
    InvalidLiteral,
    /// Exponent is negative or otherwise outside the integer-only domain
    InvalidExponent,
    /// Operation requires a non-negative operand
    NegativeOperand,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
            ArithmeticError::InvalidLiteral => {
                write!(f, "invalid numeric literal: could not parse value")
            },
            ArithmeticError::InvalidExponent => {
                write!(f, "invalid exponent: must be a non-negative integer")
            },
            ArithmeticError::NegativeOperand => {
                write!(f, "negative operand: operation requires a non-negative value")
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
