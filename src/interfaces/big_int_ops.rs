// ============================================================================
// Big Integer Operations Interface
// Defines the contract for pluggable arithmetic engines
// ============================================================================

use crate::numeric::ArithmeticResult;
use std::cmp::Ordering;

/// Strategy pattern interface for arbitrary-precision arithmetic engines.
///
/// The portable digit-string engine implements this trait; accelerated
/// engines backed by system bignum libraries can be swapped in behind the
/// same surface with no behavioral difference visible to callers. Every
/// method is a pure function over canonical decimal digit strings; results
/// are always canonical (no leading zeros, zero is `"0"` with no sign).
pub trait BigIntOps: Send + Sync {
    /// Add two signed decimal digit strings. Commutative.
    fn add(&self, a: &str, b: &str) -> ArithmeticResult<String>;

    /// Subtract `b` from `a`; equivalent to `a + (-b)`.
    fn sub(&self, a: &str, b: &str) -> ArithmeticResult<String>;

    /// Multiply two signed decimal digit strings. Commutative.
    fn mul(&self, a: &str, b: &str) -> ArithmeticResult<String>;

    /// Truncating quotient of `a / b`, rounded toward zero.
    ///
    /// # Errors
    /// `DivisionByZero` if `b` is zero.
    fn div_q(&self, a: &str, b: &str) -> ArithmeticResult<String> {
        Ok(self.div_qr(a, b)?.0)
    }

    /// Remainder of `a / b`; its sign follows the dividend (or it is zero).
    ///
    /// # Errors
    /// `DivisionByZero` if `b` is zero.
    fn div_r(&self, a: &str, b: &str) -> ArithmeticResult<String> {
        Ok(self.div_qr(a, b)?.1)
    }

    /// Quotient and remainder in a single pass, satisfying `a == b*q + r`.
    ///
    /// # Errors
    /// `DivisionByZero` if `b` is zero.
    fn div_qr(&self, a: &str, b: &str) -> ArithmeticResult<(String, String)>;

    /// Raise `a` to a non-negative exponent by binary exponentiation.
    ///
    /// # Errors
    /// `InvalidExponent` if the exponent is negative.
    fn pow(&self, a: &str, exponent: i64) -> ArithmeticResult<String>;

    /// `base^exponent mod modulus` for non-negative operands; the result is
    /// in `[0, modulus)`.
    ///
    /// # Errors
    /// `DivisionByZero` if the modulus is zero; `InvalidLiteral` if any
    /// operand carries a sign.
    fn mod_pow(&self, base: &str, exponent: &str, modulus: &str) -> ArithmeticResult<String>;

    /// Integer square root: `floor(sqrt(n))`.
    ///
    /// # Errors
    /// `NegativeOperand` if `n` is negative.
    fn sqrt(&self, n: &str) -> ArithmeticResult<String>;

    /// Negate a signed decimal digit string. Zero stays unsigned.
    fn neg(&self, a: &str) -> ArithmeticResult<String>;

    /// Absolute value of a signed decimal digit string.
    fn abs(&self, a: &str) -> ArithmeticResult<String>;

    /// Signed three-way comparison.
    fn cmp(&self, a: &str, b: &str) -> ArithmeticResult<Ordering>;

    /// Greatest common divisor; always non-negative, `gcd(0, 0) == 0`.
    fn gcd(&self, a: &str, b: &str) -> ArithmeticResult<String>;

    /// Get the engine name for logging/metrics.
    fn name(&self) -> &str;
}
