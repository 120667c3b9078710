// ============================================================================
// Native Engine
// Portable arbitrary-precision engine: signed dispatch over the unsigned
// block-wise core, with a checked native fast path for small operands
// ============================================================================

use super::power::{mod_pow_unsigned, pow_signed};
use super::roots::sqrt_magnitude;
use super::unsigned::{add_magnitudes, div_rem_magnitudes, mul_magnitudes, sub_magnitudes};
use crate::interfaces::BigIntOps;
use crate::numeric::{
    apply_sign, compare_magnitudes, split_sign, validate, validate_unsigned, ArithmeticError,
    ArithmeticResult,
};
use std::cmp::Ordering;

/// The portable, dependency-free arithmetic engine.
///
/// Operates on canonical decimal digit strings. Small operands take a checked
/// native `i64` path; anything that would overflow escalates to the unsigned
/// block-wise algorithms. Every operation is a pure function; the engine
/// holds no state and may be shared freely across threads.
///
/// # Example
/// ```rust
/// use bigint_engine::prelude::*;
///
/// let engine = NativeEngine::new();
/// let sum = engine.add("999999999999999999", "1").unwrap();
/// assert_eq!(sum, "1000000000000000000");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEngine;

impl NativeEngine {
    pub fn new() -> Self {
        Self
    }
}

// ============================================================================
// Internal Signed Operations
// ============================================================================
//
// These operate on canonical signed digit strings (validation already done)
// and are shared with the exponentiation and square-root routines, which
// compose them without re-validating at every step.

/// Parse both operands as native integers, if they fit.
#[inline]
fn native_pair(a: &str, b: &str) -> Option<(i64, i64)> {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => Some((x, y)),
        _ => None,
    }
}

fn trace_escalation(op: &str, a: &str, b: &str) {
    tracing::trace!(
        operation = op,
        len_a = a.len(),
        len_b = b.len(),
        "operands exceed native width, using block-wise path"
    );
}

/// Flip the sign of a canonical signed digit string. Zero stays `"0"`.
pub(crate) fn neg_signed(a: &str) -> String {
    if a == "0" {
        a.to_string()
    } else if let Some(magnitude) = a.strip_prefix('-') {
        magnitude.to_string()
    } else {
        let mut out = String::with_capacity(a.len() + 1);
        out.push('-');
        out.push_str(a);
        out
    }
}

pub(crate) fn add_signed(a: &str, b: &str) -> String {
    // Native fast path: the dominant real-world case
    if let Some((x, y)) = native_pair(a, b) {
        if let Some(sum) = x.checked_add(y) {
            return sum.to_string();
        }
    }

    if a == "0" {
        return b.to_string();
    }
    if b == "0" {
        return a.to_string();
    }

    trace_escalation("add", a, b);

    let (a_neg, a_mag) = split_sign(a);
    let (b_neg, b_mag) = split_sign(b);

    if a_neg == b_neg {
        return apply_sign(a_neg, add_magnitudes(a_mag, b_mag));
    }

    // Opposite signs: larger magnitude minus smaller, sign follows the larger
    match compare_magnitudes(a_mag, b_mag) {
        Ordering::Equal => "0".to_string(),
        Ordering::Greater => apply_sign(a_neg, sub_magnitudes(a_mag, b_mag)),
        Ordering::Less => apply_sign(b_neg, sub_magnitudes(b_mag, a_mag)),
    }
}

pub(crate) fn sub_signed(a: &str, b: &str) -> String {
    add_signed(a, &neg_signed(b))
}

pub(crate) fn mul_signed(a: &str, b: &str) -> String {
    if let Some((x, y)) = native_pair(a, b) {
        if let Some(product) = x.checked_mul(y) {
            return product.to_string();
        }
    }

    if a == "0" || b == "0" {
        return "0".to_string();
    }
    if b == "1" {
        return a.to_string();
    }
    if a == "1" {
        return b.to_string();
    }
    if b == "-1" {
        return neg_signed(a);
    }
    if a == "-1" {
        return neg_signed(b);
    }

    trace_escalation("mul", a, b);

    let (a_neg, a_mag) = split_sign(a);
    let (b_neg, b_mag) = split_sign(b);

    apply_sign(a_neg != b_neg, mul_magnitudes(a_mag, b_mag))
}

/// Truncating division with remainder. The caller guarantees `b != 0`.
///
/// The quotient rounds toward zero; the remainder's sign follows the
/// dividend, so `a == b*q + r` holds exactly.
pub(crate) fn div_qr_signed(a: &str, b: &str) -> (String, String) {
    debug_assert!(b != "0");

    if a == "0" {
        return ("0".to_string(), "0".to_string());
    }
    if a == b {
        return ("1".to_string(), "0".to_string());
    }
    if b == "1" {
        return (a.to_string(), "0".to_string());
    }
    if b == "-1" {
        return (neg_signed(a), "0".to_string());
    }

    if let Some((x, y)) = native_pair(a, b) {
        // checked: i64::MIN / -1 would overflow
        if let (Some(q), Some(r)) = (x.checked_div(y), x.checked_rem(y)) {
            return (q.to_string(), r.to_string());
        }
    }

    trace_escalation("div", a, b);

    let (a_neg, a_mag) = split_sign(a);
    let (b_neg, b_mag) = split_sign(b);

    let (q_mag, r_mag) = div_rem_magnitudes(a_mag, b_mag);

    let quotient = apply_sign(a_neg != b_neg, q_mag);
    let remainder = apply_sign(a_neg, r_mag);
    (quotient, remainder)
}

/// Signed comparison of two canonical digit strings.
pub(crate) fn cmp_signed(a: &str, b: &str) -> Ordering {
    let (a_neg, a_mag) = split_sign(a);
    let (b_neg, b_mag) = split_sign(b);

    match (a_neg, b_neg) {
        (false, false) => compare_magnitudes(a_mag, b_mag),
        (true, true) => compare_magnitudes(b_mag, a_mag),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
    }
}

/// Greatest common divisor of two canonical unsigned magnitudes by the
/// Euclidean remainder loop. `gcd(0, 0) == 0`.
pub(crate) fn gcd_magnitudes(a: &str, b: &str) -> String {
    let mut x = a.to_string();
    let mut y = b.to_string();
    while y != "0" {
        let r = div_qr_signed(&x, &y).1;
        x = y;
        y = r;
    }
    x
}

// ============================================================================
// BigIntOps Implementation
// ============================================================================

impl BigIntOps for NativeEngine {
    fn add(&self, a: &str, b: &str) -> ArithmeticResult<String> {
        let a = validate(a)?.into_signed();
        let b = validate(b)?.into_signed();
        Ok(add_signed(&a, &b))
    }

    fn sub(&self, a: &str, b: &str) -> ArithmeticResult<String> {
        let a = validate(a)?.into_signed();
        let b = validate(b)?.into_signed();
        Ok(sub_signed(&a, &b))
    }

    fn mul(&self, a: &str, b: &str) -> ArithmeticResult<String> {
        let a = validate(a)?.into_signed();
        let b = validate(b)?.into_signed();
        Ok(mul_signed(&a, &b))
    }

    fn div_qr(&self, a: &str, b: &str) -> ArithmeticResult<(String, String)> {
        let a = validate(a)?;
        let b = validate(b)?;
        if b.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(div_qr_signed(&a.into_signed(), &b.into_signed()))
    }

    fn pow(&self, a: &str, exponent: i64) -> ArithmeticResult<String> {
        if exponent < 0 {
            return Err(ArithmeticError::InvalidExponent);
        }
        let a = validate(a)?.into_signed();
        Ok(pow_signed(&a, exponent as u64))
    }

    fn mod_pow(&self, base: &str, exponent: &str, modulus: &str) -> ArithmeticResult<String> {
        let base = validate_unsigned(base)?;
        let exponent = validate_unsigned(exponent)?;
        let modulus = validate_unsigned(modulus)?;
        if modulus.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(mod_pow_unsigned(
            &base.magnitude,
            &exponent.magnitude,
            &modulus.magnitude,
        ))
    }

    fn sqrt(&self, n: &str) -> ArithmeticResult<String> {
        let n = validate(n)?;
        if n.negative {
            return Err(ArithmeticError::NegativeOperand);
        }
        Ok(sqrt_magnitude(&n.magnitude))
    }

    fn neg(&self, a: &str) -> ArithmeticResult<String> {
        let a = validate(a)?.into_signed();
        Ok(neg_signed(&a))
    }

    fn abs(&self, a: &str) -> ArithmeticResult<String> {
        Ok(validate(a)?.magnitude)
    }

    fn cmp(&self, a: &str, b: &str) -> ArithmeticResult<Ordering> {
        let a = validate(a)?.into_signed();
        let b = validate(b)?.into_signed();
        Ok(cmp_signed(&a, &b))
    }

    fn gcd(&self, a: &str, b: &str) -> ArithmeticResult<String> {
        let a = validate(a)?;
        let b = validate(b)?;
        Ok(gcd_magnitudes(&a.magnitude, &b.magnitude))
    }

    fn name(&self) -> &str {
        "native"
    }
}
