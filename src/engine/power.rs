// ============================================================================
// Exponentiation
// Binary exponentiation and modular exponentiation over digit strings
// ============================================================================

use super::native::{div_qr_signed, mul_signed};

/// Raise a canonical signed digit string to a non-negative native exponent.
///
/// Binary exponentiation: square the base, recurse on the halved exponent,
/// and multiply once more when the exponent is odd. O(log e) multiplications
/// instead of O(e).
pub(crate) fn pow_signed(a: &str, exponent: u64) -> String {
    match exponent {
        0 => "1".to_string(),
        1 => a.to_string(),
        _ => {
            let odd = exponent % 2 == 1;
            let square = mul_signed(a, a);
            let result = pow_signed(&square, exponent / 2);
            if odd {
                mul_signed(&result, a)
            } else {
                result
            }
        },
    }
}

/// Check the least-significant decimal digit for oddness.
#[inline]
fn is_odd(n: &str) -> bool {
    matches!(
        n.as_bytes()[n.len() - 1],
        b'1' | b'3' | b'5' | b'7' | b'9'
    )
}

/// Modular exponentiation over canonical unsigned magnitudes,
/// with `modulus != 0` guaranteed by the caller.
///
/// Square-and-multiply driven by the decimal digits of the exponent: an odd
/// exponent triggers a multiply-then-reduce step, then the base is squared
/// and reduced and the exponent halved, until the exponent reaches zero.
/// All operands are non-negative, so reduction uses the remainder directly.
pub(crate) fn mod_pow_unsigned(base: &str, exponent: &str, modulus: &str) -> String {
    // Anything is congruent to 0 modulo 1; the loop below would return 1
    // for a zero exponent, so that case is pinned here.
    if exponent == "0" && modulus == "1" {
        return "0".to_string();
    }

    let mut base = div_qr_signed(base, modulus).1;
    let mut exponent = exponent.to_string();
    let mut result = "1".to_string();

    while exponent != "0" {
        if is_odd(&exponent) {
            result = div_qr_signed(&mul_signed(&result, &base), modulus).1;
        }
        exponent = div_qr_signed(&exponent, "2").0;
        base = div_qr_signed(&mul_signed(&base, &base), modulus).1;
    }

    result
}
