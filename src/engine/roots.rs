// ============================================================================
// Integer Square Root
// Newton's method on digit strings with integral convergence detection
// ============================================================================

use super::native::{add_signed, div_qr_signed};
use crate::numeric::compare_magnitudes;
use std::cmp::Ordering;

/// Integer square root of a canonical unsigned magnitude: `floor(sqrt(n))`.
///
/// Starts from a cheap over-estimate of `ceil(len(n) / 2)` nines and iterates
/// `x' = (x + n/x) / 2` with integer division. The sequence decreases
/// monotonically to the root, then oscillates between `floor(sqrt(n))` and
/// its successor; the loop stops on a fixpoint or on the first increase after
/// a decrease, returning the smaller of the oscillating pair.
pub(crate) fn sqrt_magnitude(n: &str) -> String {
    if n == "0" {
        return "0".to_string();
    }

    let mut x = "9".repeat(n.len().div_ceil(2));
    let mut decreased = false;

    loop {
        let next = div_qr_signed(&add_signed(&x, &div_qr_signed(n, &x).0), "2").0;

        match compare_magnitudes(&next, &x) {
            Ordering::Equal => return x,
            Ordering::Greater if decreased => return x,
            ordering => {
                decreased = ordering == Ordering::Less;
                x = next;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NativeEngine;
    use crate::interfaces::BigIntOps;
    use crate::numeric::ArithmeticError;
    use proptest::prelude::*;

    #[test]
    fn test_sqrt_zero_and_one() {
        let e = NativeEngine::new();
        assert_eq!(e.sqrt("0").unwrap(), "0");
        assert_eq!(e.sqrt("1").unwrap(), "1");
    }

    #[test]
    fn test_sqrt_small_values() {
        let e = NativeEngine::new();
        assert_eq!(e.sqrt("2").unwrap(), "1");
        assert_eq!(e.sqrt("3").unwrap(), "1");
        assert_eq!(e.sqrt("4").unwrap(), "2");
        assert_eq!(e.sqrt("8").unwrap(), "2");
        assert_eq!(e.sqrt("9").unwrap(), "3");
        assert_eq!(e.sqrt("99").unwrap(), "9");
        assert_eq!(e.sqrt("100").unwrap(), "10");
    }

    #[test]
    fn test_sqrt_perfect_square_large() {
        let e = NativeEngine::new();
        assert_eq!(
            e.sqrt("152415787532388367501905199875019052100").unwrap(),
            "12345678901234567890"
        );
    }

    #[test]
    fn test_sqrt_just_below_perfect_square() {
        let e = NativeEngine::new();
        // (12345678901234567890)^2 - 1 still roots to one less than the base
        let square = "152415787532388367501905199875019052100";
        let below = e.sub(square, "1").unwrap();
        assert_eq!(e.sqrt(&below).unwrap(), "12345678901234567889");
    }

    #[test]
    fn test_sqrt_negative_rejected() {
        let e = NativeEngine::new();
        assert_eq!(e.sqrt("-4"), Err(ArithmeticError::NegativeOperand));
    }

    #[test]
    fn test_sqrt_bracketing_exhaustive_small() {
        let e = NativeEngine::new();
        for n in 0u64..200 {
            let r: u64 = e.sqrt(&n.to_string()).unwrap().parse().unwrap();
            assert!(r * r <= n, "sqrt({}) = {} overshoots", n, r);
            assert!((r + 1) * (r + 1) > n, "sqrt({}) = {} undershoots", n, r);
        }
    }

    proptest! {
        #[test]
        fn prop_sqrt_bracketing(n in "[1-9][0-9]{0,39}") {
            let e = NativeEngine::new();
            let r = e.sqrt(&n).unwrap();

            let low = e.mul(&r, &r).unwrap();
            let next = e.add(&r, "1").unwrap();
            let high = e.mul(&next, &next).unwrap();

            // r*r <= n < (r+1)*(r+1)
            prop_assert_ne!(e.cmp(&low, &n).unwrap(), std::cmp::Ordering::Greater);
            prop_assert_eq!(e.cmp(&high, &n).unwrap(), std::cmp::Ordering::Greater);
        }
    }
}
