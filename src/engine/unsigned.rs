// ============================================================================
// Unsigned Block-Wise Core
// Schoolbook add/sub/mul and long division on canonical digit strings,
// chunked into blocks sized for native i64 arithmetic
// ============================================================================

use crate::numeric::{compare_magnitudes, pad_to_equal_length, strip_leading_zeros};
use crate::platform::{pow10, BLOCK_DIGITS, MUL_BLOCK_BASE, MUL_BLOCK_DIGITS};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Parse a slice of ASCII digits into a native integer.
///
/// The slice is at most `BLOCK_DIGITS` long, so the fold cannot overflow.
#[inline]
fn parse_block(digits: &[u8]) -> i64 {
    debug_assert!(digits.len() <= BLOCK_DIGITS);
    digits
        .iter()
        .fold(0i64, |acc, &d| acc * 10 + i64::from(d - b'0'))
}

/// Split a magnitude into native-integer blocks of `width` digits,
/// least-significant block first. The leading block may be narrower.
fn split_blocks(magnitude: &str, width: usize) -> SmallVec<[i64; 16]> {
    let bytes = magnitude.as_bytes();
    let mut blocks = SmallVec::new();
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        blocks.push(parse_block(&bytes[start..end]));
        end = start;
    }
    blocks
}

/// Append `count` zero digits to `out`.
fn push_zeros(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push('0');
    }
}

// ============================================================================
// Addition
// ============================================================================

/// Add two canonical unsigned magnitudes.
///
/// Operands are zero-padded to equal length, then processed from the
/// least-significant block backward in `BLOCK_DIGITS` steps, propagating a
/// 0/1 carry between blocks. A final carry prepends a leading `1`.
pub(crate) fn add_magnitudes(a: &str, b: &str) -> String {
    let (pa, pb) = pad_to_equal_length(a, b);
    let bytes_a = pa.as_bytes();
    let bytes_b = pb.as_bytes();

    let mut parts: SmallVec<[String; 8]> = SmallVec::new();
    let mut carry: i64 = 0;
    let mut end = bytes_a.len();

    while end > 0 {
        let start = end.saturating_sub(BLOCK_DIGITS);
        let width = end - start;
        let base = pow10(width);

        let mut sum = parse_block(&bytes_a[start..end]) + parse_block(&bytes_b[start..end]) + carry;
        if sum >= base {
            carry = 1;
            sum -= base;
        } else {
            carry = 0;
        }

        parts.push(format!("{:0width$}", sum, width = width));
        end = start;
    }

    let mut out = String::with_capacity(bytes_a.len() + 1);
    if carry == 1 {
        out.push('1');
    }
    for part in parts.iter().rev() {
        out.push_str(part);
    }
    out
}

// ============================================================================
// Subtraction
// ============================================================================

/// Subtract `b` from `a` for canonical unsigned magnitudes with `a >= b`.
///
/// The signed layer guarantees the operand order by pre-comparing; the final
/// borrow is therefore always zero. The result is re-canonicalized because
/// leading digits may cancel.
pub(crate) fn sub_magnitudes(a: &str, b: &str) -> String {
    debug_assert!(compare_magnitudes(a, b) != Ordering::Less);

    let (pa, pb) = pad_to_equal_length(a, b);
    let bytes_a = pa.as_bytes();
    let bytes_b = pb.as_bytes();

    let mut parts: SmallVec<[String; 8]> = SmallVec::new();
    let mut borrow: i64 = 0;
    let mut end = bytes_a.len();

    while end > 0 {
        let start = end.saturating_sub(BLOCK_DIGITS);
        let width = end - start;
        let base = pow10(width);

        let mut diff =
            parse_block(&bytes_a[start..end]) - parse_block(&bytes_b[start..end]) - borrow;
        if diff < 0 {
            diff += base;
            borrow = 1;
        } else {
            borrow = 0;
        }

        parts.push(format!("{:0width$}", diff, width = width));
        end = start;
    }

    debug_assert_eq!(borrow, 0);

    let mut out = String::with_capacity(bytes_a.len());
    for part in parts.iter().rev() {
        out.push_str(part);
    }
    strip_leading_zeros(&out)
}

// ============================================================================
// Multiplication
// ============================================================================

/// Multiply two canonical unsigned magnitudes.
///
/// Grade-school multiplication over half-width blocks: a product of two
/// `MUL_BLOCK_DIGITS`-digit blocks plus a carry still fits an i64. Each block
/// of `a` produces one partial row (inner carry chain over the blocks of
/// `b`), shifted by its power of ten and accumulated into the running total.
/// All-zero rows are skipped.
pub(crate) fn mul_magnitudes(a: &str, b: &str) -> String {
    if a == "0" || b == "0" {
        return "0".to_string();
    }

    let blocks_a = split_blocks(a, MUL_BLOCK_DIGITS);
    let blocks_b = split_blocks(b, MUL_BLOCK_DIGITS);

    let mut total = "0".to_string();

    for (i, &block_a) in blocks_a.iter().enumerate() {
        let mut row_parts: SmallVec<[String; 16]> = SmallVec::new();
        let mut carry: i64 = 0;

        for &block_b in blocks_b.iter() {
            let value = block_a * block_b + carry;
            carry = value / MUL_BLOCK_BASE;
            let low = value - carry * MUL_BLOCK_BASE;
            row_parts.push(format!("{:0width$}", low, width = MUL_BLOCK_DIGITS));
        }
        if carry > 0 {
            row_parts.push(carry.to_string());
        }

        let mut row = String::with_capacity(b.len() + MUL_BLOCK_DIGITS);
        for part in row_parts.iter().rev() {
            row.push_str(part);
        }

        let row = strip_leading_zeros(&row);
        if row == "0" {
            continue;
        }

        let mut shifted = row;
        push_zeros(&mut shifted, i * MUL_BLOCK_DIGITS);
        total = add_magnitudes(&total, &shifted);
    }

    total
}

// ============================================================================
// Long Division
// ============================================================================

/// Divide canonical unsigned magnitude `a` by non-zero `b`, returning
/// `(quotient, remainder)`, both canonical.
///
/// Long division with a moving focus window over the remainder: while the
/// window compares below the divisor and digits remain, it widens by one;
/// otherwise the divisor, shifted to the window position, is subtracted and
/// the quotient gains `1` at that shift. Terminates when the remainder
/// reaches zero or drops below the divisor with the window exhausted.
pub(crate) fn div_rem_magnitudes(a: &str, b: &str) -> (String, String) {
    debug_assert!(b != "0");

    match compare_magnitudes(a, b) {
        Ordering::Less => return ("0".to_string(), a.to_string()),
        Ordering::Equal => return ("1".to_string(), "0".to_string()),
        Ordering::Greater => {},
    }

    let divisor_len = b.len();
    let mut quotient = "0".to_string();
    let mut remainder = a.to_string();
    let mut focus = divisor_len;

    loop {
        if compare_magnitudes(&remainder[..focus], b) == Ordering::Less {
            if focus == remainder.len() {
                break;
            }
            focus += 1;
            continue;
        }

        let shift = remainder.len() - focus;

        let mut step = String::with_capacity(shift + 1);
        step.push('1');
        push_zeros(&mut step, shift);
        quotient = add_magnitudes(&quotient, &step);

        let mut shifted_divisor = String::with_capacity(divisor_len + shift);
        shifted_divisor.push_str(b);
        push_zeros(&mut shifted_divisor, shift);
        remainder = sub_magnitudes(&remainder, &shifted_divisor);

        if remainder == "0" || remainder.len() < divisor_len {
            break;
        }
        focus = divisor_len;
    }

    (quotient, remainder)
}
