// ============================================================================
// Platform Module
// Host word-width detection and the derived digit-block sizing constants
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compute 10^n at compile time
pub(crate) const fn pow10(n: usize) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Number of decimal digits per block for addition and subtraction.
///
/// Two blocks of this width plus a one-digit carry must fit a native `i64`
/// without overflow: `2 * (10^18 - 1) + 1 < i64::MAX` on 64-bit hosts,
/// and the 9-digit constant leaves the same headroom on 32-bit hosts.
#[cfg(target_pointer_width = "64")]
pub const BLOCK_DIGITS: usize = 18;

#[cfg(not(target_pointer_width = "64"))]
pub const BLOCK_DIGITS: usize = 9;

/// Number of decimal digits per block for multiplication.
///
/// A product of two blocks of this width plus a carry must still fit
/// natively, so multiplication runs on half-width blocks.
pub const MUL_BLOCK_DIGITS: usize = BLOCK_DIGITS / 2;

/// 10^MUL_BLOCK_DIGITS, the carry-split base for block multiplication.
pub const MUL_BLOCK_BASE: i64 = pow10(MUL_BLOCK_DIGITS);

// ============================================================================
// Word Width
// ============================================================================

/// Native machine word width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WordWidth {
    /// 32-bit host (9-digit blocks)
    W32,
    /// 64-bit host (18-digit blocks)
    W64,
}

impl WordWidth {
    /// Detect the current host word width.
    #[inline]
    pub fn detect() -> Self {
        #[cfg(target_pointer_width = "64")]
        {
            WordWidth::W64
        }
        #[cfg(not(target_pointer_width = "64"))]
        {
            WordWidth::W32
        }
    }
}

impl std::fmt::Display for WordWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordWidth::W32 => write!(f, "32-bit"),
            WordWidth::W64 => write!(f, "64-bit"),
        }
    }
}

// ============================================================================
// Host Capabilities
// ============================================================================

/// Detected host characteristics relevant to block-chunked arithmetic.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HostCapabilities {
    /// The native word width
    pub word_width: WordWidth,
    /// Digits per add/sub block
    pub block_digits: usize,
    /// Digits per mul block
    pub mul_block_digits: usize,
}

impl HostCapabilities {
    /// Detect host capabilities. The values are compile-time constants;
    /// this merely surfaces them for logging and inspection.
    pub fn detect() -> Self {
        Self {
            word_width: WordWidth::detect(),
            block_digits: BLOCK_DIGITS,
            mul_block_digits: MUL_BLOCK_DIGITS,
        }
    }
}

impl std::fmt::Display for HostCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} host, {}-digit blocks, {}-digit mul blocks",
            self.word_width, self.block_digits, self.mul_block_digits
        )
    }
}
