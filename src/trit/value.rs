//! The validated trit type.

use crate::error::{CurlResult, ErrorCode};
use std::fmt;

/// A base-3 digit, always in {0, 1, 2}.
///
/// `#[repr(transparent)]` over `u8`, so a `[Trit; N]` has the same layout as
/// the raw digit buffer it was validated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Trit(u8);

impl Trit {
    /// The digit 0.
    pub const ZERO: Trit = Trit(0);

    /// The digit 1.
    pub const ONE: Trit = Trit(1);

    /// The digit 2.
    pub const TWO: Trit = Trit(2);

    /// All three digits in ascending order.
    pub const ALL: [Trit; 3] = [Trit::ZERO, Trit::ONE, Trit::TWO];

    /// Create a trit from a raw value.
    ///
    /// Returns `E100_InvalidTritValue(0, value)` when `value > 2`.
    pub fn new(value: u8) -> CurlResult<Trit> {
        Self::at(0, value)
    }

    /// Create a trit from the raw value found at `index` of some input,
    /// reporting that index on failure.
    pub(crate) fn at(index: usize, value: u8) -> CurlResult<Trit> {
        if value < 3 {
            Ok(Trit(value))
        } else {
            Err(ErrorCode::E100_InvalidTritValue(index as u64, value as u64))
        }
    }

    /// Create a trit in a const context from a value the build script has
    /// already range-checked.
    pub(crate) const fn from_u8_const(value: u8) -> Trit {
        assert!(value < 3, "trit out of range");
        Trit(value)
    }

    /// The raw digit.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index form, for table lookups.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// The digit as an ASCII character (`'0'`, `'1'` or `'2'`).
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Parse a single digit character.
    pub fn from_char(c: char) -> Option<Trit> {
        match c {
            '0' => Some(Trit::ZERO),
            '1' => Some(Trit::ONE),
            '2' => Some(Trit::TWO),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Trit {
    type Error = ErrorCode;

    fn try_from(value: u8) -> CurlResult<Trit> {
        Trit::new(value)
    }
}

impl From<Trit> for u8 {
    fn from(trit: Trit) -> u8 {
        trit.0
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
