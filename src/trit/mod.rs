//! Ternary digits and trit sequences.
//!
//! A [`Trit`] is a base-3 digit in {0, 1, 2}. Raw `u8` input is validated
//! once at the boundary; everything past that works on `Trit` and cannot
//! hold an out-of-range value.
//!
//! Trit sequences have a text form of one decimal digit per trit
//! (`"0120"`), used by the conformance corpus and by [`TritDigest`]'s
//! `Display`/`FromStr`/serde impls.

mod digest;
mod sequence;
mod value;

pub use digest::TritDigest;
pub use sequence::{parse_trits, trits_from_u8, trits_to_string, trits_to_u8};
pub use value::Trit;
