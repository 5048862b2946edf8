//! Fixed-width Curl digest.

use super::{parse_trits, trits_to_string, Trit};
use crate::curl::HASH_LENGTH;
use crate::error::{CurlResult, ErrorCode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A squeezed Curl digest: exactly [`HASH_LENGTH`] trits.
///
/// Serializes as its digit string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TritDigest([Trit; HASH_LENGTH]);

impl TritDigest {
    /// The all-zero digest, produced by squeezing a sponge that never absorbed.
    pub const fn zero() -> Self {
        TritDigest([Trit::ZERO; HASH_LENGTH])
    }

    /// Copy a digest out of a trit slice.
    ///
    /// Returns `E102_WrongLength` unless `trits.len() == HASH_LENGTH`.
    pub fn from_trits(trits: &[Trit]) -> CurlResult<Self> {
        let arr: [Trit; HASH_LENGTH] = trits.try_into().map_err(|_| {
            ErrorCode::E102_WrongLength(HASH_LENGTH as u64, trits.len() as u64)
        })?;
        Ok(TritDigest(arr))
    }

    /// The digest trits.
    pub fn as_trits(&self) -> &[Trit; HASH_LENGTH] {
        &self.0
    }

    /// Raw digit form.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.iter().map(|t| t.value()).collect()
    }
}

impl Default for TritDigest {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[Trit; HASH_LENGTH]> for TritDigest {
    fn from(trits: [Trit; HASH_LENGTH]) -> Self {
        TritDigest(trits)
    }
}

impl AsRef<[Trit]> for TritDigest {
    fn as_ref(&self) -> &[Trit] {
        &self.0
    }
}

impl fmt::Display for TritDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&trits_to_string(&self.0))
    }
}

impl fmt::Debug for TritDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TritDigest({})", self)
    }
}

impl FromStr for TritDigest {
    type Err = ErrorCode;

    fn from_str(s: &str) -> CurlResult<Self> {
        let trits = parse_trits(s)?;
        Self::from_trits(&trits)
    }
}

impl Serialize for TritDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TritDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
