//! Trit Curl - a ternary sponge hash.
//!
//! Curl is a fixed-width, permutation-based sponge that operates on base-3
//! digits ("trits") rather than bits. The state is 729 trits wide; input is
//! absorbed and the digest squeezed through the leading 243 trits.
//!
//! # Architecture
//!
//! - [`trit`] - the validated [`Trit`] type, trit strings and [`TritDigest`]
//! - [`curl`] - index table, substitution, transform, sponge and hash
//! - [`conformance`] - JSON test-vector corpus runner
//! - [`error`] - error codes generated from `params/metadata.json`
//!
//! # Example
//!
//! ```
//! use trit_curl::curl::{hash, Sponge};
//! use trit_curl::TritDigest;
//!
//! assert_eq!(hash(&[0; 243]).unwrap(), TritDigest::zero());
//!
//! let digest = hash(&[2; 243]).unwrap();
//! assert_eq!(digest.to_string(), format!("{}{}", "2".repeat(27), "0".repeat(216)));
//!
//! let mut sponge = Sponge::new();
//! sponge.absorb(&[0, 1, 2]).unwrap();
//! assert_eq!(sponge.squeeze().len(), 243);
//! ```
//!
//! The construction is experimental and not constant-time. It makes no
//! security claim.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod curl;
pub mod error;
pub mod trit;

// Re-export commonly used types
pub use curl::{
    hash, hash_padded, IndexTable, Sponge, SpongeConfig, SubstitutionRule, SubstitutionTable,
};
pub use error::{CurlResult, ErrorCode};
pub use trit::{Trit, TritDigest};
