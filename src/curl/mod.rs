//! Curl ternary sponge hash.
//!
//! The state is [`STATE_WIDTH`] trits. Input is absorbed [`HASH_LENGTH`]
//! trits at a time into the leading (rate) part of the state, each block
//! followed by one [`transform`] of [`NUMBER_OF_ROUNDS`] rounds. The digest is
//! the leading [`HASH_LENGTH`] trits.
//!
//! Each round reads every output position `i` from the two source positions
//! `table[i]` and `table[i + 1]` of the [`IndexTable`] and combines them with
//! the [`SubstitutionTable`].
//!
//! The reference absorb does not pad: a short final block leaves the tail of
//! the rate window untouched. [`Padding::OneZeros`] is the hardened variant
//! and produces different digests; see [`hash_padded`].

mod config;
mod index;
mod sponge;
mod state;
mod substitution;
mod transform;

pub use config::{Padding, SpongeConfig};
pub use index::IndexTable;
pub use sponge::{hash, hash_padded, hash_with, Sponge};
pub use state::SpongeState;
pub use substitution::{substitute, SubstitutionRule, SubstitutionTable};
pub use transform::{transform, transform_with_trace};

// Include generated parameters
include!(concat!(env!("OUT_DIR"), "/params_generated.rs"));

/// Build a fresh index table.
///
/// Prefer [`IndexTable::shared`] outside of tests; the table never changes.
pub fn build_index_table() -> IndexTable {
    IndexTable::build()
}
