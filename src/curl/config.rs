//! Sponge configuration.
//!
//! The reference configuration reproduces existing digests bit for bit. The
//! hardened configuration pads every absorbed message and is not compatible
//! with reference digests.

use super::{SubstitutionRule, SubstitutionTable, HASH_LENGTH};
use crate::trit::Trit;
use std::borrow::Cow;

/// How the final block of an absorbed message is completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Padding {
    /// No padding. A short final block only overwrites its own length; the
    /// rest of the rate window keeps whatever the previous transform left.
    #[default]
    Unpadded,
    /// Append a single `1` trit, then `0` trits up to the next multiple of
    /// [`HASH_LENGTH`]. Every message, including the empty one, absorbs at
    /// least one full block.
    OneZeros,
}

impl Padding {
    /// The message as it is fed to the block loop.
    pub fn apply<'a>(&self, input: &'a [Trit]) -> Cow<'a, [Trit]> {
        match self {
            Padding::Unpadded => Cow::Borrowed(input),
            Padding::OneZeros => {
                let padded_len = (input.len() / HASH_LENGTH + 1) * HASH_LENGTH;
                let mut padded = Vec::with_capacity(padded_len);
                padded.extend_from_slice(input);
                padded.push(Trit::ONE);
                padded.resize(padded_len, Trit::ZERO);
                Cow::Owned(padded)
            }
        }
    }
}

/// Per-sponge configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpongeConfig {
    /// Substitution applied in every round.
    pub substitution: SubstitutionTable,
    /// Final-block handling for each absorb call.
    pub padding: Padding,
}

impl SpongeConfig {
    /// Canonical substitution, unpadded absorb.
    pub const fn reference() -> Self {
        Self {
            substitution: SubstitutionTable::CANONICAL,
            padding: Padding::Unpadded,
        }
    }

    /// Canonical substitution, `1 0*` padding.
    pub const fn hardened() -> Self {
        Self {
            substitution: SubstitutionTable::CANONICAL,
            padding: Padding::OneZeros,
        }
    }

    /// Replace the substitution table.
    pub const fn with_substitution(mut self, substitution: SubstitutionTable) -> Self {
        self.substitution = substitution;
        self
    }

    /// Use the table selected by a named rule.
    pub const fn with_rule(self, rule: SubstitutionRule) -> Self {
        self.with_substitution(rule.table())
    }

    /// Replace the padding mode.
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for SpongeConfig {
    fn default() -> Self {
        Self::reference()
    }
}
