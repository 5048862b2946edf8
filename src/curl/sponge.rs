//! Curl sponge: absorb, transform, squeeze.

use super::{transform, IndexTable, SpongeConfig, SpongeState, HASH_LENGTH};
use crate::error::CurlResult;
use crate::trit::{trits_from_u8, Trit, TritDigest};
use tracing::{debug, trace};

/// Sponge over one exclusively owned [`SpongeState`].
///
/// The index table is borrowed; [`Sponge::new`] uses the process-wide
/// [`IndexTable::shared`], [`Sponge::with_table`] takes any table.
#[derive(Debug, Clone)]
pub struct Sponge<'t> {
    state: SpongeState,
    table: &'t IndexTable,
    config: SpongeConfig,
}

impl Sponge<'static> {
    /// Zero-state sponge with the reference configuration.
    pub fn new() -> Self {
        Self::with_config(SpongeConfig::reference())
    }

    /// Zero-state sponge with the given configuration.
    pub fn with_config(config: SpongeConfig) -> Self {
        Self::with_table(IndexTable::shared(), config)
    }
}

impl Default for Sponge<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Sponge<'t> {
    /// Zero-state sponge over an explicit index table.
    pub fn with_table(table: &'t IndexTable, config: SpongeConfig) -> Self {
        Self {
            state: SpongeState::new(),
            table,
            config,
        }
    }

    /// The configuration this sponge was built with.
    pub fn config(&self) -> &SpongeConfig {
        &self.config
    }

    /// The full internal state.
    pub fn state(&self) -> &SpongeState {
        &self.state
    }

    /// Absorb raw trit values.
    ///
    /// The whole input is validated before any block is written: on
    /// `E100_InvalidTritValue` the state is exactly as it was before the call.
    pub fn absorb(&mut self, input: &[u8]) -> CurlResult<()> {
        let trits = match trits_from_u8(input) {
            Ok(trits) => trits,
            Err(e) => {
                debug!(error = %e, len = input.len(), "rejected absorb input");
                return Err(e);
            }
        };
        self.absorb_trits(&trits);
        Ok(())
    }

    /// Absorb validated trits.
    ///
    /// The (possibly padded) input is cut into blocks of at most
    /// [`HASH_LENGTH`] trits. Each block overwrites the leading positions of
    /// the state and is followed by one transform. Empty unpadded input
    /// leaves the state untouched.
    pub fn absorb_trits(&mut self, input: &[Trit]) {
        let input = self.config.padding.apply(input);
        for (n, block) in input.chunks(HASH_LENGTH).enumerate() {
            self.state.write_rate(block);
            self.transform();
            trace!(block = n, len = block.len(), "absorbed block");
        }
    }

    /// Run one transform over the whole state.
    pub fn transform(&mut self) {
        transform(&mut self.state, self.table, &self.config.substitution);
    }

    /// Run `n` transforms back to back.
    pub fn transform_n(&mut self, n: usize) {
        for _ in 0..n {
            self.transform();
        }
    }

    /// The leading [`HASH_LENGTH`] trits of the state.
    ///
    /// This is a view, not a copy, and does not advance the sponge: squeezing
    /// twice without absorbing or transforming in between returns the same
    /// trits. Use [`Sponge::digest`] for an owned value.
    pub fn squeeze(&self) -> &[Trit] {
        self.state.rate()
    }

    /// Owned copy of [`Sponge::squeeze`].
    pub fn digest(&self) -> TritDigest {
        let mut out = [Trit::ZERO; HASH_LENGTH];
        out.copy_from_slice(self.squeeze());
        TritDigest::from(out)
    }

    /// Return to the all-zero state, keeping table and configuration.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

/// Reference Curl hash: fresh sponge, absorb `input` unpadded, squeeze.
///
/// Returns `E100_InvalidTritValue` for the first element outside {0, 1, 2}.
pub fn hash(input: &[u8]) -> CurlResult<TritDigest> {
    hash_with(input, SpongeConfig::reference())
}

/// Hardened Curl hash with `1 0*` padding of the final block.
///
/// Not interchangeable with [`hash`]: every input, including inputs whose
/// reference digests coincide, yields a different digest.
pub fn hash_padded(input: &[u8]) -> CurlResult<TritDigest> {
    hash_with(input, SpongeConfig::hardened())
}

/// One-shot hash under an arbitrary configuration.
pub fn hash_with(input: &[u8], config: SpongeConfig) -> CurlResult<TritDigest> {
    let mut sponge = Sponge::with_config(config);
    sponge.absorb(input)?;
    Ok(sponge.digest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::Padding;
    use crate::error::ErrorCode;

    #[test]
    fn test_hash_empty_is_zero() {
        assert_eq!(hash(&[]), Ok(TritDigest::zero()));
    }

    #[test]
    fn test_hash_uniform_blocks() {
        // Only the rate is overwritten; the zero capacity breaks uniformity.
        assert_eq!(hash(&[0; HASH_LENGTH]), Ok(TritDigest::zero()));

        let twos = hash(&[2; HASH_LENGTH]).unwrap().to_vec();
        assert!(twos[..27].iter().all(|&t| t == 2));
        assert!(twos[27..].iter().all(|&t| t == 0));

        let ones = hash(&[1; HASH_LENGTH]).unwrap().to_vec();
        assert!((0..3u8).all(|v| ones.contains(&v)));
    }

    #[test]
    fn test_absorb_rejects_without_mutation() {
        let mut sponge = Sponge::new();
        sponge.absorb(&[1, 2, 0, 1]).unwrap();
        let before = sponge.state().clone();

        let mut input = vec![2u8; 600];
        input[450] = 3;
        assert_eq!(
            sponge.absorb(&input),
            Err(ErrorCode::E100_InvalidTritValue(450, 3))
        );
        assert_eq!(sponge.state(), &before);
    }

    #[test]
    fn test_squeeze_is_repeatable() {
        let mut sponge = Sponge::new();
        sponge.absorb(&[2, 1, 0]).unwrap();
        let first = sponge.squeeze().to_vec();
        let second = sponge.squeeze().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_block_keeps_tail() {
        // Trailing zeros of an unpadded message vanish into the zero state.
        assert_eq!(hash(&[1]), hash(&[1, 0]));
        assert_ne!(hash_padded(&[1]), hash_padded(&[1, 0]));
    }

    #[test]
    fn test_split_absorb_on_block_boundary() {
        let input: Vec<u8> = (0..2 * HASH_LENGTH).map(|i| (i % 3) as u8).collect();

        let mut split = Sponge::new();
        split.absorb(&input[..HASH_LENGTH]).unwrap();
        split.absorb(&input[HASH_LENGTH..]).unwrap();

        assert_eq!(Ok(split.digest()), hash(&input));
    }

    #[test]
    fn test_reset() {
        let mut sponge = Sponge::with_config(SpongeConfig::hardened());
        sponge.absorb(&[1, 1, 2]).unwrap();
        sponge.reset();
        assert_eq!(sponge.digest(), TritDigest::zero());
        assert_eq!(sponge.config().padding, Padding::OneZeros);
    }

    #[test]
    fn test_explicit_table() {
        let table = IndexTable::build();
        let mut sponge = Sponge::with_table(&table, SpongeConfig::reference());
        sponge.absorb(&[0, 1, 2, 2, 1, 0]).unwrap();
        assert_eq!(Ok(sponge.digest()), hash(&[0, 1, 2, 2, 1, 0]));
    }

    #[test]
    fn test_transform_n() {
        let mut a = Sponge::new();
        let mut b = Sponge::new();
        a.absorb(&[1, 2]).unwrap();
        b.absorb(&[1, 2]).unwrap();
        a.transform_n(3);
        b.transform();
        b.transform();
        b.transform();
        assert_eq!(a.squeeze(), b.squeeze());
    }
}
