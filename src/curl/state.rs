//! Double-buffered sponge state.

use super::{HASH_LENGTH, STATE_WIDTH};
use crate::error::{CurlResult, ErrorCode};
use crate::trit::{trits_to_string, Trit};
use std::fmt;

/// The [`STATE_WIDTH`]-trit sponge state.
///
/// Two fixed buffers are held; the front one is the live state and the back
/// one receives the next round's output, after which they swap roles. A
/// round therefore always reads a complete snapshot of the previous round.
#[derive(Clone)]
pub struct SpongeState {
    buffers: [[Trit; STATE_WIDTH]; 2],
    front: usize,
}

impl SpongeState {
    /// All-zero state.
    pub fn new() -> Self {
        Self::uniform(Trit::ZERO)
    }

    /// State holding `value` at every position.
    pub fn uniform(value: Trit) -> Self {
        Self {
            buffers: [[value; STATE_WIDTH]; 2],
            front: 0,
        }
    }

    /// State holding exactly the given trits.
    ///
    /// Returns `E102_WrongLength` unless `trits.len() == STATE_WIDTH`.
    pub fn from_trits(trits: &[Trit]) -> CurlResult<Self> {
        if trits.len() != STATE_WIDTH {
            return Err(ErrorCode::E102_WrongLength(
                STATE_WIDTH as u64,
                trits.len() as u64,
            ));
        }
        let mut state = Self::new();
        state.buffers[0].copy_from_slice(trits);
        Ok(state)
    }

    /// The live state.
    #[inline]
    pub fn as_trits(&self) -> &[Trit; STATE_WIDTH] {
        &self.buffers[self.front]
    }

    /// The leading [`HASH_LENGTH`] trits.
    pub fn rate(&self) -> &[Trit] {
        &self.as_trits()[..HASH_LENGTH]
    }

    /// The trailing capacity trits.
    pub fn capacity(&self) -> &[Trit] {
        &self.as_trits()[HASH_LENGTH..]
    }

    /// Overwrite the leading `block.len()` positions; everything after is kept.
    ///
    /// Callers pass at most [`HASH_LENGTH`] trits.
    pub(crate) fn write_rate(&mut self, block: &[Trit]) {
        debug_assert!(block.len() <= HASH_LENGTH);
        self.buffers[self.front][..block.len()].copy_from_slice(block);
    }

    /// Zero the live state.
    pub fn reset(&mut self) {
        self.buffers[self.front] = [Trit::ZERO; STATE_WIDTH];
    }

    /// Returns `true` if every position holds `value`.
    pub fn is_uniform(&self, value: Trit) -> bool {
        self.as_trits().iter().all(|&t| t == value)
    }

    /// Borrow (front, back) for one round.
    pub(crate) fn split(&mut self) -> (&[Trit; STATE_WIDTH], &mut [Trit; STATE_WIDTH]) {
        let [first, second] = &mut self.buffers;
        if self.front == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    /// Promote the back buffer to live state.
    #[inline]
    pub(crate) fn swap(&mut self) {
        self.front ^= 1;
    }
}

impl Default for SpongeState {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SpongeState {
    fn eq(&self, other: &Self) -> bool {
        self.as_trits() == other.as_trits()
    }
}

impl Eq for SpongeState {}

impl fmt::Debug for SpongeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpongeState({})", trits_to_string(self.as_trits()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        let state = SpongeState::new();
        assert!(state.is_uniform(Trit::ZERO));
        assert_eq!(state.rate().len(), HASH_LENGTH);
        assert_eq!(state.capacity().len(), STATE_WIDTH - HASH_LENGTH);
    }

    #[test]
    fn test_write_rate_keeps_tail() {
        let mut state = SpongeState::uniform(Trit::TWO);
        state.write_rate(&[Trit::ONE; 5]);
        assert!(state.as_trits()[..5].iter().all(|&t| t == Trit::ONE));
        assert!(state.as_trits()[5..].iter().all(|&t| t == Trit::TWO));
    }

    #[test]
    fn test_swap_exposes_back_buffer() {
        let mut state = SpongeState::new();
        {
            let (front, back) = state.split();
            assert!(front.iter().all(|&t| t == Trit::ZERO));
            back[0] = Trit::ONE;
        }
        assert_eq!(state.as_trits()[0], Trit::ZERO);
        state.swap();
        assert_eq!(state.as_trits()[0], Trit::ONE);
    }

    #[test]
    fn test_from_trits_length() {
        assert_eq!(
            SpongeState::from_trits(&[Trit::ONE; 3]).map(|_| ()),
            Err(ErrorCode::E102_WrongLength(STATE_WIDTH as u64, 3))
        );
        let state = SpongeState::from_trits(&[Trit::ONE; STATE_WIDTH]).unwrap();
        assert!(state.is_uniform(Trit::ONE));
    }

    #[test]
    fn test_equality_ignores_back_buffer() {
        let mut a = SpongeState::new();
        a.split().1[7] = Trit::TWO;
        assert_eq!(a, SpongeState::new());
    }
}
