//! Permutation-offset table driving the transform.

use super::{INDEX_PIVOT, INDEX_STEP_DOWN, INDEX_STEP_UP, STATE_WIDTH};
use std::sync::OnceLock;

const _: () = assert!(
    recurrence_in_range(INDEX_STEP_UP, INDEX_STEP_DOWN, INDEX_PIVOT, STATE_WIDTH),
    "index recurrence leaves the state"
);

/// Whether every step of the index recurrence lands in `[0, width)`.
///
/// An up step starts below `pivot`, so it needs `pivot + step_up <= width`.
/// A down step starts at `pivot` or above, so it needs `pivot >= step_down`.
pub(crate) const fn recurrence_in_range(
    step_up: usize,
    step_down: usize,
    pivot: usize,
    width: usize,
) -> bool {
    pivot >= step_down && pivot + step_up <= width
}

/// Source positions for every output position of a round.
///
/// `STATE_WIDTH + 1` entries, each in `[0, STATE_WIDTH)`. Output position `i`
/// reads `offsets[i]` and `offsets[i + 1]`. The sequence starts at 0 and
/// steps by `+INDEX_STEP_UP` while below `INDEX_PIVOT`, else by
/// `-INDEX_STEP_DOWN`, which walks every state position once.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexTable {
    offsets: [usize; STATE_WIDTH + 1],
}

impl IndexTable {
    /// Compute the table.
    pub fn build() -> Self {
        let mut offsets = [0usize; STATE_WIDTH + 1];
        for i in 0..STATE_WIDTH {
            let prev = offsets[i];
            offsets[i + 1] = if prev < INDEX_PIVOT {
                prev + INDEX_STEP_UP
            } else {
                prev - INDEX_STEP_DOWN
            };
        }
        Self { offsets }
    }

    /// Process-wide table, built on first use.
    pub fn shared() -> &'static IndexTable {
        static TABLE: OnceLock<IndexTable> = OnceLock::new();
        TABLE.get_or_init(IndexTable::build)
    }

    /// Source positions `(offsets[i], offsets[i + 1])` for output position `i`.
    #[inline]
    pub fn sources(&self, i: usize) -> (usize, usize) {
        (self.offsets[i], self.offsets[i + 1])
    }

    /// All `STATE_WIDTH + 1` offsets.
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of offsets (`STATE_WIDTH + 1`).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Debug for IndexTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexTable")
            .field("len", &self.offsets.len())
            .field("head", &&self.offsets[..6])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_values() {
        let table = IndexTable::build();
        assert_eq!(&table.as_slice()[..6], &[0, 364, 728, 363, 727, 362]);
        assert_eq!(table.as_slice()[STATE_WIDTH], 0);
    }

    #[test]
    fn test_recurrence() {
        let table = IndexTable::build();
        let offsets = table.as_slice();
        assert_eq!(offsets[0], 0);
        for i in 0..STATE_WIDTH {
            let expected = if offsets[i] < 365 {
                offsets[i] + 364
            } else {
                offsets[i] - 365
            };
            assert_eq!(offsets[i + 1], expected, "offset {}", i + 1);
        }
    }

    #[test]
    fn test_visits_every_position() {
        let table = IndexTable::build();
        let mut seen = vec![false; STATE_WIDTH];
        for &o in &table.as_slice()[..STATE_WIDTH] {
            assert!(o < STATE_WIDTH);
            assert!(!seen[o], "position {} visited twice", o);
            seen[o] = true;
        }
    }

    #[test]
    fn test_recurrence_bounds() {
        assert!(recurrence_in_range(
            INDEX_STEP_UP,
            INDEX_STEP_DOWN,
            INDEX_PIVOT,
            STATE_WIDTH
        ));
        assert!(recurrence_in_range(364, 365, 365, 729));
        // A pivot below the down step would subtract past zero.
        assert!(!recurrence_in_range(364, 365, 300, 729));
        // A pivot too high would step past the end of the state.
        assert!(!recurrence_in_range(364, 365, 366, 729));
    }

    #[test]
    fn test_shared_matches_build() {
        assert_eq!(IndexTable::shared(), &IndexTable::build());
        assert!(std::ptr::eq(IndexTable::shared(), IndexTable::shared()));
    }
}
