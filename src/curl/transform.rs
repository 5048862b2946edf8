//! The Curl round function.

use super::{IndexTable, SpongeState, SubstitutionTable, NUMBER_OF_ROUNDS, STATE_WIDTH};
use crate::trit::Trit;

/// One round: every output position `i` becomes
/// `sub(prev[table[i]], prev[table[i + 1]])`.
fn round(state: &mut SpongeState, table: &IndexTable, substitution: &SubstitutionTable) {
    let (prev, next) = state.split();
    for (i, out) in next.iter_mut().enumerate() {
        let (a, b) = table.sources(i);
        *out = substitution.apply(prev[a], prev[b]);
    }
    state.swap();
}

/// Apply [`NUMBER_OF_ROUNDS`] rounds to `state` in place.
pub fn transform(state: &mut SpongeState, table: &IndexTable, substitution: &SubstitutionTable) {
    for _ in 0..NUMBER_OF_ROUNDS {
        round(state, table, substitution);
    }
}

/// [`transform`], additionally returning the state after each round.
///
/// The last entry equals the final state.
pub fn transform_with_trace(
    state: &mut SpongeState,
    table: &IndexTable,
    substitution: &SubstitutionTable,
) -> Vec<[Trit; STATE_WIDTH]> {
    let mut traces = Vec::with_capacity(NUMBER_OF_ROUNDS);
    for _ in 0..NUMBER_OF_ROUNDS {
        round(state, table, substitution);
        traces.push(*state.as_trits());
    }
    traces
}
