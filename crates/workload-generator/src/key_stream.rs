//! Insertion order of the identifier universe.

use rand::seq::SliceRandom;
use rand::Rng;
use workload_core::KeyOrdering;

/// Every identifier in `0..row_count`, once, in the requested order.
///
/// Only [`KeyOrdering::Shuffled`] draws from `rng`.
pub fn build_key_stream<R: Rng>(
    row_count: u64,
    ordering: KeyOrdering,
    rng: &mut R,
) -> Vec<u64> {
    let mut ids: Vec<u64> = (0..row_count).collect();
    match ordering {
        KeyOrdering::Shuffled => ids.shuffle(rng),
        KeyOrdering::Ascending => {}
        KeyOrdering::Descending => ids.reverse(),
    }
    ids
}
