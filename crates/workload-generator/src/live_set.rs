//! Identifiers currently inserted and not yet deleted.

use rand::Rng;

/// Unordered set of live identifiers with O(1) uniform random removal.
///
/// Callers only insert identifiers that are not already present.
#[derive(Debug, Clone, Default)]
pub struct LiveSet {
    ids: Vec<u64>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, id: u64) {
        self.ids.push(id);
    }

    /// Remove and return a member chosen uniformly at random.
    pub fn remove_random<R: Rng>(&mut self, rng: &mut R) -> Option<u64> {
        if self.ids.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.ids.len());
        Some(self.ids.swap_remove(idx))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }
}
