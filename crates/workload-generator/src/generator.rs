//! Main workload generator producing the statement stream.

use crate::key_stream::build_key_stream;
use crate::live_set::LiveSet;
use crate::row_value::generate_row_value;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::iter::FusedIterator;
use tracing::debug;
use workload_core::{ConfigError, KeyRenderer, Statement, WorkloadConfig};

/// Counters for the statements produced so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub inserts: u64,
    pub deletes: u64,
    pub live: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Schema,
    Insert,
    Burst,
    Done,
}

/// Iterator over the statements of one workload run.
///
/// The key stream is built up front; everything else is produced lazily, one
/// statement per `next()` call. Random draws happen in a fixed order
/// (shuffle, then per insert: row value, burst draws, delete picks), so a
/// given seed always yields the same statements.
pub struct WorkloadGenerator {
    config: WorkloadConfig,
    keys: KeyRenderer,
    seed: u64,
    rng: StdRng,
    key_stream: std::vec::IntoIter<u64>,
    live: LiveSet,
    phase: Phase,
    stats: GenerationStats,
}

impl WorkloadGenerator {
    /// Create a generator for `config`.
    ///
    /// Fails if the configuration is invalid. When `config.seed` is unset a
    /// seed is drawn from system entropy; [`seed`](Self::seed) reports it.
    pub fn new(config: WorkloadConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().next_u64());
        let mut rng = StdRng::seed_from_u64(seed);
        let row_count = config.effective_row_count();

        debug!(
            "Building {} key stream: {} rows, ordering={:?}, seed={}",
            config.profile, row_count, config.ordering, seed
        );
        let key_stream = build_key_stream(row_count, config.ordering, &mut rng);

        Ok(Self {
            keys: config.key_renderer(),
            live: LiveSet::with_capacity(key_stream.len()),
            key_stream: key_stream.into_iter(),
            seed,
            rng,
            config,
            phase: Phase::Schema,
            stats: GenerationStats::default(),
        })
    }

    /// Seed actually used for this run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Identifiers inserted and not yet deleted.
    pub fn live_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.live.iter()
    }

    fn next_delete(&mut self) -> Option<Statement> {
        if self.live.len() <= self.config.live_floor {
            return None;
        }
        if self.rng.random::<f64>() >= self.config.deletion_frequency {
            return None;
        }
        let id = self.live.remove_random(&mut self.rng)?;
        self.stats.deletes += 1;
        self.stats.live = self.live.len();
        Some(Statement::Delete {
            key: self.keys.literal(id),
        })
    }
}

impl Iterator for WorkloadGenerator {
    type Item = Statement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Schema => {
                    self.phase = Phase::Insert;
                    return Some(Statement::CreateTable {
                        id_column: self.keys.kind(),
                    });
                }
                Phase::Burst => match self.next_delete() {
                    Some(stmt) => return Some(stmt),
                    None => self.phase = Phase::Insert,
                },
                Phase::Insert => {
                    let Some(id) = self.key_stream.next() else {
                        self.phase = Phase::Done;
                        debug!(
                            "Workload complete: {} inserts, {} deletes, {} live",
                            self.stats.inserts, self.stats.deletes, self.stats.live
                        );
                        return Some(Statement::Quit);
                    };
                    let value = generate_row_value(&mut self.rng);
                    self.live.insert(id);
                    self.stats.inserts += 1;
                    self.stats.live = self.live.len();
                    self.phase = Phase::Burst;
                    return Some(Statement::Insert {
                        key: self.keys.literal(id),
                        value,
                    });
                }
                Phase::Done => return None,
            }
        }
    }
}

impl FusedIterator for WorkloadGenerator {}
