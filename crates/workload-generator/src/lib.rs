//! Workload generator for primary-key index stress tests.
//!
//! This crate provides the [`WorkloadGenerator`], which turns a
//! [`WorkloadConfig`](workload_core::WorkloadConfig) into a stream of SQL
//! statements: one `CREATE TABLE`, an `INSERT` for every identifier of the key
//! stream with random `DELETE` bursts in between, and a final `QUIT;`.
//!
//! # Architecture
//!
//! ```text
//! WorkloadConfig
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  WorkloadGenerator   │
//! │                      │
//! │  - rng (StdRng)      │
//! │  - key stream        │
//! │  - live set          │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!   Statement (CREATE / INSERT / DELETE / QUIT)
//!            │
//!            ▼
//!        Replayer ──▶ ReplayReport
//! ```
//!
//! # Example
//!
//! ```rust
//! use workload_core::{Profile, Statement, WorkloadConfig};
//! use workload_generator::WorkloadGenerator;
//!
//! let config = WorkloadConfig::new(Profile::Small).with_seed(42);
//! let generator = WorkloadGenerator::new(config).unwrap();
//!
//! let inserts = generator
//!     .filter(|stmt| matches!(stmt, Statement::Insert { .. }))
//!     .count();
//! assert_eq!(inserts, 700);
//! ```
//!
//! The [`Replayer`] checks a statement sequence, for example one read back
//! from a script file, against the invariants every generated workload holds.

pub mod generator;
pub mod key_stream;
pub mod live_set;
pub mod replay;
pub mod row_value;

// Re-exports for convenience
pub use generator::{GenerationStats, WorkloadGenerator};
pub use key_stream::build_key_stream;
pub use live_set::LiveSet;
pub use replay::{ReplayError, ReplayReport, Replayer};
pub use row_value::{generate_row_value, is_valid_row_value, MAX_VALUE_LEN, MIN_VALUE_LEN};
