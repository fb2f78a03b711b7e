//! Core types for the pk-index-gen workload generator.
//!
//! This crate defines the shape of a generated workload:
//!
//! - [`Profile`] - the closed set of test-data shapes (`small`, `large`, `huge`)
//! - [`KeyRenderer`] - how an identifier becomes a SQL literal for a profile
//! - [`Statement`] - the statements a workload consists of, with their SQL text
//!   form and a parser for reading that text form back
//! - [`WorkloadConfig`] - the YAML/CLI configuration for a single run
//!
//! # Example
//!
//! ```rust
//! use workload_core::{KeyPadding, KeyRenderer, Profile, Statement};
//!
//! let profile: Profile = "large".parse().unwrap();
//! let keys = KeyRenderer::new(profile.key_kind(), KeyPadding::Unpadded);
//!
//! let stmt = Statement::Delete { key: keys.literal(7) };
//! assert_eq!(stmt.to_string(), "DELETE FROM test_pk_index WHERE id='7';");
//! ```

pub mod config;
pub mod key;
pub mod profile;
pub mod statement;

pub use config::{
    ConfigError, KeyOrdering, WorkloadConfig, DEFAULT_DELETION_FREQUENCY, DEFAULT_LIVE_FLOOR,
};
pub use key::{KeyKind, KeyLiteral, KeyPadding, KeyRenderer};
pub use profile::Profile;
pub use statement::{ParseError, Statement, TABLE_NAME, VALUE_COLUMN_WIDTH};
