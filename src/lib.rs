//! pk-index-gen: randomized SQL workloads for primary-key index tests.
//!
//! The binary is a thin wrapper around these modules:
//!
//! - [`cli`] - argument definitions and config layering
//! - [`script`] - writes a statement stream as a SQL script
//! - [`generate`] - the `generate` command
//! - [`verify`] - the `verify` command, replaying a script through the
//!   workload invariant checks

pub mod cli;
pub mod generate;
pub mod script;
pub mod verify;

pub use cli::{Cli, Commands, GenerateArgs, VerifyArgs};
pub use generate::{generate_script, run_generate, GenerateSummary};
pub use script::{write_script, ScriptMetrics};
pub use verify::{run_verify, verify_script};
