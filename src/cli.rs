//! CLI argument definitions for pk-index-gen.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use workload_core::{ConfigError, KeyOrdering, KeyPadding, Profile, WorkloadConfig};

/// Profile used when neither the command line nor a config file names one.
pub const DEFAULT_PROFILE: Profile = Profile::Huge;

#[derive(Parser)]
#[command(name = "pk-index-gen")]
#[command(about = "Generate randomized SQL insert/delete workloads for primary-key index tests")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a workload script
    Generate(GenerateArgs),

    /// Replay a workload script and check its invariants
    Verify(VerifyArgs),
}

/// Key ordering choice for CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderingChoice {
    Shuffled,
    Ascending,
    Descending,
}

impl From<OrderingChoice> for KeyOrdering {
    fn from(choice: OrderingChoice) -> Self {
        match choice {
            OrderingChoice::Shuffled => KeyOrdering::Shuffled,
            OrderingChoice::Ascending => KeyOrdering::Ascending,
            OrderingChoice::Descending => KeyOrdering::Descending,
        }
    }
}

/// Key padding choice for CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PaddingChoice {
    Unpadded,
    ZeroPadded,
}

impl From<PaddingChoice> for KeyPadding {
    fn from(choice: PaddingChoice) -> Self {
        match choice {
            PaddingChoice::Unpadded => KeyPadding::Unpadded,
            PaddingChoice::ZeroPadded => KeyPadding::ZeroPadded,
        }
    }
}

/// Arguments for generating a workload script.
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateArgs {
    /// Workload profile: small, large or huge (default: huge)
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// YAML workload config file; flags given on the command line take precedence
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Random seed for a reproducible workload (default: drawn from system entropy)
    #[arg(long, env = "PK_INDEX_SEED")]
    pub seed: Option<u64>,

    /// Override the profile's row count
    #[arg(long)]
    pub row_count: Option<u64>,

    /// Per-attempt delete probability within a burst (default: 0.25)
    #[arg(long)]
    pub deletion_frequency: Option<f64>,

    /// Bursts only delete while more than this many rows are live (default: 100)
    #[arg(long)]
    pub live_floor: Option<usize>,

    /// Insertion order of the key stream
    #[arg(long, value_enum)]
    pub ordering: Option<OrderingChoice>,

    /// Padding of text key literals
    #[arg(long, value_enum)]
    pub key_padding: Option<PaddingChoice>,

    /// Output file (default: stdout)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Build the workload configuration: config file first, then flags.
    pub fn resolve_config(&self) -> Result<WorkloadConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => WorkloadConfig::from_file(path)?,
            None => WorkloadConfig::new(DEFAULT_PROFILE),
        };

        if let Some(name) = &self.profile {
            config.profile = name.parse()?;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(rows) = self.row_count {
            config.row_count = Some(rows);
        }
        if let Some(freq) = self.deletion_frequency {
            config.deletion_frequency = freq;
        }
        if let Some(floor) = self.live_floor {
            config.live_floor = floor;
        }
        if let Some(ordering) = self.ordering {
            config.ordering = ordering.into();
        }
        if let Some(padding) = self.key_padding {
            config.key_padding = padding.into();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for verifying a workload script.
#[derive(Args, Clone, Debug, Default)]
pub struct VerifyArgs {
    /// Script to verify (default: stdin)
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Expect the row count of this profile
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// Expect exactly this many inserts (takes precedence over --profile)
    #[arg(long)]
    pub expect_rows: Option<u64>,

    /// Fail if a delete leaves fewer live rows than this
    #[arg(long)]
    pub live_floor: Option<usize>,

    /// Print the report as a single JSON line
    #[arg(long)]
    pub json: bool,
}

impl VerifyArgs {
    /// Insert count the script must have, if any.
    pub fn expected_rows(&self) -> Result<Option<u64>, ConfigError> {
        if let Some(rows) = self.expect_rows {
            return Ok(Some(rows));
        }
        self.profile
            .as_deref()
            .map(|name| name.parse::<Profile>().map(|p| p.row_count()))
            .transpose()
    }
}
