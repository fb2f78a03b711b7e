//! Workload configuration.
//!
//! A run is described by a [`WorkloadConfig`], either built in code or loaded
//! from YAML:
//!
//! ```yaml
//! profile: large
//! row_count: 500
//! deletion_frequency: 0.25
//! live_floor: 100
//! ordering: shuffled
//! key_padding: unpadded
//! seed: 42
//! ```
//!
//! Only `profile` is required.

use crate::key::{KeyPadding, KeyRenderer};
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Per-attempt probability of a delete within a burst.
pub const DEFAULT_DELETION_FREQUENCY: f64 = 0.25;

/// Live set size a deletion burst never goes below.
pub const DEFAULT_LIVE_FLOOR: usize = 100;

/// Configuration errors. All of these are fatal and raised before any
/// statement is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Profile name that is not `small`, `large` or `huge`
    #[error("Unknown profile: {0} (expected small, large or huge)")]
    UnknownProfile(String),

    /// Deletion frequency outside `[0, 1]`
    #[error("Invalid deletion frequency: {0} (expected a value between 0 and 1)")]
    InvalidDeletionFrequency(f64),

    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Order in which the key stream visits identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyOrdering {
    /// Uniformly random permutation
    #[default]
    Shuffled,
    Ascending,
    Descending,
}

/// Everything needed to generate one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkloadConfig {
    pub profile: Profile,

    /// Overrides the profile's row count
    #[serde(default)]
    pub row_count: Option<u64>,

    #[serde(default = "default_deletion_frequency")]
    pub deletion_frequency: f64,

    /// Bursts only delete while the live set is larger than this
    #[serde(default = "default_live_floor")]
    pub live_floor: usize,

    #[serde(default)]
    pub ordering: KeyOrdering,

    #[serde(default)]
    pub key_padding: KeyPadding,

    /// RNG seed; a fresh one is drawn from system entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_deletion_frequency() -> f64 {
    DEFAULT_DELETION_FREQUENCY
}

fn default_live_floor() -> usize {
    DEFAULT_LIVE_FLOOR
}

impl WorkloadConfig {
    /// Configuration with every knob at the profile's defaults.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            row_count: None,
            deletion_frequency: DEFAULT_DELETION_FREQUENCY,
            live_floor: DEFAULT_LIVE_FLOOR,
            ordering: KeyOrdering::default(),
            key_padding: KeyPadding::default(),
            seed: None,
        }
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: WorkloadConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.deletion_frequency) {
            return Err(ConfigError::InvalidDeletionFrequency(
                self.deletion_frequency,
            ));
        }
        Ok(())
    }

    pub fn with_row_count(mut self, row_count: u64) -> Self {
        self.row_count = Some(row_count);
        self
    }

    pub fn with_deletion_frequency(mut self, deletion_frequency: f64) -> Self {
        self.deletion_frequency = deletion_frequency;
        self
    }

    pub fn with_live_floor(mut self, live_floor: usize) -> Self {
        self.live_floor = live_floor;
        self
    }

    pub fn with_ordering(mut self, ordering: KeyOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_key_padding(mut self, key_padding: KeyPadding) -> Self {
        self.key_padding = key_padding;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of INSERT statements the run emits.
    pub fn effective_row_count(&self) -> u64 {
        self.row_count.unwrap_or_else(|| self.profile.row_count())
    }

    pub fn key_renderer(&self) -> KeyRenderer {
        KeyRenderer::new(self.profile.key_kind(), self.key_padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkloadConfig::new(Profile::Huge);
        assert_eq!(config.effective_row_count(), 20_000);
        assert_eq!(config.deletion_frequency, 0.25);
        assert_eq!(config.live_floor, 100);
        assert_eq!(config.ordering, KeyOrdering::Shuffled);
        assert_eq!(config.key_padding, KeyPadding::Unpadded);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_yaml_minimal() {
        let config = WorkloadConfig::from_yaml("profile: small\n").unwrap();
        assert_eq!(config, WorkloadConfig::new(Profile::Small));
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
profile: large
row_count: 500
deletion_frequency: 0.5
live_floor: 10
ordering: descending
key_padding: zero_padded
seed: 42
"#;
        let config = WorkloadConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.profile, Profile::Large);
        assert_eq!(config.effective_row_count(), 500);
        assert_eq!(config.deletion_frequency, 0.5);
        assert_eq!(config.live_floor, 10);
        assert_eq!(config.ordering, KeyOrdering::Descending);
        assert_eq!(config.key_padding, KeyPadding::ZeroPadded);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_from_yaml_unknown_profile() {
        let err = WorkloadConfig::from_yaml("profile: medium\n").unwrap_err();
        assert!(matches!(err, ConfigError::YamlError(_)));
    }

    #[test]
    fn test_from_yaml_unknown_field() {
        let err = WorkloadConfig::from_yaml("profile: small\nrows: 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::YamlError(_)));
    }

    #[test]
    fn test_invalid_deletion_frequency() {
        let err =
            WorkloadConfig::from_yaml("profile: small\ndeletion_frequency: 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDeletionFrequency(f) if f == 1.5));

        let config = WorkloadConfig::new(Profile::Small).with_deletion_frequency(f64::NAN);
        assert!(config.validate().is_err());

        let config = WorkloadConfig::new(Profile::Small).with_deletion_frequency(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("workload.yaml");
        fs::write(&path, "profile: huge\nseed: 7\n").unwrap();

        let config = WorkloadConfig::from_file(&path).unwrap();
        assert_eq!(config.profile, Profile::Huge);
        assert_eq!(config.seed, Some(7));

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            WorkloadConfig::from_file(&missing),
            Err(ConfigError::IoError(_))
        ));
    }
}
