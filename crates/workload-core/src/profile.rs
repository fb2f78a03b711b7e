//! Named test-data profiles.

use crate::config::ConfigError;
use crate::key::KeyKind;
use serde::{Deserialize, Serialize};

/// Test-data shape: primary key type and the number of rows to insert.
///
/// | profile | key            | rows   |
/// |---------|----------------|--------|
/// | small   | `INTEGER`      | 700    |
/// | large   | `CHAR(40)`     | 10 000 |
/// | huge    | `CHAR(200)`    | 20 000 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Small,
    Large,
    Huge,
}

impl Profile {
    /// All profiles, in increasing size.
    pub const ALL: [Profile; 3] = [Profile::Small, Profile::Large, Profile::Huge];

    /// Key type declared for the `id` column.
    pub fn key_kind(&self) -> KeyKind {
        match self {
            Profile::Small => KeyKind::Integer,
            Profile::Large => KeyKind::FixedText { width: 40 },
            Profile::Huge => KeyKind::FixedText { width: 200 },
        }
    }

    /// Declared character width of a text key, `None` for integer keys.
    pub fn key_width(&self) -> Option<usize> {
        match self.key_kind() {
            KeyKind::Integer => None,
            KeyKind::FixedText { width } => Some(width),
        }
    }

    /// Number of distinct identifiers inserted over a run.
    pub fn row_count(&self) -> u64 {
        match self {
            Profile::Small => 700,
            Profile::Large => 10_000,
            Profile::Huge => 20_000,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Small => "small",
            Profile::Large => "large",
            Profile::Huge => "huge",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Profile::Small),
            "large" => Ok(Profile::Large),
            "huge" => Ok(Profile::Huge),
            _ => Err(ConfigError::UnknownProfile(s.to_string())),
        }
    }
}
