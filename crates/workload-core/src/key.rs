//! Primary key types and their SQL literal form.

use serde::{Deserialize, Serialize};

/// Declared type of the `id` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// `INTEGER PRIMARY KEY`
    Integer,
    /// `CHAR(width) PRIMARY KEY`
    FixedText { width: usize },
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyKind::Integer => write!(f, "INTEGER"),
            KeyKind::FixedText { width } => write!(f, "CHAR({width})"),
        }
    }
}

/// How text keys are padded in emitted literals.
///
/// `Unpadded` writes the plain decimal form of the identifier, so the keys
/// are much shorter than the declared `CHAR(n)` width. That is how the
/// workloads have always been generated and stays the default.
/// `ZeroPadded` left-pads each text key with zeros to the full column width.
/// Integer keys are never padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPadding {
    #[default]
    Unpadded,
    ZeroPadded,
}

/// SQL literal of a single key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyLiteral {
    Integer(u64),
    Text(String),
}

impl std::fmt::Display for KeyLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyLiteral::Integer(id) => write!(f, "{id}"),
            KeyLiteral::Text(s) => write!(f, "'{s}'"),
        }
    }
}

/// Turns identifiers into key literals for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRenderer {
    kind: KeyKind,
    padding: KeyPadding,
}

impl KeyRenderer {
    pub fn new(kind: KeyKind, padding: KeyPadding) -> Self {
        Self { kind, padding }
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    pub fn padding(&self) -> KeyPadding {
        self.padding
    }

    pub fn literal(&self, id: u64) -> KeyLiteral {
        match (self.kind, self.padding) {
            (KeyKind::Integer, _) => KeyLiteral::Integer(id),
            (KeyKind::FixedText { .. }, KeyPadding::Unpadded) => KeyLiteral::Text(id.to_string()),
            (KeyKind::FixedText { width }, KeyPadding::ZeroPadded) => {
                KeyLiteral::Text(format!("{id:0width$}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_types() {
        assert_eq!(KeyKind::Integer.to_string(), "INTEGER");
        assert_eq!(KeyKind::FixedText { width: 40 }.to_string(), "CHAR(40)");
    }

    #[test]
    fn test_integer_literal() {
        let keys = KeyRenderer::new(KeyKind::Integer, KeyPadding::Unpadded);
        assert_eq!(keys.literal(42).to_string(), "42");

        // Padding has no effect on integer keys
        let keys = KeyRenderer::new(KeyKind::Integer, KeyPadding::ZeroPadded);
        assert_eq!(keys.literal(42).to_string(), "42");
    }

    #[test]
    fn test_unpadded_text_literal_ignores_width() {
        let keys = KeyRenderer::new(KeyKind::FixedText { width: 200 }, KeyPadding::Unpadded);
        assert_eq!(keys.literal(0).to_string(), "'0'");
        assert_eq!(keys.literal(19_999).to_string(), "'19999'");
    }

    #[test]
    fn test_zero_padded_text_literal() {
        let keys = KeyRenderer::new(KeyKind::FixedText { width: 40 }, KeyPadding::ZeroPadded);
        match keys.literal(42) {
            KeyLiteral::Text(s) => {
                assert_eq!(s.len(), 40);
                assert!(s.ends_with("42"));
                assert!(s[..38].chars().all(|c| c == '0'));
            }
            other => panic!("Expected text literal, got {other:?}"),
        }
    }
}
