//! Workload statements and their SQL text form.
//!
//! [`Statement`]'s `Display` impl is the exact text written to a workload
//! script. [`Statement::parse`] reads that text form back, which is what the
//! replay checker runs on.

use crate::key::{KeyKind, KeyLiteral};
use thiserror::Error;

/// Table every workload targets.
pub const TABLE_NAME: &str = "test_pk_index";

/// Declared width of the `value` column.
pub const VALUE_COLUMN_WIDTH: usize = 20;

/// Errors from parsing workload SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text that is not one of the workload statement forms
    #[error("Unrecognized statement: {0}")]
    Unrecognized(String),

    /// Key literal that is neither an integer nor a quoted string
    #[error("Invalid key literal: {0}")]
    InvalidKey(String),

    /// Row value that is not a single-quoted string
    #[error("Invalid row value: {0}")]
    InvalidValue(String),

    /// CREATE TABLE whose column list does not match the workload table
    #[error("Invalid column definitions: {0}")]
    InvalidColumns(String),
}

/// A single workload statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    CreateTable { id_column: KeyKind },
    Insert { key: KeyLiteral, value: String },
    Delete { key: KeyLiteral },
    Quit,
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::CreateTable { id_column } => write!(
                f,
                "CREATE TABLE {TABLE_NAME} (\n    id {id_column} PRIMARY KEY,\n    value VARCHAR({VALUE_COLUMN_WIDTH})\n);"
            ),
            Statement::Insert { key, value } => {
                write!(f, "INSERT INTO {TABLE_NAME} VALUES ({key}, '{value}');")
            }
            Statement::Delete { key } => write!(f, "DELETE FROM {TABLE_NAME} WHERE id={key};"),
            Statement::Quit => write!(f, "QUIT;"),
        }
    }
}

impl Statement {
    /// Parse one statement. The trailing `;` is optional and surrounding
    /// whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        let body = text.strip_suffix(';').unwrap_or(text).trim_end();

        if body == "QUIT" {
            return Ok(Statement::Quit);
        }
        if let Some(rest) = body.strip_prefix("CREATE TABLE") {
            return parse_create_table(rest);
        }
        if let Some(rest) = body.strip_prefix("INSERT INTO") {
            return parse_insert(rest).ok_or_else(|| ParseError::Unrecognized(text.to_string()))?;
        }
        if let Some(rest) = body.strip_prefix("DELETE FROM") {
            let key = rest
                .trim_start()
                .strip_prefix(TABLE_NAME)
                .and_then(|r| r.trim_start().strip_prefix("WHERE"))
                .and_then(|r| r.trim_start().strip_prefix("id"))
                .and_then(|r| r.trim_start().strip_prefix('='))
                .ok_or_else(|| ParseError::Unrecognized(text.to_string()))?;
            return Ok(Statement::Delete {
                key: parse_key_literal(key.trim())?,
            });
        }

        Err(ParseError::Unrecognized(text.to_string()))
    }

    /// Split a script into statements and parse each one.
    ///
    /// Statements are `;`-terminated; row values are alphanumeric so a `;`
    /// never appears inside a literal.
    pub fn parse_script(script: &str) -> impl Iterator<Item = Result<Statement, ParseError>> + '_ {
        script
            .split(';')
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .map(Statement::parse)
    }
}

fn parse_create_table(rest: &str) -> Result<Statement, ParseError> {
    let columns = rest
        .trim_start()
        .strip_prefix(TABLE_NAME)
        .map(str::trim)
        .and_then(|r| r.strip_prefix('('))
        .and_then(|r| r.strip_suffix(')'))
        .ok_or_else(|| ParseError::InvalidColumns(rest.trim().to_string()))?;

    // Normalize whitespace inside each column definition
    let columns: Vec<String> = columns
        .split(',')
        .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();

    let [id_column, value_column] = columns.as_slice() else {
        return Err(ParseError::InvalidColumns(columns.join(", ")));
    };

    if *value_column != format!("value VARCHAR({VALUE_COLUMN_WIDTH})") {
        return Err(ParseError::InvalidColumns(value_column.clone()));
    }

    let id_type = id_column
        .strip_prefix("id ")
        .and_then(|c| c.strip_suffix(" PRIMARY KEY"))
        .ok_or_else(|| ParseError::InvalidColumns(id_column.clone()))?;

    let id_column = if id_type == "INTEGER" {
        KeyKind::Integer
    } else {
        let width = id_type
            .strip_prefix("CHAR(")
            .and_then(|w| w.strip_suffix(')'))
            .and_then(|w| w.parse::<usize>().ok())
            .ok_or_else(|| ParseError::InvalidColumns(id_column.clone()))?;
        KeyKind::FixedText { width }
    };

    Ok(Statement::CreateTable { id_column })
}

fn parse_insert(rest: &str) -> Option<Result<Statement, ParseError>> {
    let values = rest
        .trim_start()
        .strip_prefix(TABLE_NAME)?
        .trim_start()
        .strip_prefix("VALUES")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    let (key, value) = values.split_once(',')?;

    let key = match parse_key_literal(key.trim()) {
        Ok(key) => key,
        Err(e) => return Some(Err(e)),
    };
    let value = value.trim();
    let value = match value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .filter(|v| !v.contains('\''))
    {
        Some(v) => v.to_string(),
        None => return Some(Err(ParseError::InvalidValue(value.to_string()))),
    };

    Some(Ok(Statement::Insert { key, value }))
}

fn parse_key_literal(text: &str) -> Result<KeyLiteral, ParseError> {
    if let Some(inner) = text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        if inner.contains('\'') {
            return Err(ParseError::InvalidKey(text.to_string()));
        }
        return Ok(KeyLiteral::Text(inner.to_string()));
    }
    text.parse::<u64>()
        .map(KeyLiteral::Integer)
        .map_err(|_| ParseError::InvalidKey(text.to_string()))
}
