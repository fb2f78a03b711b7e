//! Replay checker for generated workloads.
//!
//! [`Replayer`] walks a statement sequence while keeping its own live set and
//! fails on the first statement that breaks a workload invariant:
//!
//! - the sequence is framed by one `CREATE TABLE` and one final `QUIT;`
//! - key literals match the declared `id` column type
//! - no key is inserted twice
//! - every delete targets a live key
//! - every row value is 5 to 20 ASCII letters and digits
//! - optionally, no delete takes the live set below a floor
//! - optionally, the number of inserts equals an expected row count

use crate::row_value::is_valid_row_value;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;
use workload_core::{KeyKind, KeyLiteral, ParseError, Statement};

/// Invariant violations found while replaying. `position` is the 1-based
/// index of the offending statement.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Statement {position}: {source}")]
    Parse {
        position: usize,
        #[source]
        source: ParseError,
    },

    #[error("Statement {position}: expected CREATE TABLE before any data statement")]
    MissingSchema { position: usize },

    #[error("Statement {position}: duplicate CREATE TABLE")]
    DuplicateSchema { position: usize },

    #[error("Statement {position}: statement after QUIT")]
    StatementAfterQuit { position: usize },

    #[error("Statement {position}: key {key} does not match id column {id_column}")]
    KeyTypeMismatch {
        position: usize,
        key: String,
        id_column: String,
    },

    #[error("Statement {position}: key {key} inserted twice")]
    DuplicateInsert { position: usize, key: String },

    #[error("Statement {position}: delete of key {key} which is not live")]
    DeleteOfMissingKey { position: usize, key: String },

    #[error("Statement {position}: invalid row value '{value}'")]
    InvalidRowValue { position: usize, value: String },

    #[error("Statement {position}: delete left {live} live rows, below floor {floor}")]
    BelowLiveFloor {
        position: usize,
        live: usize,
        floor: usize,
    },

    #[error("Workload does not end with QUIT")]
    MissingQuit,

    #[error("Expected {expected} inserts, found {actual}")]
    RowCountMismatch { expected: u64, actual: u64 },
}

/// Summary of a successful replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Declared type of the `id` column, e.g. `CHAR(40)`
    pub id_column: String,
    pub statements: usize,
    pub inserts: u64,
    pub deletes: u64,
    /// Live set size after the last statement
    pub final_live: usize,
    /// Smallest live set size observed right after a delete
    pub min_live_after_delete: Option<usize>,
}

/// Streaming checker over a workload's statements.
#[derive(Debug, Default)]
pub struct Replayer {
    live_floor: Option<usize>,
    expected_rows: Option<u64>,
    id_column: Option<KeyKind>,
    live: HashSet<KeyLiteral>,
    inserted: HashSet<KeyLiteral>,
    position: usize,
    inserts: u64,
    deletes: u64,
    min_live_after_delete: Option<usize>,
    quit: bool,
}

impl Replayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail if a delete leaves fewer than `floor` live rows.
    pub fn with_live_floor(mut self, floor: usize) -> Self {
        self.live_floor = Some(floor);
        self
    }

    /// Fail at the end if the insert count differs from `rows`.
    pub fn with_expected_rows(mut self, rows: u64) -> Self {
        self.expected_rows = Some(rows);
        self
    }

    /// Check one statement.
    pub fn apply(&mut self, stmt: &Statement) -> Result<(), ReplayError> {
        self.position += 1;
        let position = self.position;

        if self.quit {
            return Err(ReplayError::StatementAfterQuit { position });
        }

        match stmt {
            Statement::CreateTable { id_column } => {
                if self.id_column.is_some() {
                    return Err(ReplayError::DuplicateSchema { position });
                }
                self.id_column = Some(*id_column);
            }
            Statement::Insert { key, value } => {
                self.check_key(key)?;
                if !is_valid_row_value(value) {
                    return Err(ReplayError::InvalidRowValue {
                        position,
                        value: value.clone(),
                    });
                }
                if !self.inserted.insert(key.clone()) {
                    return Err(ReplayError::DuplicateInsert {
                        position,
                        key: key.to_string(),
                    });
                }
                self.live.insert(key.clone());
                self.inserts += 1;
            }
            Statement::Delete { key } => {
                self.check_key(key)?;
                if !self.live.remove(key) {
                    return Err(ReplayError::DeleteOfMissingKey {
                        position,
                        key: key.to_string(),
                    });
                }
                self.deletes += 1;

                let live = self.live.len();
                if let Some(floor) = self.live_floor {
                    if live < floor {
                        return Err(ReplayError::BelowLiveFloor {
                            position,
                            live,
                            floor,
                        });
                    }
                }
                self.min_live_after_delete = Some(
                    self.min_live_after_delete
                        .map_or(live, |min| min.min(live)),
                );
            }
            Statement::Quit => {
                if self.id_column.is_none() {
                    return Err(ReplayError::MissingSchema { position });
                }
                self.quit = true;
            }
        }
        Ok(())
    }

    fn check_key(&self, key: &KeyLiteral) -> Result<(), ReplayError> {
        let position = self.position;
        let Some(id_column) = self.id_column else {
            return Err(ReplayError::MissingSchema { position });
        };
        let matches = match (id_column, key) {
            (KeyKind::Integer, KeyLiteral::Integer(_)) => true,
            (KeyKind::FixedText { width }, KeyLiteral::Text(text)) => text.len() <= width,
            _ => false,
        };
        if matches {
            Ok(())
        } else {
            Err(ReplayError::KeyTypeMismatch {
                position,
                key: key.to_string(),
                id_column: id_column.to_string(),
            })
        }
    }

    /// Finish the replay and produce the report.
    pub fn finish(self) -> Result<ReplayReport, ReplayError> {
        let Some(id_column) = self.id_column.filter(|_| self.quit) else {
            return Err(ReplayError::MissingQuit);
        };
        if let Some(expected) = self.expected_rows {
            if expected != self.inserts {
                return Err(ReplayError::RowCountMismatch {
                    expected,
                    actual: self.inserts,
                });
            }
        }

        debug!(
            "Replayed {} statements: {} inserts, {} deletes",
            self.position, self.inserts, self.deletes
        );

        Ok(ReplayReport {
            id_column: id_column.to_string(),
            statements: self.position,
            inserts: self.inserts,
            deletes: self.deletes,
            final_live: self.live.len(),
            min_live_after_delete: self.min_live_after_delete,
        })
    }

    /// Replay a sequence of statements.
    pub fn replay<I>(mut self, statements: I) -> Result<ReplayReport, ReplayError>
    where
        I: IntoIterator<Item = Statement>,
    {
        for stmt in statements {
            self.apply(&stmt)?;
        }
        self.finish()
    }

    /// Parse a workload script and replay it.
    pub fn replay_script(mut self, script: &str) -> Result<ReplayReport, ReplayError> {
        for stmt in Statement::parse_script(script) {
            let stmt = stmt.map_err(|source| ReplayError::Parse {
                position: self.position + 1,
                source,
            })?;
            self.apply(&stmt)?;
        }
        self.finish()
    }
}
