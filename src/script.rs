//! Writes a statement stream as a SQL script.
//!
//! Layout: the `CREATE TABLE` statement followed by a blank line, one line
//! per `INSERT`/`DELETE`, then a blank line and `QUIT;`.

use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};
use workload_core::Statement;

/// Default buffer size for script writing.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Metrics from writing a script.
#[derive(Debug, Clone, Default)]
pub struct ScriptMetrics {
    pub statements: u64,
    pub inserts: u64,
    pub deletes: u64,
    pub bytes_written: u64,
    pub total_duration: Duration,
}

impl ScriptMetrics {
    /// Calculate statements per second.
    pub fn statements_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.statements as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Write `statements` to `out` and flush.
pub fn write_script<W, I>(out: W, statements: I) -> io::Result<ScriptMetrics>
where
    W: Write,
    I: IntoIterator<Item = Statement>,
{
    let start = Instant::now();
    let mut out = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, out);
    let mut metrics = ScriptMetrics::default();

    for stmt in statements {
        let text = match &stmt {
            Statement::CreateTable { .. } => format!("{stmt}\n\n"),
            Statement::Insert { .. } => {
                metrics.inserts += 1;
                format!("{stmt}\n")
            }
            Statement::Delete { .. } => {
                metrics.deletes += 1;
                format!("{stmt}\n")
            }
            Statement::Quit => format!("\n{stmt}\n"),
        };
        out.write_all(text.as_bytes())?;
        metrics.statements += 1;
        metrics.bytes_written += text.len() as u64;
    }

    out.flush()?;
    metrics.total_duration = start.elapsed();
    Ok(metrics)
}
