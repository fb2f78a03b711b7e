//! `generate` command handler.

use crate::cli::GenerateArgs;
use crate::script::{write_script, ScriptMetrics};
use anyhow::Context;
use std::fs::File;
use std::io::{self, Write};
use workload_core::WorkloadConfig;
use workload_generator::WorkloadGenerator;

/// Outcome of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Seed the run used, so it can be reproduced with `--seed`
    pub seed: u64,
    pub metrics: ScriptMetrics,
    /// Rows still live at the end of the script
    pub final_live: usize,
}

/// Generate the workload described by `config` into `out`.
pub fn generate_script<W: Write>(
    config: WorkloadConfig,
    out: W,
) -> anyhow::Result<GenerateSummary> {
    let mut generator = WorkloadGenerator::new(config).context("Invalid workload configuration")?;
    let seed = generator.seed();

    let config = generator.config();
    tracing::info!(
        "Generating {} workload: {} rows, id {}, seed={}",
        config.profile,
        config.effective_row_count(),
        config.profile.key_kind(),
        seed
    );

    let metrics =
        write_script(out, generator.by_ref()).context("Failed to write workload script")?;

    Ok(GenerateSummary {
        seed,
        metrics,
        final_live: generator.stats().live,
    })
}

/// Run the generate command.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<GenerateSummary> {
    let config = args
        .resolve_config()
        .context("Invalid workload configuration")?;

    let summary = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let summary = generate_script(config, file)?;
            tracing::info!("Generated: {}", path.display());
            summary
        }
        None => generate_script(config, io::stdout().lock())?,
    };

    tracing::info!(
        "Wrote {} statements ({} inserts, {} deletes, {} live) in {:?}, {} bytes, {:.0} statements/s",
        summary.metrics.statements,
        summary.metrics.inserts,
        summary.metrics.deletes,
        summary.final_live,
        summary.metrics.total_duration,
        summary.metrics.bytes_written,
        summary.metrics.statements_per_second()
    );

    Ok(summary)
}
