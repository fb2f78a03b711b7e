//! `verify` command handler.

use crate::cli::VerifyArgs;
use anyhow::Context;
use std::io::{self, Read};
use workload_generator::{ReplayReport, Replayer};

/// Replay `script` with the checks `args` asks for.
pub fn verify_script(script: &str, args: &VerifyArgs) -> anyhow::Result<ReplayReport> {
    let mut replayer = Replayer::new();
    if let Some(rows) = args.expected_rows()? {
        replayer = replayer.with_expected_rows(rows);
    }
    if let Some(floor) = args.live_floor {
        replayer = replayer.with_live_floor(floor);
    }

    replayer
        .replay_script(script)
        .context("Workload verification failed")
}

/// Run the verify command.
pub fn run_verify(args: &VerifyArgs) -> anyhow::Result<ReplayReport> {
    let script = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?,
        None => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read script from stdin")?;
            script
        }
    };

    let report = verify_script(&script, args)?;

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!(
            "OK: {} statements, id {}, {} inserts, {} deletes, {} live at end",
            report.statements, report.id_column, report.inserts, report.deletes, report.final_live
        );
        if let Some(min) = report.min_live_after_delete {
            println!("Smallest live set after a delete: {min}");
        }
    }

    tracing::info!("Verification completed successfully");
    Ok(report)
}
