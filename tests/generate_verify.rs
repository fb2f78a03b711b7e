//! End-to-end tests: generate a workload script, read it back, verify it.

use pk_index_gen::{generate_script, run_generate, verify_script, GenerateArgs, VerifyArgs};
use std::path::PathBuf;
use tempfile::TempDir;
use workload_core::{KeyLiteral, Profile, Statement, WorkloadConfig};

const SEED: u64 = 42;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn generate_to_string(config: WorkloadConfig) -> String {
    let mut buf = Vec::new();
    generate_script(config, &mut buf).expect("Failed to generate workload");
    String::from_utf8(buf).expect("Script is not UTF-8")
}

fn parse(script: &str) -> Vec<Statement> {
    Statement::parse_script(script)
        .collect::<Result<_, _>>()
        .expect("Failed to parse generated script")
}

#[test]
fn test_every_profile_verifies() {
    for profile in Profile::ALL {
        let script = generate_to_string(WorkloadConfig::new(profile).with_seed(SEED));
        let args = VerifyArgs {
            profile: Some(profile.name().to_string()),
            live_floor: Some(100),
            ..Default::default()
        };

        let report = verify_script(&script, &args).expect("Verification failed");
        assert_eq!(report.inserts, profile.row_count());
        assert_eq!(report.id_column, profile.key_kind().to_string());
        assert!(report.min_live_after_delete.unwrap() >= 100);
    }
}

#[test]
fn test_seeded_output_is_byte_identical() {
    let config = WorkloadConfig::new(Profile::Large).with_seed(SEED);
    assert_eq!(
        generate_to_string(config.clone()),
        generate_to_string(config)
    );
}

#[test]
fn test_small_three_rows_without_deletes() {
    let config = WorkloadConfig::new(Profile::Small)
        .with_row_count(3)
        .with_deletion_frequency(0.0)
        .with_seed(SEED);
    let script = generate_to_string(config);

    assert!(script.starts_with(
        "CREATE TABLE test_pk_index (\n    id INTEGER PRIMARY KEY,\n    value VARCHAR(20)\n);\n\n"
    ));
    assert!(script.ends_with("\n\nQUIT;\n"));
    assert!(!script.contains("DELETE"));

    let mut ids: Vec<u64> = parse(&script)
        .into_iter()
        .filter_map(|stmt| match stmt {
            Statement::Insert {
                key: KeyLiteral::Integer(id),
                ..
            } => Some(id),
            _ => None,
        })
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_large_burst_before_fourth_insert() {
    let config = WorkloadConfig::new(Profile::Large)
        .with_live_floor(2)
        .with_deletion_frequency(1.0)
        .with_seed(SEED);
    let script = generate_to_string(config);
    let lines: Vec<&str> = script
        .lines()
        .filter(|l| l.starts_with("INSERT") || l.starts_with("DELETE"))
        .collect();

    assert!(lines[0].starts_with("INSERT"));
    assert!(lines[1].starts_with("INSERT"));
    assert!(lines[2].starts_with("INSERT"));
    assert!(lines[3].starts_with("DELETE FROM test_pk_index WHERE id='"));
}

#[test]
fn test_text_keys_are_unpadded_by_default() {
    let script = generate_to_string(
        WorkloadConfig::new(Profile::Huge)
            .with_row_count(20)
            .with_seed(SEED),
    );
    for stmt in parse(&script) {
        if let Statement::Insert {
            key: KeyLiteral::Text(key),
            ..
        } = stmt
        {
            assert!(key.len() <= 2, "unexpected padding in {key}");
            assert!(key.parse::<u64>().unwrap() < 20);
        }
    }
}

#[test]
fn test_row_values_in_script() {
    let script = generate_to_string(WorkloadConfig::new(Profile::Small).with_seed(SEED));
    for stmt in parse(&script) {
        if let Statement::Insert { value, .. } = stmt {
            assert!((5..=20).contains(&value.len()));
            assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}

#[test]
fn test_generate_from_config_file_to_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("small.sql");

    let args = GenerateArgs {
        config: Some(fixture("small_workload.yaml")),
        output: Some(output.clone()),
        ..Default::default()
    };
    let summary = run_generate(&args).expect("Failed to generate workload");
    assert_eq!(summary.seed, SEED);
    assert_eq!(summary.metrics.inserts, 300);
    assert_eq!(
        summary.metrics.bytes_written,
        std::fs::metadata(&output).unwrap().len()
    );

    let script = std::fs::read_to_string(&output).unwrap();
    let report = verify_script(
        &script,
        &VerifyArgs {
            expect_rows: Some(300),
            live_floor: Some(50),
            ..Default::default()
        },
    )
    .expect("Verification failed");

    assert_eq!(report.inserts, summary.metrics.inserts);
    assert_eq!(report.deletes, summary.metrics.deletes);
    assert_eq!(report.final_live, summary.final_live);
}

#[test]
fn test_flags_override_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("override.sql");

    let args = GenerateArgs {
        config: Some(fixture("small_workload.yaml")),
        row_count: Some(120),
        seed: Some(7),
        output: Some(output),
        ..Default::default()
    };
    let summary = run_generate(&args).unwrap();
    assert_eq!(summary.seed, 7);
    assert_eq!(summary.metrics.inserts, 120);
}

#[test]
fn test_unknown_profile_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("never.sql");

    let args = GenerateArgs {
        profile: Some("tiny".to_string()),
        output: Some(output.clone()),
        ..Default::default()
    };
    let err = run_generate(&args).unwrap_err();

    assert!(format!("{err:#}").contains("Unknown profile: tiny"));
    assert!(!output.exists());
}

#[test]
fn test_verify_rejects_tampered_script() {
    let script = generate_to_string(WorkloadConfig::new(Profile::Small).with_seed(SEED));

    // Deleting a key that was never inserted
    let tampered = script.replacen(
        "\n\nQUIT;",
        "\nDELETE FROM test_pk_index WHERE id=700;\n\nQUIT;",
        1,
    );
    let err = verify_script(&tampered, &VerifyArgs::default()).unwrap_err();
    assert!(format!("{err:#}").contains("not live"));

    // Wrong expected row count
    let err = verify_script(
        &script,
        &VerifyArgs {
            expect_rows: Some(10),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("Expected 10 inserts, found 700"));
}
