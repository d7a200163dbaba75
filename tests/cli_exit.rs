// tests/cli_exit.rs - Exit code tests
//!
//! Each run happens in a fresh temp directory so no stray `casetally.toml`
//! leaks into the result.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use casetally_core::cli::handlers::verification_exit;
use casetally_core::exit::TallyExit;
use casetally_core::verification::{Finding, Severity, VerificationReport};
use chrono::NaiveDate;
use tempfile::TempDir;

const CLEAN_BUNDLE: &str = r#"{
    "updated": "2020-03-03T12:00:00+09:00",
    "patients": [
        {"dateAnnounced": "2020-03-01", "prefecture": "Tokyo", "confirmedPatient": true},
        {"dateAnnounced": "2020-03-02", "prefecture": "Osaka", "confirmedPatient": true}
    ]
}"#;

const REVISED_DOWN_BUNDLE: &str = r#"{
    "patients": [
        {"dateAnnounced": "2020-03-01", "prefecture": "Tokyo", "confirmedPatient": true},
        {"dateAnnounced": "2020-03-02", "prefecture": "Tokyo", "confirmedPatient": true}
    ],
    "dailyOverrides": [
        {"date": "2020-03-01", "tested": "30"},
        {"date": "2020-03-02", "tested": "10"}
    ]
}"#;

fn workspace() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_casetally"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn finding(severity: Severity) -> Finding {
    Finding {
        date: NaiveDate::from_ymd_opt(2020, 3, 2).unwrap(),
        check: "active-identity",
        message: "mismatch".to_string(),
        severity,
    }
}

#[test]
fn test_exit_0_clean_tally() {
    let d = workspace();
    let input = write(&d, "bundle.json", CLEAN_BUNDLE);
    let out = run(&d, &["tally", "--input", arg(&input), "--today", "2020-03-03"]);
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["updated"], "2020-03-03T12:00:00+09:00");
    assert_eq!(json["daily"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_exit_0_verify_with_warnings_only() {
    let d = workspace();
    let input = write(&d, "bundle.json", REVISED_DOWN_BUNDLE);
    let out = run(
        &d,
        &["verify", "--input", arg(&input), "--today", "2020-03-03", "--json"],
    );
    assert_eq!(out.status.code(), Some(0));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["findings"][0]["check"], "cumulative-decrease");
    assert_eq!(report["findings"][0]["severity"], "warning");
}

#[test]
fn test_exit_2_malformed_bundle() {
    let d = workspace();
    let input = write(&d, "bundle.json", r#"{"patients": 5}"#);
    for cmd in ["tally", "verify"] {
        let out = run(&d, &[cmd, "--input", arg(&input), "--today", "2020-03-03"]);
        assert_eq!(out.status.code(), Some(TallyExit::InvalidInput.code()), "{cmd}");
        assert!(out.stdout.is_empty());
    }
}

#[test]
fn test_exit_1_bad_config() {
    let d = workspace();
    let input = write(&d, "bundle.json", CLEAN_BUNDLE);
    write(&d, "casetally.toml", "[cruise]\npassenger_pattern = \"[\"\n");
    let out = run(&d, &["tally", "--input", arg(&input), "--today", "2020-03-03"]);
    assert_eq!(out.status.code(), Some(TallyExit::Error.code()));
}

#[test]
fn test_exit_1_unparsable_config_file() {
    let d = workspace();
    let input = write(&d, "bundle.json", CLEAN_BUNDLE);
    let config = write(&d, "other.toml", "[dates\n");
    let out = run(
        &d,
        &["--config", arg(&config), "verify", "--input", arg(&input)],
    );
    assert_eq!(out.status.code(), Some(TallyExit::Error.code()));
}

#[test]
fn test_exit_1_missing_bundle() {
    let d = workspace();
    let out = run(&d, &["tally", "--input", "absent.json", "--today", "2020-03-03"]);
    assert_eq!(out.status.code(), Some(TallyExit::Error.code()));
}

#[test]
fn test_exit_1_bad_today() {
    let d = workspace();
    let input = write(&d, "bundle.json", CLEAN_BUNDLE);
    let out = run(&d, &["tally", "--input", arg(&input), "--today", "yesterday"]);
    assert_eq!(out.status.code(), Some(TallyExit::Error.code()));
}

#[test]
fn test_exit_6_on_error_findings() {
    let report = VerificationReport {
        findings: vec![finding(Severity::Warning), finding(Severity::Error)],
        days_checked: 2,
    };
    assert_eq!(verification_exit(&report), TallyExit::CheckFailed);
    assert_eq!(TallyExit::CheckFailed.code(), 6);
}

#[test]
fn test_warnings_alone_do_not_fail() {
    let report = VerificationReport {
        findings: vec![finding(Severity::Warning)],
        days_checked: 2,
    };
    assert_eq!(verification_exit(&report), TallyExit::Success);
    assert_eq!(verification_exit(&VerificationReport::default()), TallyExit::Success);
}

#[test]
fn test_exit_codes_distinct() {
    let codes = [
        TallyExit::Success.code(),
        TallyExit::Error.code(),
        TallyExit::InvalidInput.code(),
        TallyExit::CheckFailed.code(),
    ];
    assert_eq!(codes, [0, 1, 2, 6]);
}
