//! End-to-end tests for the twtools binaries

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use twtools_checksum::infra::number_io::load_numbers;
use twtools_checksum::{is_valid_consent, is_valid_twid, is_valid_ubn};

fn bin(name: &str) -> Command {
    Command::cargo_bin(name).unwrap()
}

fn stdout_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// twtools_twid
// =============================================================================

#[test]
fn test_twid_generate_with_options() {
    let assert = bin("twtools_twid")
        .args(["generate", "--gender", "1", "--letter", "a", "--count", "5"])
        .assert()
        .success();

    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines.len(), 5);
    for id in &lines {
        assert!(id.starts_with("A1"), "unexpected prefix: {}", id);
        assert!(is_valid_twid(id));
    }
}

#[test]
fn test_twid_generate_rejects_bad_gender() {
    bin("twtools_twid")
        .args(["generate", "--gender", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gender"));
}

#[test]
fn test_twid_generate_clamps_count() {
    let assert = bin("twtools_twid")
        .args(["generate", "--count", "0"])
        .assert()
        .success();
    assert_eq!(stdout_lines(&assert.get_output().stdout).len(), 1);

    let assert = bin("twtools_twid")
        .args(["generate", "--count", "5000"])
        .assert()
        .success();
    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines.len(), 1000);
    assert!(lines.iter().all(|id| is_valid_twid(id)));
}

#[test]
fn test_twid_generate_verbose_logs_to_stderr() {
    let assert = bin("twtools_twid")
        .env_remove("RUST_LOG")
        .args(["generate", "--count", "3", "-vv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("generated TWID"));

    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|id| is_valid_twid(id)));
}

#[test]
fn test_default_verbosity_is_quiet() {
    bin("twtools_twid")
        .env_remove("RUST_LOG")
        .args(["generate", "--count", "3"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_rust_log_overrides_verbosity() {
    let assert = bin("twtools_ubn")
        .env("RUST_LOG", "debug")
        .args(["generate", "--count", "4"])
        .assert()
        .success()
        .stderr(predicate::str::contains("generated UBN"));

    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|ubn| is_valid_ubn(ubn)));
}

#[test]
fn test_twid_check_trims_and_uppercases() {
    bin("twtools_twid")
        .args(["check", " a123456789 "])
        .assert()
        .success()
        .stdout("A123456789\tOK\n");
}

#[test]
fn test_twid_check_failure_exit_code() {
    bin("twtools_twid")
        .args(["check", "A123456789", "A123456788"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("A123456788\tNG"));
}

// =============================================================================
// twtools_ubn
// =============================================================================

#[test]
fn test_ubn_generate_clamps_count() {
    let assert = bin("twtools_ubn")
        .args(["generate", "--count", "0"])
        .assert()
        .success();
    assert_eq!(stdout_lines(&assert.get_output().stdout).len(), 1);

    let assert = bin("twtools_ubn")
        .args(["generate", "--count", "2.7"])
        .assert()
        .success();
    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|ubn| is_valid_ubn(ubn)));
}

#[test]
fn test_ubn_generate_to_file_and_check_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ubns.txt");

    bin("twtools_ubn")
        .args(["generate", "--count", "20", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 20 UBNs"));

    let saved = load_numbers(&path).unwrap();
    assert_eq!(saved.len(), 20);

    bin("twtools_ubn")
        .args(["check", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("NG").not());
}

#[test]
fn test_ubn_check_special_case() {
    bin("twtools_ubn")
        .args(["check", "1000-0078", "10000008"])
        .assert()
        .code(1)
        .stdout("10000078\tOK\n10000008\tNG\n");
}

#[test]
fn test_ubn_normalize() {
    bin("twtools_ubn")
        .args(["normalize", "12-34-5678-90"])
        .assert()
        .success()
        .stdout("12345678\n");
}

// =============================================================================
// twtools_consent
// =============================================================================

#[test]
fn test_consent_generate_fixed_letter() {
    bin("twtools_consent")
        .args(["generate", "--prefix", "11409", "--seq", "42", "--letter", "b"])
        .assert()
        .success()
        .stdout("11409B000042\n");
}

#[test]
fn test_consent_generate_random_letter() {
    let assert = bin("twtools_consent")
        .args(["generate", "--prefix", "11409", "--seq", "7"])
        .assert()
        .success();
    let lines = stdout_lines(&assert.get_output().stdout);
    assert_eq!(lines.len(), 1);
    assert!(is_valid_consent(&lines[0]));
}

#[test]
fn test_consent_generate_invalid_prefix() {
    bin("twtools_consent")
        .args(["generate", "--prefix", "114", "--seq", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid prefix"));
}

#[test]
fn test_consent_check() {
    bin("twtools_consent")
        .args(["check", "11409B000042", "11409E000042"])
        .assert()
        .code(1)
        .stdout("11409B000042\tOK\n11409E000042\tNG\n");
}
