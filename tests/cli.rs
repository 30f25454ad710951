//! CLI integration tests for base58
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Creates an empty directory unique to this call.
fn scratch_dir() -> PathBuf {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "base58-cli-home-{}-{}",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Runs the binary from `dir`, with `dir` as its home and config directory.
fn base58_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("base58").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("NO_COLOR", "1");
    cmd
}

/// Runs the binary away from any user or project configuration.
fn base58() -> Command {
    base58_in(&scratch_dir())
}

/// Writes `contents` to a file unique to this test process.
fn fixture(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("base58-cli-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base58()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base58 encoding and decoding tool"))
        .stdout(predicate::str::contains("encode"))
        .stdout(predicate::str::contains("decode"));
}

#[test]
fn test_help_short_flag() {
    base58()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_subcommand() {
    base58()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version() {
    base58()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base58"));
}

#[test]
fn test_no_arguments_shows_usage() {
    base58()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command() {
    base58().arg("invalid").assert().failure();
}

// ============================================================================
// Encode
// ============================================================================

#[test]
fn test_encode_argument() {
    base58()
        .args(["encode", "Hello World"])
        .assert()
        .success()
        .stdout("JxF12TrwUP45BMd\n");
}

#[test]
fn test_encode_arguments_joined_with_space() {
    base58()
        .args(["encode", "Hello", "World"])
        .assert()
        .success()
        .stdout("JxF12TrwUP45BMd\n");
}

#[test]
fn test_encode_empty_argument() {
    base58().args(["encode", ""]).assert().success().stdout("\n");
}

#[test]
fn test_encode_stdin_drops_trailing_newline() {
    base58()
        .arg("encode")
        .write_stdin("Hello World\n")
        .assert()
        .success()
        .stdout("JxF12TrwUP45BMd\n");
}

#[test]
fn test_encode_file_is_binary_exact() {
    let path = fixture("encode.bin", &[0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    base58()
        .args(["encode", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout("17bWpTW\n");
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_encode_file_and_data_conflict() {
    base58()
        .args(["encode", "-f", "input.txt", "data"])
        .assert()
        .failure();
}

#[test]
fn test_file_not_found() {
    base58()
        .args(["encode", "-f", "/nonexistent/base58/input.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading file"));
}

// ============================================================================
// Decode
// ============================================================================

#[test]
fn test_decode_argument() {
    base58()
        .args(["decode", "JxF12TrwUP45BMd"])
        .assert()
        .success()
        .stdout("Hello World");
}

#[test]
fn test_decode_empty_argument() {
    base58().args(["decode", ""]).assert().success().stdout("");
}

#[test]
fn test_decode_stdin_trims_whitespace() {
    base58()
        .arg("decode")
        .write_stdin("  JxF12TrwUP45BMd \n")
        .assert()
        .success()
        .stdout("Hello World");
}

#[test]
fn test_decode_file() {
    let path = fixture("decode.txt", b"1qb3y62fmEEVTPySXPQ77WXok6H\n");
    let expected = hex::decode("00010966776006953d5567439e5e39f86a0d273bee").unwrap();
    base58()
        .args(["decode", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(expected);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_decode_invalid_character() {
    base58()
        .args(["decode", "123O"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid character 'O' at position 3"))
        .stderr(predicate::str::contains("hint: valid characters"));
}

#[test]
fn test_decode_rejects_zero() {
    base58()
        .arg("decode")
        .write_stdin("10")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '0'"));
}

// ============================================================================
// Round-trips and engines
// ============================================================================

#[test]
fn test_roundtrip_stdin() {
    let encoded = base58()
        .arg("encode")
        .write_stdin("test data 123")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base58()
        .arg("decode")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("test data 123");
}

#[test]
fn test_plain_engine_matches_pooled() {
    for engine in ["pooled", "plain"] {
        base58()
            .args(["--engine", engine, "encode", "Hello World"])
            .assert()
            .success()
            .stdout("JxF12TrwUP45BMd\n");

        base58()
            .args(["decode", "17bWpTW", "--engine", engine])
            .assert()
            .success()
            .stdout(vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    }
}

#[test]
fn test_unknown_engine() {
    base58()
        .args(["--engine", "turbo", "encode", "x"])
        .assert()
        .failure();
}

// ============================================================================
// Size limits
// ============================================================================

#[test]
fn test_max_size_exceeded() {
    base58()
        .args(["--max-size", "4", "encode", "Hello World"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"));
}

#[test]
fn test_max_size_force() {
    base58()
        .args(["--max-size", "4", "--force", "encode", "Hello World"])
        .assert()
        .success()
        .stdout("JxF12TrwUP45BMd\n")
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn test_max_size_force_quiet() {
    base58()
        .args(["--max-size", "4", "--force", "-q", "encode", "Hello World"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_max_size_zero_is_unlimited() {
    base58()
        .args(["--max-size", "0", "encode", "Hello World"])
        .assert()
        .success();
}

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn test_project_config_is_applied() {
    let dir = scratch_dir();
    std::fs::write(dir.join("base58.toml"), "[settings]\nmax_size = 4\n").unwrap();

    base58_in(&dir)
        .args(["encode", "Hello World"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"));

    // Flags still win over the file.
    base58_in(&dir)
        .args(["--max-size", "0", "encode", "Hello World"])
        .assert()
        .success()
        .stdout("JxF12TrwUP45BMd\n");
}

#[test]
#[cfg(target_os = "linux")]
fn test_user_config_is_applied() {
    let dir = scratch_dir();
    let user_dir = dir.join("config").join("base58");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[settings]\nmax_size = 4\n").unwrap();

    base58_in(&dir)
        .args(["encode", "Hello World"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"));

    // A project file overrides the user file key by key.
    std::fs::write(dir.join("base58.toml"), "[settings]\nmax_size = 0\n").unwrap();
    base58_in(&dir)
        .args(["encode", "Hello World"])
        .assert()
        .success()
        .stdout("JxF12TrwUP45BMd\n");
}

#[test]
fn test_broken_config_is_skipped_with_warning() {
    let dir = scratch_dir();
    std::fs::write(dir.join("base58.toml"), "[settings\n").unwrap();

    base58_in(&dir)
        .args(["encode", "Hello World"])
        .assert()
        .success()
        .stdout("JxF12TrwUP45BMd\n")
        .stderr(predicate::str::contains("Warning: Failed to load local config"));
}
