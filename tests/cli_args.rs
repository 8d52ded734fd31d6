//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal is taken over are exercised.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn responsive_root_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_responsive-root"))
}

#[test]
fn test_help_lists_options() {
    let output = responsive_root_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--width"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_version_flag() {
    let output = responsive_root_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unparseable_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[breakpoints\n").unwrap();

    let output = responsive_root_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to parse config file"), "{stderr}");
}

#[test]
fn test_invalid_breakpoints_exit_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[breakpoints]\ntablet_min = 0\n").unwrap();

    let output = responsive_root_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"), "{stderr}");
}

#[test]
fn test_missing_width_value_is_rejected() {
    let output = responsive_root_cmd()
        .arg("--width")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--width"), "{stderr}");
}
