use std::process::Command;

use crate::common::{fixture, BINARY_PATH};

#[test]
fn check_config_prints_resolved_configuration() {
    let output = Command::new(BINARY_PATH)
        .args([
            "--config-dir",
            &fixture("tests/fixtures/valid"),
            "check-config",
        ])
        .output()
        .expect("binary spawns");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"port\": 4861"), "stdout: {stdout}");
    assert!(stdout.contains("\"max_connections\": 32"), "stdout: {stdout}");
    assert!(stdout.contains("\"host\": \"127.0.0.1\""), "stdout: {stdout}");
}

#[test]
fn check_config_applies_defaults_for_empty_file() {
    let output = Command::new(BINARY_PATH)
        .args([
            "--config-dir",
            &fixture("tests/fixtures/defaults"),
            "check-config",
        ])
        .output()
        .expect("binary spawns");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"port\": 4860"), "stdout: {stdout}");
}

#[test]
fn check_config_rejects_broken_configuration_without_crashing() {
    let output = Command::new(BINARY_PATH)
        .args([
            "--config-dir",
            &fixture("tests/fixtures/broken"),
            "check-config",
        ])
        .output()
        .expect("binary spawns");

    assert_eq!(output.status.code(), Some(1), "status: {:?}", output.status);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration file"), "stderr: {stderr}");
}
