use std::process::Command;

use crate::common::{fixture, BINARY_PATH};

#[test]
fn run_mode_with_missing_config_exits_via_exit_handler() {
    let output = Command::new(BINARY_PATH)
        .args(["--config-dir", &fixture("tests/fixtures/nonexistent")])
        .output()
        .expect("binary spawns");

    // Configuration bootstrap rejects; the assembly's exit handler logs the
    // routed error and terminates with code 1. Code 3 stays reserved for
    // failures before assembly completes.
    assert_eq!(output.status.code(), Some(1), "status: {:?}", output.status);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config.toml"), "stderr: {stderr}");
}
