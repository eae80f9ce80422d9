//! Runs the `ukit` binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `ukit` with an isolated home and config directory and colors disabled.
fn ukit(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ukit"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("UTILKIT__LOGGING__FILE");
    cmd
}

#[test]
fn test_missing_config_file_is_fatal() {
    let home = tempfile::tempdir().unwrap();

    ukit(&home)
        .args(["--config", "/nonexistent/ukit.toml", "uuid"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("FATAL"))
        .stderr(predicate::str::contains("cli/src/main.rs:"))
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_uuid_prints_identifiers() {
    let home = tempfile::tempdir().unwrap();
    let two_ids = predicate::str::is_match(
        "^([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\n){2}$",
    )
    .unwrap();

    ukit(&home)
        .args(["uuid", "-n", "2"])
        .assert()
        .success()
        .stdout(two_ids);
}

#[test]
fn test_command_failure_exits_non_zero() {
    let home = tempfile::tempdir().unwrap();

    ukit(&home)
        .args(["split", "novalue", "="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Separator '=' not found"));
}

#[test]
fn test_required_env_reports_missing_variable() {
    let home = tempfile::tempdir().unwrap();

    ukit(&home)
        .env_remove("UKIT_BINARY_TEST_TOKEN")
        .args(["env", "UKIT_BINARY_TEST_TOKEN", "--required"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UKIT_BINARY_TEST_TOKEN"));
}

#[test]
fn test_required_env_prints_trimmed_value() {
    let home = tempfile::tempdir().unwrap();

    ukit(&home)
        .env("UKIT_BINARY_TEST_REGION", "  eu-west \n")
        .args(["env", "UKIT_BINARY_TEST_REGION", "--required"])
        .assert()
        .success()
        .stdout("eu-west\n");
}
