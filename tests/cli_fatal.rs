//! Fatal preconditions exit with status 1 before anything is moved.

#![cfg(unix)]

mod common;

use common::*;

#[test]
fn missing_remote_host_is_fatal() {
    let env = TestEnv::with_fake_tools();

    let result = env.run(&[
        "dir",
        "--from",
        "shared/files",
        "--to",
        "tmp",
        "--deploy-to",
        "/srv/shop",
    ]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(
        result.stderr.contains("FATAL: missing required parameter: remote host"),
        "got:\n{}",
        result.stderr
    );
}

#[test]
fn blank_directory_parameters_print_usage() {
    let env = TestEnv::with_fake_tools();

    let result = env.run(&["--host", "app1", "--user", "deploy", "dir", "--to", "tmp"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("usage: devsync dir"), "got:\n{}", result.stderr);
}

#[test]
fn directory_parameters_can_come_from_environment() {
    let env = TestEnv::with_fake_tools();

    // FROM/TO satisfy the planner; the missing host is what stops the job.
    let result = env.run_with_env(
        &["dir", "--deploy-to", "/srv/shop"],
        &[("FROM", "shared/files"), ("TO", "tmp")],
    );

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("remote host"), "got:\n{}", result.stderr);
}

#[test]
fn missing_progress_meter_is_fatal() {
    let env = TestEnv::new();
    env.write_config("progress_meter = \"devsync-no-such-meter\"");

    let result = env.run(&["dir", "--from", "shared/files", "--to", "tmp"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(
        result
            .stderr
            .contains("FATAL: devsync-no-such-meter command not found"),
        "got:\n{}",
        result.stderr
    );
}

#[test]
fn missing_progress_meter_is_reported_before_missing_host() {
    let env = TestEnv::new();
    env.write_project_file("devsync.toml", "progress_meter = \"devsync-no-such-meter\"\n");

    let result = env.run(&["public-system"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(
        result
            .stderr
            .contains("FATAL: devsync-no-such-meter command not found"),
        "got:\n{}",
        result.stderr
    );
    assert!(!result.stderr.contains("remote host"), "got:\n{}", result.stderr);
}

#[test]
fn explicit_missing_config_file_is_fatal() {
    let env = TestEnv::new();

    let result = env.run(&["--config", "missing.toml", "public-system"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.starts_with("FATAL:"), "got:\n{}", result.stderr);
}

#[test]
fn unknown_config_keys_are_warned_about() {
    let env = TestEnv::new();
    env.write_project_file("devsync.toml", "progres_meter = \"pv\"\n");

    let result = env.run(&["dir", "--from", "a", "--to", "b", "--deploy-to", "/srv"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("did you mean 'progress_meter'"),
        "got:\n{}",
        result.stderr
    );
}
