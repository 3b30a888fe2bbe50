use configure_test_support::prelude::*;
use snapbox::cmd::Command;

use super::expected_config_mk;

#[test]
fn env_dir_is_used() {
    let sandbox = Sandbox::new();
    let prefix = sandbox.dir("usr-local");

    let assert = Command::configure()
        .current_dir(sandbox.work_dir())
        .env("PREFIX", &prefix)
        .assert()
        .success()
        .stdout_eq("");

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("PREFIX from environment"), "{stderr}");
    assert!(!stderr.contains("PREFIX from argv"), "{stderr}");
    assert_eq!(
        sandbox.read_config_mk(),
        expected_config_mk(&prefix.display().to_string())
    );
}

#[test]
fn env_wins_over_any_arguments() {
    let sandbox = Sandbox::new();
    let from_env = sandbox.dir("from-env");
    let from_flag = sandbox.dir("from-flag");

    Command::configure()
        .current_dir(sandbox.work_dir())
        .env("PREFIX", &from_env)
        .arg("--prefix")
        .arg(&from_flag)
        .assert()
        .success();
    assert_eq!(
        sandbox.read_config_mk(),
        expected_config_mk(&from_env.display().to_string())
    );

    // arguments are not even parsed
    Command::configure()
        .current_dir(sandbox.work_dir())
        .env("PREFIX", &from_env)
        .args(["--no-such-flag", "positional"])
        .assert()
        .success();
    assert_eq!(
        sandbox.read_config_mk(),
        expected_config_mk(&from_env.display().to_string())
    );
}

#[test]
fn env_missing_dir_writes_none() {
    let sandbox = Sandbox::new();
    let missing = sandbox.missing("nowhere");

    Command::configure()
        .current_dir(sandbox.work_dir())
        .env("PREFIX", &missing)
        .assert()
        .success();
    assert_eq!(sandbox.read_config_mk(), expected_config_mk("None"));
}

#[test]
fn env_missing_dir_does_not_fall_back_to_flag() {
    let sandbox = Sandbox::new();
    let missing = sandbox.missing("nowhere");
    let from_flag = sandbox.dir("from-flag");

    Command::configure()
        .current_dir(sandbox.work_dir())
        .env("PREFIX", &missing)
        .arg("-p")
        .arg(&from_flag)
        .assert()
        .success();
    assert_eq!(sandbox.read_config_mk(), expected_config_mk("None"));
}

#[test]
fn empty_env_counts_as_set() {
    let sandbox = Sandbox::new();

    Command::configure()
        .current_dir(sandbox.work_dir())
        .env("PREFIX", "")
        .assert()
        .success();
    assert_eq!(sandbox.read_config_mk(), expected_config_mk("None"));
}

#[test]
fn relative_env_prefix_is_kept_verbatim() {
    let sandbox = Sandbox::new();
    sandbox.dir("work/stage");

    Command::configure()
        .current_dir(sandbox.work_dir())
        .env("PREFIX", "stage")
        .assert()
        .success();
    assert_eq!(sandbox.read_config_mk(), expected_config_mk("stage"));
}
