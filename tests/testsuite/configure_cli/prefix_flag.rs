use configure_test_support::prelude::*;
use snapbox::cmd::Command;

use super::expected_config_mk;

#[test]
fn long_flag_with_equals() {
    let sandbox = Sandbox::new();
    let prefix = sandbox.dir("opt");

    let assert = Command::configure()
        .current_dir(sandbox.work_dir())
        .arg(format!("--prefix={}", prefix.display()))
        .assert()
        .success();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("PREFIX from argv"), "{stderr}");
    assert_eq!(
        sandbox.read_config_mk(),
        expected_config_mk(&prefix.display().to_string())
    );
}

#[test]
fn short_flag() {
    let sandbox = Sandbox::new();
    let prefix = sandbox.dir("opt");

    Command::configure()
        .current_dir(sandbox.work_dir())
        .arg("-p")
        .arg(&prefix)
        .assert()
        .success();
    assert_eq!(
        sandbox.read_config_mk(),
        expected_config_mk(&prefix.display().to_string())
    );
}

#[test]
fn missing_dir_writes_none() {
    let sandbox = Sandbox::new();
    let missing = sandbox.missing("nowhere");

    Command::configure()
        .current_dir(sandbox.work_dir())
        .arg("--prefix")
        .arg(&missing)
        .assert()
        .success();
    assert_eq!(sandbox.read_config_mk(), expected_config_mk("None"));
}

#[test]
fn missing_flag_is_a_usage_error() {
    let sandbox = Sandbox::new();

    let assert = Command::configure()
        .current_dir(sandbox.work_dir())
        .assert()
        .code(2);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("--prefix <PATH>"), "{stderr}");
    assert!(stderr.contains("Usage:"), "{stderr}");
    assert!(!sandbox.config_mk().exists());
}

#[test]
fn usage_error_leaves_existing_file_alone() {
    let sandbox = Sandbox::new();
    sandbox.write_config_mk("prefix=/from/last/time\n");

    Command::configure()
        .current_dir(sandbox.work_dir())
        .arg("--bogus")
        .assert()
        .code(2);
    assert_eq!(sandbox.read_config_mk(), "prefix=/from/last/time\n");
}
