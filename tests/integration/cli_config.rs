use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn config_show_defaults() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package manager:   npm"))
        .stdout(predicate::str::contains("Probe timeout:     5000 ms"))
        .stdout(predicate::str::contains("(0 entries)"));
}

#[test]
fn config_set_package_manager() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "package_manager", "yarn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set package_manager = yarn"));

    env.cmd()
        .args(["config", "get", "package_manager"])
        .assert()
        .success()
        .stdout("yarn\n");
}

#[test]
fn config_set_probe_timeout() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "probe_timeout_ms", "750"])
        .assert()
        .success();

    env.cmd()
        .args(["config", "get", "probe_timeout_ms"])
        .assert()
        .success()
        .stdout("750\n");
}

#[test]
fn config_set_invalid_key() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "nonexistent_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn config_set_invalid_value() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "package_manager", "pnpm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid package_manager"));

    env.cmd()
        .args(["config", "set", "probe_timeout_ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid probe_timeout_ms"));
}
