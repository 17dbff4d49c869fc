use std::fs;

use predicates::prelude::*;

use crate::common::{TestEnv, YARN_URL};

#[test]
fn use_switches_registry() {
    let env = TestEnv::new();

    env.cmd()
        .args(["use", "yarn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registry has been set to: yarn"))
        .stdout(predicate::str::contains("* yarn "));

    assert_eq!(env.active_registry().as_deref(), Some(YARN_URL));
}

#[test]
fn use_without_name_prints_usage() {
    let env = TestEnv::new();

    env.cmd()
        .arg("use")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: nrm use <registry>"));

    assert_eq!(env.active_registry(), None);
}

#[test]
fn use_unknown_registry_fails_before_switching() {
    let env = TestEnv::new();

    env.cmd()
        .args(["use", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("registry 'nope' is not in the registry list"));

    assert_eq!(env.active_registry(), None);
}

#[test]
fn use_local_replaces_registry_line() {
    let env = TestEnv::new();
    env.add_registry("x", "https://new");
    fs::write(env.npmrc(), "registry=https://old/\nfoo=bar").unwrap();

    env.cmd()
        .args(["use", "x", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    assert_eq!(
        fs::read_to_string(env.npmrc()).unwrap(),
        "registry=https://new/\nfoo=bar"
    );
    assert_eq!(env.active_registry().as_deref(), Some("https://new/"));
}

#[test]
fn use_local_creates_npmrc() {
    let env = TestEnv::new();

    env.cmd().args(["use", "-l", "yarn"]).assert().success();

    assert_eq!(
        fs::read_to_string(env.npmrc()).unwrap(),
        format!("registry={YARN_URL}")
    );
}

#[test]
fn use_without_local_leaves_npmrc_alone() {
    let env = TestEnv::new();

    env.cmd().args(["use", "yarn"]).assert().success();

    assert!(!env.npmrc().exists());
}
