use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn current_prints_registry_name() {
    let env = TestEnv::new();

    env.cmd().arg("current").assert().success().stdout("npm\n");
}

#[test]
fn current_prints_raw_url_when_unknown() {
    let env = TestEnv::new();
    env.set_active_registry("https://corp.example/npm");

    env.cmd()
        .arg("current")
        .assert()
        .success()
        .stdout("https://corp.example/npm\n");
}

#[test]
fn current_matches_custom_registry() {
    let env = TestEnv::new();
    env.add_registry("corp", "https://corp.example/npm");
    env.set_active_registry("https://corp.example/npm");

    env.cmd().arg("current").assert().success().stdout("corp\n");
}

#[test]
fn current_show_url() {
    let env = TestEnv::new();

    env.cmd()
        .args(["current", "--show-url"])
        .assert()
        .success()
        .stdout("https://registry.npmjs.org/\n");
}

#[test]
fn yarn_falls_back_to_npm_registry_server() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "set", "package_manager", "yarn"])
        .assert()
        .success();

    env.cmd().arg("current").assert().success().stdout("yarn\n");
}

#[test]
fn home_of_unknown_registry_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["home", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'nope'"));
}

#[test]
fn home_without_home_page() {
    let env = TestEnv::new();
    env.add_registry("bare", "https://bare.example");

    env.cmd()
        .args(["home", "bare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has no home page"));
}
