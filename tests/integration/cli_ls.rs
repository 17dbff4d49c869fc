use predicates::prelude::*;

use crate::common::{NPM_URL, TestEnv};

#[test]
fn ls_marks_active_registry() {
    let env = TestEnv::new();

    env.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("* npm "))
        .stdout(predicate::str::contains(NPM_URL))
        .stdout(predicate::str::contains("  yarn "))
        .stdout(predicate::str::contains("  taobao "));
}

#[test]
fn ls_aligns_url_column() {
    let env = TestEnv::new();

    let output = env.cmd().arg("ls").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let offsets: Vec<_> = stdout
        .lines()
        .map(|l| l.find("https://").expect("every line has a url"))
        .collect();
    assert!(offsets.len() >= 7);
    assert!(offsets.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn ls_warns_about_unknown_registry() {
    let env = TestEnv::new();
    env.set_active_registry("https://corp.example/npm/");

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("https://corp.example/npm/"))
        .stderr(predicate::str::contains("not in the registry list"))
        .stdout(predicate::str::contains("*").not())
        .stdout(predicate::str::contains("npm"));
}

#[test]
fn ls_fails_on_corrupted_store() {
    let env = TestEnv::new();
    std::fs::write(env.custom_store(), "{ broken").unwrap();

    env.cmd()
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse registry file"));
}
