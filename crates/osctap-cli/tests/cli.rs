use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("osctap"))
}

#[test]
fn help_names_the_port_and_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("PORT").and(contains("--json")).and(contains("--timeout-ms")));
}

#[test]
fn version_prints_package_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_out_of_range_port() {
    cmd().arg("70000").assert().failure();
}

#[test]
fn rejects_non_numeric_port() {
    cmd().arg("nine-thousand").assert().failure();
}

#[test]
fn rejects_zero_timeout() {
    cmd()
        .arg("--timeout-ms")
        .arg("0")
        .assert()
        .failure()
        .stderr(contains("timeout-ms"));
}
