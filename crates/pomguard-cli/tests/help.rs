use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the pomguard binary.
#[allow(deprecated)]
fn pomguard_cmd() -> Command {
    Command::cargo_bin("pomguard").unwrap()
}

#[test]
fn help_works() {
    pomguard_cmd().arg("--help").assert().success();
}

#[test]
fn check_help_lists_its_flags() {
    pomguard_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--manifest"))
        .stdout(predicate::str::contains("--report-out"))
        .stdout(predicate::str::contains("--skip"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    pomguard_cmd().assert().failure();
}
