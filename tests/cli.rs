use assert_cmd::Command;
use predicates::prelude::*;

fn fencestrip() -> Command {
    Command::cargo_bin("fencestrip").unwrap()
}

#[test]
fn test_print_config_lists_builtin_targets() {
    fencestrip()
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("base_directory"))
        .stdout(predicate::str::contains("accordion.jsx"))
        .stdout(predicate::str::contains("textarea.jsx"));
}

#[test]
fn test_rejects_positional_paths() {
    fencestrip().arg("card.jsx").assert().failure().code(2);
}

#[test]
fn test_help_describes_tool() {
    fencestrip()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

// The built-in directory only exists on the machine the targets were
// written for, so elsewhere the first file is missing and the run stops.
#[cfg(not(windows))]
#[test]
fn test_missing_directory_aborts_on_first_file() {
    fencestrip()
        .arg("--output-format")
        .arg("plain")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Nettoyé").not())
        .stderr(predicate::str::contains("accordion.jsx"));
}

#[cfg(not(windows))]
#[test]
fn test_dry_run_also_stops_on_missing_file() {
    fencestrip()
        .args(["--dry-run", "--quiet"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}
