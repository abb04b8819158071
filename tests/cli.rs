//! # CLI Tests
//!
//! Runs the built binary. Output is captured by the test, so stderr is never
//! a terminal and the prompt always fails to start; that path is what these
//! tests cover.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use assert_cmd::Command;
use predicates::prelude::*;

fn yesno() -> Command {
    Command::cargo_bin("yesno").unwrap()
}

#[test]
fn test_no_terminal_reports_error() {
    yesno()
        .arg("Proceed?")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error running program:"))
        .stdout(predicate::str::contains("not a terminal"));
}

#[test]
fn test_no_terminal_without_arguments() {
    yesno()
        .assert()
        .code(1)
        .stdout(predicate::str::is_match(r"^Error running program: .+\n$").unwrap());
}

#[test]
fn test_debug_args_listing_goes_to_stderr() {
    yesno()
        .args(["--debug-args", "Proceed?", "extra"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Arg 1 is Proceed?"))
        .stderr(predicate::str::contains("Arg 2 is extra"))
        .stdout(predicate::str::contains("Arg 1").not());
}

#[test]
fn test_extra_arguments_are_silent_by_default() {
    yesno()
        .args(["Proceed?", "extra"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Arg 1").not());
}

#[test]
fn test_completions() {
    yesno()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yesno"));
}

#[test]
fn test_help_lists_keys() {
    yesno()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer yes / no immediately"))
        .stdout(predicate::str::contains("--exit-status"));
}

// =============================================================================
// Argument parsing
// =============================================================================

#[test]
fn test_question_may_start_with_hyphen() {
    yesno()
        .args(["--exit-status", "--debug-args", "-f the build dir?", "-x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Arg 1 is -f the build dir?"))
        .stderr(predicate::str::contains("Arg 2 is -x"))
        .stdout(predicate::str::starts_with("Error running program:"));
}

#[test]
fn test_usage_error_does_not_look_like_no() {
    yesno()
        .args(["--exit-status", "--completions", "nosuchshell"])
        .assert()
        .code(64)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nosuchshell"));
}

#[test]
fn test_version_exits_zero() {
    yesno()
        .args(["--exit-status", "--version"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("yesno"));
}
