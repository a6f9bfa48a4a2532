//! End-to-end tests for the `twentyfour` binary

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;

fn twentyfour() -> Command {
    Command::new(cargo::cargo_bin!("twentyfour"))
}

#[test]
fn test_verify_success() {
    twentyfour()
        .args(["verify", "6,6,6,6", "6*6-6-6"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Correct! Your expression evaluates to 24.",
        ));
}

#[test]
fn test_verify_incorrect() {
    twentyfour()
        .args(["verify", "1,2,3,4", "(1+2+3+4)"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Incorrect: Your expression evaluates to 10. Try again.",
        ));
}

#[test]
fn test_verify_invalid_expression_is_not_a_failure() {
    twentyfour()
        .args(["verify", "1,2,3,4", "-1+2+3*4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid mathematical expression."));

    twentyfour()
        .args(["verify", "4,3,3,1", "4/(3-3)+1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid mathematical expression."));
}

#[test]
fn test_verify_wrong_numbers() {
    twentyfour()
        .args(["verify", "1,2,3,4", "12*2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid Expression: Your expression must use exactly these four numbers: [1, 2, 3, 4]",
        ));
}

#[test]
fn test_invalid_hand_fails() {
    twentyfour()
        .args(["hint", "25,3,4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hand '25,3,4'"))
        .stderr(predicate::str::contains("A hand needs exactly 4 cards, got 3"));
}

#[test]
fn test_hint() {
    twentyfour()
        .args(["hint", "4,6,2,8"])
        .assert()
        .success()
        .stdout("(4+(6*2))+8\n");

    twentyfour()
        .args(["hint", "1,1,1,1"])
        .assert()
        .success()
        .stdout("No solution found\n");
}

#[test]
fn test_solutions() {
    twentyfour()
        .args(["solutions", "1,5,5,5"])
        .assert()
        .success()
        .stdout("(5-(1/5))*5\n");
}

#[test]
fn test_deal_with_seed_is_reproducible() {
    let first = twentyfour().args(["deal", "--seed", "17"]).output();
    let second = twentyfour().args(["deal", "--seed", "17"]).output();
    assert!(first.is_ok() && second.is_ok());
    if let (Ok(first), Ok(second)) = (first, second) {
        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
        assert!(String::from_utf8_lossy(&first.stdout).contains("Values: ["));
    }
}

#[test]
fn test_play_session() {
    twentyfour()
        .args(["play", "--seed", "4"])
        .write_stdin("\nhint\nnew\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Please enter an arithmetic expression."))
        .stdout(predicate::str::contains("Hint: "))
        .stdout(predicate::str::contains("Cards: ").count(2));
}
