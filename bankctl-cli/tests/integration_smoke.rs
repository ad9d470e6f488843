//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

// === Auth Command Tests ===

#[test]
fn test_register_help() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("register").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Email address to register"));
}

#[test]
fn test_login_help() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("login").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Email address"));
}

// === Account Command Tests ===

#[test]
fn test_account_create_help() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("account").arg("create").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Opening balance"));
}

#[test]
fn test_account_list_help() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("account").arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("List all accounts"));
}

// === Transaction Command Tests ===

#[test]
fn test_deposit_help() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("deposit").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Account ID"));
}

#[test]
fn test_withdraw_help() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("withdraw").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("at most 2 decimal places"));
}

#[test]
fn test_balance_help() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("balance").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Account ID"));
}

// === Serve Command Test ===

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

// === Validation (no database needed) ===

#[test]
fn test_register_rejects_short_password() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("register").arg("a@x.com").arg("abc");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at least 6 characters"));
}

#[test]
fn test_register_rejects_invalid_email() {
    let mut cmd = Command::cargo_bin("bankctl").unwrap();
    cmd.arg("register").arg("not-an-email").arg("secret1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a valid email address"));
}
