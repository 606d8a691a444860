//! End-to-end tests driving the binary against a throwaway data directory

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trackfunds(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trackfunds").unwrap();
    cmd.env("TRACKFUNDS_DATA_DIR", dir.path());
    cmd.env_remove("TRACKFUNDS_PASSWORD");
    cmd
}

fn signup_and_login(dir: &TempDir) {
    trackfunds(dir)
        .args(["signup", "user@example.com", "alex_r", "--password", "Abc12345!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created successfully"));

    trackfunds(dir)
        .args(["login", "user@example.com", "--password", "Abc12345!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful"));
}

#[test]
fn signup_login_and_whoami() {
    let dir = TempDir::new().unwrap();
    signup_and_login(&dir);

    trackfunds(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as alex_r"));
}

#[test]
fn login_with_wrong_password_fails() {
    let dir = TempDir::new().unwrap();
    trackfunds(&dir)
        .args(["signup", "user@example.com", "alex_r", "--password", "Abc12345!"])
        .assert()
        .success();

    trackfunds(&dir)
        .args(["login", "user@example.com", "--password", "wrong-pass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"));
}

#[test]
fn signup_rejects_weak_password() {
    let dir = TempDir::new().unwrap();
    trackfunds(&dir)
        .args(["signup", "user@example.com", "alex_r", "--password", "password"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("uppercase"));
}

#[test]
fn adding_transactions_requires_login() {
    let dir = TempDir::new().unwrap();
    trackfunds(&dir)
        .args(["txn", "add", "expense", "Rent", "1500", "--category", "Housing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn add_list_and_budget_flow() {
    let dir = TempDir::new().unwrap();
    signup_and_login(&dir);

    trackfunds(&dir)
        .args(["budget", "set", "1000"])
        .assert()
        .success();

    trackfunds(&dir)
        .args([
            "txn", "add", "income", "Salary", "5000",
            "--category", "Job",
            "--date", "2025-04-01 00:00:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));

    trackfunds(&dir)
        .args([
            "txn", "add", "expense", "Rent", "1500",
            "--category", "Housing",
            "--date", "2025-04-02 00:00:00",
        ])
        .assert()
        .success();

    trackfunds(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Rs.1500.00"));

    // base 1000 + 5000 income - 1500 expense
    trackfunds(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income:   Rs.5000.00"))
        .stdout(predicate::str::contains("Total expenses: Rs.1500.00"))
        .stdout(predicate::str::contains("Rs.4500.00"));

    trackfunds(&dir)
        .args(["report", "categories", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Housing"))
        .stdout(predicate::str::contains("Rs.1500.00"));

    trackfunds(&dir)
        .args(["report", "recent", "--count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn delete_restores_budget() {
    let dir = TempDir::new().unwrap();
    signup_and_login(&dir);

    trackfunds(&dir)
        .args([
            "txn", "add", "expense", "Rent", "1500",
            "--category", "Housing",
            "--date", "2025-04-02 00:00:00",
        ])
        .assert()
        .success();

    trackfunds(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rs.-1500.00"));

    // recover the id from the prefs file rather than scraping the table
    let prefs: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("prefs.json")).unwrap(),
    )
    .unwrap();
    let id = prefs["transactions"][0]["id"].as_str().unwrap().to_string();

    trackfunds(&dir)
        .args(["txn", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction deleted successfully"));

    trackfunds(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));

    trackfunds(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rs.0.00"));
}

#[test]
fn edit_updates_listing() {
    let dir = TempDir::new().unwrap();
    signup_and_login(&dir);

    trackfunds(&dir)
        .args([
            "txn", "add", "expense", "Rent", "1500",
            "--category", "Housing",
            "--date", "2025-04-02 00:00:00",
        ])
        .assert()
        .success();

    let prefs: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("prefs.json")).unwrap(),
    )
    .unwrap();
    let id = prefs["transactions"][0]["id"].as_str().unwrap().to_string();

    trackfunds(&dir)
        .args(["txn", "edit", &id, "--amount", "1600", "--description", "April rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction updated"));

    trackfunds(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("April rent"))
        .stdout(predicate::str::contains("Rs.1600.00"));
}
