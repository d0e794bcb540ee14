//! Integration tests for the headless vault commands.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Writes a logged-in session into the given PWX_HOME.
fn write_session(home: &TempDir) {
    fs::write(
        home.path().join("session.json"),
        json!({"token": "tok_1", "user": {"id": 1, "username": "vasya"}}).to_string(),
    )
    .unwrap();
}

#[test]
fn test_list_requires_login() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("pwx")
        .env("PWX_HOME", home.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"))
        .stderr(predicate::str::contains("pwx login"));
}

#[tokio::test]
async fn test_list_renders_entries() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    write_session(&home);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user-pass/"))
        .and(header("authorization", "Bearer tok_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "host": "example.com", "login": "admin", "hashPass": "hunter2", "isLeaked": false},
            {"id": 2, "host": "mail.ru", "login": "vasya", "hashPass": "qwerty", "isLeaked": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("pwx")
        .env("PWX_HOME", home.path())
        .env("PWX_SERVER_URL", server.uri())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com"))
        .stdout(predicate::str::contains("mail.ru"))
        .stdout(predicate::str::contains("hunter2"))
        .stdout(predicate::str::contains("yes"));
}

#[tokio::test]
async fn test_list_empty_vault() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    write_session(&home);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user-pass/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("pwx")
        .env("PWX_HOME", home.path())
        .env("PWX_SERVER_URL", server.uri())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No passwords found."));
}

#[tokio::test]
async fn test_add_posts_draft_and_prints_id() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    write_session(&home);
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user-pass"))
        .and(header("authorization", "Bearer tok_1"))
        .and(body_json(json!({
            "host": "example.com",
            "login": "admin",
            "hashPass": "s3cret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "host": "example.com",
            "login": "admin",
            "hashPass": "s3cret",
            "isLeaked": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("pwx")
        .env("PWX_HOME", home.path())
        .env("PWX_SERVER_URL", server.uri())
        .args(["add", "--host", "example.com", "--login", "admin"])
        .write_stdin("s3cret\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry 3 for example.com"));
}

#[tokio::test]
async fn test_update_sends_only_changed_fields() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    write_session(&home);
    let server = MockServer::start().await;

    // Exact body match: an update of one field must serialize only that field
    Mock::given(method("PUT"))
        .and(path("/user-pass/5"))
        .and(header("authorization", "Bearer tok_1"))
        .and(body_json(json!({"host": "new.example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "host": "new.example.com",
            "login": "admin",
            "hashPass": "hunter2",
            "isLeaked": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("pwx")
        .env("PWX_HOME", home.path())
        .env("PWX_SERVER_URL", server.uri())
        .args(["update", "5", "--host", "new.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry 5"));
}

#[test]
fn test_update_without_fields_fails() {
    let home = TempDir::new().unwrap();
    write_session(&home);

    cargo_bin_cmd!("pwx")
        .env("PWX_HOME", home.path())
        .args(["update", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[tokio::test]
async fn test_delete_with_yes_flag() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    write_session(&home);
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/user-pass/5"))
        .and(header("authorization", "Bearer tok_1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("pwx")
        .env("PWX_HOME", home.path())
        .env("PWX_SERVER_URL", server.uri())
        .args(["delete", "5", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry 5"));
}

#[tokio::test]
async fn test_delete_declined_at_prompt() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    write_session(&home);
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    cargo_bin_cmd!("pwx")
        .env("PWX_HOME", home.path())
        .env("PWX_SERVER_URL", server.uri())
        .args(["delete", "5"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));
}
