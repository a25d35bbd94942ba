use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn e2c(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("e2c").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_put_then_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    e2c(temp_dir.path())
        .args(["put", "hello", "bonjour"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    e2c(temp_dir.path())
        .args(["get", "hello"])
        .assert()
        .success()
        .stdout("bonjour\n");
}

#[test]
fn test_get_is_case_insensitive() {
    let temp_dir = tempfile::tempdir().unwrap();

    e2c(temp_dir.path())
        .args(["put", "Hello", "world"])
        .assert()
        .success();

    e2c(temp_dir.path())
        .args(["get", "HELLO"])
        .assert()
        .success()
        .stdout("world\n");
}

#[test]
fn test_get_unknown_key_prints_empty_line() {
    let temp_dir = tempfile::tempdir().unwrap();

    e2c(temp_dir.path())
        .args(["get", "nothing"])
        .assert()
        .success()
        .stdout("\n");

    // The lookup created the default intent as an empty object
    let created = temp_dir.path().join("json/data/default.json");
    assert_eq!(fs::read_to_string(created).unwrap(), "{}\n");
}

#[test]
fn test_backing_file_is_plain_json() {
    let temp_dir = tempfile::tempdir().unwrap();

    e2c(temp_dir.path())
        .args(["put", "Greeting", "Hello There"])
        .assert()
        .success();
    e2c(temp_dir.path())
        .args(["put", "farewell", "Bye"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("json/data/default.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["greeting"], "Hello There");
    assert_eq!(parsed["farewell"], "Bye");
    assert!(parsed.get("Greeting").is_none());
    assert!(content.contains("\n  \"greeting\": \"Hello There\""));
}

#[test]
fn test_repeated_put_overwrites() {
    let temp_dir = tempfile::tempdir().unwrap();

    for value in ["a", "b"] {
        e2c(temp_dir.path())
            .args(["put", "k", value])
            .assert()
            .success();
    }

    e2c(temp_dir.path())
        .args(["get", "k"])
        .assert()
        .success()
        .stdout("b\n");
}

#[test]
fn test_unwritable_data_dir_prints_error_and_exits_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    // A regular file where the data directory's parent should be
    fs::write(temp_dir.path().join("json"), "").unwrap();

    e2c(temp_dir.path())
        .args(["put", "k", "v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IO error"));

    e2c(temp_dir.path())
        .args(["get", "k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IO error"));
}

#[test]
fn test_malformed_intent_file_prints_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("json/data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("default.json"), "[1, 2, 3]").unwrap();

    e2c(temp_dir.path())
        .args(["get", "k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Serialization error"));

    // The broken file is left as it was
    assert_eq!(
        fs::read_to_string(data_dir.join("default.json")).unwrap(),
        "[1, 2, 3]"
    );
}

#[test]
fn test_data_dir_is_not_read_from_env() {
    let temp_dir = tempfile::tempdir().unwrap();
    let elsewhere = temp_dir.path().join("elsewhere");

    e2c(temp_dir.path())
        .env("E2C_DATA_DIR", &elsewhere)
        .env("E2C_DEFAULT_INTENT", "other")
        .args(["put", "k", "v"])
        .assert()
        .success();

    assert!(temp_dir.path().join("json/data/default.json").exists());
    assert!(!elsewhere.exists());
}

#[test]
fn test_final_sigma_key_matches_per_char_lowercase() {
    let temp_dir = tempfile::tempdir().unwrap();

    e2c(temp_dir.path())
        .args(["put", "ΟΔΟΣ", "street"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("json/data/default.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["οδοσ"], "street");

    e2c(temp_dir.path())
        .args(["get", "οδοσ"])
        .assert()
        .success()
        .stdout("street\n");
}

#[test]
fn test_missing_arguments_fail_before_touching_disk() {
    let temp_dir = tempfile::tempdir().unwrap();

    e2c(temp_dir.path())
        .args(["put", "only-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<VALUE>"));

    assert!(!temp_dir.path().join("json").exists());
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();

    e2c(temp_dir.path())
        .args(["-v", "get", "k"])
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains("creating intent file"));
}

#[test]
fn test_verbose_overrides_rust_log() {
    let temp_dir = tempfile::tempdir().unwrap();

    e2c(temp_dir.path())
        .env("RUST_LOG", "error")
        .args(["--verbose", "put", "k", "v"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("writing intent file"));
}
