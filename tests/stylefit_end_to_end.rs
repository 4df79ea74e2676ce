//! End-to-end runs of the `stylefit` binary against a shell-script
//! formatter and an on-disk corpus.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

const CATALOG: &str = r#"{
    "options": {
        "indent.style": { "values": ["tabs", "spaces"], "high_impact": true }
    },
    "standards": [
        { "name": "tabbed", "options": { "indent.style": "tabs" } },
        { "name": "spaced", "options": { "indent.style": "spaces" } }
    ]
}"#;

fn write_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("formatter.sh");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).unwrap();
    path
}

fn write_corpus(dir: &Path) -> PathBuf {
    let corpus = dir.join("corpus");
    fs::create_dir_all(corpus.join("src")).unwrap();
    fs::write(corpus.join("src/a.txt"), "alpha\nbeta\n").unwrap();
    fs::write(corpus.join("src/b.txt"), "gamma\n").unwrap();
    corpus
}

fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(&path, CATALOG).unwrap();
    path
}

#[test]
fn identity_formatter_reaches_a_perfect_score() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(dir.path());
    let catalog = write_catalog(dir.path());
    // `cat` ignores the config path in $1 and echoes stdin: an identity
    // formatter under every configuration.
    let formatter = write_script(dir.path(), "exec cat");

    let assert = Command::cargo_bin("stylefit")
        .unwrap()
        .arg("--corpus")
        .arg(&corpus)
        .arg("--catalog")
        .arg(&catalog)
        .arg("--formatter")
        .arg(&formatter)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // The first-listed standard wins the all-zero tie.
    assert_eq!(config["indent.style"], "tabs");

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("baseline: tabbed"));
    assert!(stderr.contains("score: 0"));
}

#[test]
fn output_file_receives_the_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(dir.path());
    let catalog = write_catalog(dir.path());
    let formatter = write_script(dir.path(), "exec cat");
    let output = dir.path().join("style.json");

    Command::cargo_bin("stylefit")
        .unwrap()
        .arg("--corpus")
        .arg(&corpus)
        .arg("--catalog")
        .arg(&catalog)
        .arg("--formatter")
        .arg(&formatter)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    let config: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert!(config.get("indent.style").is_some());
}

#[test]
fn report_lists_residual_files() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(dir.path());
    let catalog = write_catalog(dir.path());
    // Uppercasing is no identity: every file stays imperfect and the
    // report must say so.
    let formatter = write_script(dir.path(), "exec tr 'a-z' 'A-Z'");

    let assert = Command::cargo_bin("stylefit")
        .unwrap()
        .arg("--corpus")
        .arg(&corpus)
        .arg("--catalog")
        .arg(&catalog)
        .arg("--formatter")
        .arg(&formatter)
        .arg("--report")
        .assert()
        .success();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("files still differing: 2"));
    assert!(stderr.contains("src/a.txt"));
    assert!(stderr.contains("src/b.txt"));
}

#[test]
fn missing_catalog_file_fails_with_io_exit() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(dir.path());
    let formatter = write_script(dir.path(), "exec cat");

    Command::cargo_bin("stylefit")
        .unwrap()
        .arg("--corpus")
        .arg(&corpus)
        .arg("--catalog")
        .arg(dir.path().join("missing.json"))
        .arg("--formatter")
        .arg(&formatter)
        .assert()
        .failure()
        .code(2);
}

#[test]
fn empty_corpus_fails_with_usage_exit() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty");
    fs::create_dir_all(&empty).unwrap();
    let catalog = write_catalog(dir.path());
    let formatter = write_script(dir.path(), "exec cat");

    Command::cargo_bin("stylefit")
        .unwrap()
        .arg("--corpus")
        .arg(&empty)
        .arg("--catalog")
        .arg(&catalog)
        .arg("--formatter")
        .arg(&formatter)
        .assert()
        .failure()
        .code(1);
}
