//! Integration tests for `digraph inspect`, including stdin input and the
//! input size limit.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Path to the compiled `digraph` binary.
fn digraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("digraph");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn inspect_json(args: &[&str]) -> serde_json::Value {
    let out = Command::new(digraph_bin())
        .args(args)
        .output()
        .expect("run digraph inspect");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    serde_json::from_slice(&out.stdout).expect("valid JSON")
}

#[test]
fn inspect_chain_json() {
    let path = fixture("chain.json");
    let value = inspect_json(&["inspect", path.to_str().expect("path"), "-f", "json"]);
    assert_eq!(value["node_count"], 3);
    assert_eq!(value["edge_count"], 2);
    assert_eq!(value["positioned_nodes"], 3);
    assert_eq!(value["sources"], 1);
    assert_eq!(value["sinks"], 1);
    assert_eq!(value["strongly_connected"], false);
}

#[test]
fn inspect_star_is_strongly_connected() {
    let path = fixture("star.json");
    let value = inspect_json(&["inspect", path.to_str().expect("path"), "-f", "json"]);
    assert_eq!(value["strongly_connected"], true);
    assert_eq!(value["total_weight"], 8.0);
}

#[test]
fn inspect_human_output() {
    let out = Command::new(digraph_bin())
        .arg("inspect")
        .arg(fixture("disconnected.json"))
        .output()
        .expect("run digraph inspect");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("nodes:              4"), "stdout: {stdout}");
    assert!(stdout.contains("strongly_connected: false"), "stdout: {stdout}");
}

#[test]
fn inspect_reads_stdin() {
    let content = std::fs::read(fixture("star.json")).expect("fixture");
    let mut child = Command::new(digraph_bin())
        .args(["inspect", "-", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn digraph inspect");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(&content)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["node_count"], 5);
}

#[test]
fn max_file_size_flag_rejects_large_input() {
    let out = Command::new(digraph_bin())
        .arg("inspect")
        .arg(fixture("chain.json"))
        .args(["--max-file-size", "10"])
        .output()
        .expect("run digraph inspect");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("file too large"), "stderr: {stderr}");
}

#[test]
fn max_file_size_env_var_is_honoured() {
    let out = Command::new(digraph_bin())
        .arg("inspect")
        .arg(fixture("chain.json"))
        .env("DIGRAPH_MAX_FILE_SIZE", "10")
        .output()
        .expect("run digraph inspect");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let out = Command::new(digraph_bin())
        .arg("inspect")
        .arg(fixture("chain.json"))
        .args(["--verbose", "-f", "json"])
        .env_remove("DIGRAPH_LOG")
        .output()
        .expect("run digraph inspect");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("graph loaded"), "stderr: {stderr}");
    serde_json::from_slice::<serde_json::Value>(&out.stdout).expect("stdout stays pure JSON");
}

#[test]
fn quiet_suppresses_info_logs() {
    let out = Command::new(digraph_bin())
        .arg("inspect")
        .arg(fixture("chain.json"))
        .arg("--quiet")
        .env_remove("DIGRAPH_LOG")
        .output()
        .expect("run digraph inspect");
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
}
