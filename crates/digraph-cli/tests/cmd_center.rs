//! Integration tests for `digraph center`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

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

fn run_center(file: &str, extra: &[&str]) -> std::process::Output {
    Command::new(digraph_bin())
        .arg("center")
        .arg(fixture(file))
        .args(extra)
        .output()
        .expect("run digraph center")
}

#[test]
fn star_center_is_hub() {
    let out = run_center("star.json", &[]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("center:       0"), "stdout: {stdout}");
    assert!(stdout.contains("eccentricity: 1"), "stdout: {stdout}");
}

#[test]
fn single_node_is_center() {
    let out = run_center("single.json", &["-f", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["center"], 0);
    assert_eq!(value["eccentricity"], 0.0);
}

#[test]
fn all_lists_every_eccentricity() {
    let out = run_center("star.json", &["--all", "--format", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    let ecc = value["eccentricities"].as_object().expect("object");
    assert_eq!(ecc.len(), 5);
    assert_eq!(ecc["0"], 1.0);
    assert_eq!(ecc["4"], 2.0);
}

#[test]
fn disconnected_graph_exits_1() {
    let out = run_center("disconnected.json", &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not strongly connected"), "stderr: {stderr}");
}

#[test]
fn one_way_chain_exits_1() {
    let out = run_center("chain.json", &[]);
    assert_eq!(out.status.code(), Some(1));
}
