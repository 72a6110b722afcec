//! Integration tests for Repograph
//!
//! These tests run the full pipeline against a synthetic tree and check the
//! serialized form the presentation layer consumes.

use std::fs;
use std::process::Command;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use repograph_analyzer::{analyze_repo_at, AnalyzerConfig};

fn write_tree(root: &std::path::Path, structure: &[(&str, &str)]) {
    for (path, content) in structure {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("repograph"));
    assert!(stdout.contains("Repository structure and import graph analyzer"));
}

/// Test the serialized form consumed by the presentation layer
#[tokio::test]
async fn test_serialized_graph_shape() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(
        root,
        &[
            ("src/main.py", ""),
            ("src/util.py", "from src import main\n"),
            ("node_modules/stray.js", ""),
        ],
    );

    let config = AnalyzerConfig::default();
    let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let result = analyze_repo_at(root, &config, stamp).await.unwrap();

    let value = serde_json::to_value(&result).unwrap();

    let meta = &value["meta"];
    assert_eq!(
        meta["repo"],
        root.file_name().unwrap().to_string_lossy().as_ref()
    );
    assert_eq!(meta["generatedAt"], "2024-03-01T09:00:00Z");
    assert_eq!(meta["fileCount"], 2);
    assert_eq!(meta["dirCount"], 2);

    let nodes = value["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 4);
    assert!(nodes.iter().all(|n| {
        let kind = n["kind"].as_str().unwrap();
        kind == "dir" || kind == "file"
    }));
    // Directory nodes carry no `file` field; file nodes do.
    for node in nodes {
        match node["kind"].as_str().unwrap() {
            "dir" => assert!(node.get("file").is_none()),
            _ => assert!(node["file"].as_str().is_some()),
        }
    }

    let edges = value["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 4);
    let import_count = edges
        .iter()
        .filter(|e| e["type"].as_str() == Some("imports"))
        .count();
    assert_eq!(import_count, 1);
    assert!(edges.iter().all(|e| {
        e["from"].as_str().is_some() && e["to"].as_str().is_some()
    }));
}

/// Test that every edge endpoint references a node in the result
#[tokio::test]
async fn test_edge_endpoints_exist_in_node_set() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(
        root,
        &[
            ("app.py", "import lib.helpers\n"),
            ("lib/helpers.py", "import app\n"),
            ("lib/data.csv", "1,2,3\n"),
        ],
    );

    let config = AnalyzerConfig::default();
    let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let result = analyze_repo_at(root, &config, stamp).await.unwrap();

    let ids: std::collections::HashSet<&str> =
        result.nodes.iter().map(|n| n.id.as_str()).collect();
    assert!(ids.contains(repograph_core::NodeId::dir(root).as_str()));
    for edge in &result.edges {
        assert!(ids.contains(edge.from.as_str()));
        assert!(ids.contains(edge.to.as_str()));
    }
}

/// Test the CLI end to end: analyze a tree and write the JSON output
#[test]
fn test_cli_analyze_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.py", "import b\n"), ("b.py", "")]);
    let out = root.join("out/graph.json");

    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "--root",
            root.to_str().unwrap(),
            "analyze",
            "--out",
            out.to_str().unwrap(),
        ])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "{:?}", output);
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["meta"]["fileCount"], 2);
    assert_eq!(
        json["edges"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|e| e["type"] == "imports")
            .count(),
        1
    );
}

/// Test that a missing root fails without producing output
#[test]
fn test_cli_missing_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");
    let out = temp_dir.path().join("graph.json");

    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "--root",
            missing.to_str().unwrap(),
            "analyze",
            "--out",
            out.to_str().unwrap(),
        ])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(!out.exists());
}
