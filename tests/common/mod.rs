#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use ci_build_status::BuildReport;
use serde_json::{json, Value};
use tempfile::TempDir;

pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn write_report(dir: &Path, filename: &str, report: &Value) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, serde_json::to_string_pretty(report).unwrap())
        .expect("Failed to write report file");
    path
}

pub fn action(action_type: &str, status: &str) -> Value {
    json!({ "step": 0, "type": action_type, "status": status })
}

pub fn step(name: &str, actions: Vec<Value>) -> Value {
    json!({ "name": name, "actions": actions })
}

pub fn report(steps: Vec<Value>) -> Value {
    json!({ "steps": steps })
}

/// One step per action, named after its position
pub fn linear_report(actions: &[(&str, &str)]) -> Value {
    report(
        actions
            .iter()
            .enumerate()
            .map(|(i, (action_type, status))| {
                step(&format!("step-{}", i), vec![action(action_type, status)])
            })
            .collect(),
    )
}

pub fn to_report(value: Value) -> BuildReport {
    serde_json::from_value(value).expect("Failed to deserialize report")
}
