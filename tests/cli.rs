// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs the `nextdraw-canvas` binary and checks its console contract.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use nextdraw_canvas::{CanvasSpec, Document, OUTPUT_FILE_NAME};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nextdraw-canvas"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_path_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path());
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{stdout}");

    let expected_path = dir.path().canonicalize().unwrap().join(OUTPUT_FILE_NAME);
    assert_eq!(lines[0], format!("Wrote: {}", expected_path.display()));
    assert_eq!(
        lines[1],
        serde_json::to_string(&CanvasSpec::NEXTDRAW.layout().summary()).unwrap()
    );

    let written = fs::read_to_string(&expected_path).unwrap();
    assert_eq!(written, Document::new(&CanvasSpec::NEXTDRAW.layout()).to_string());
}

#[test]
fn overwrites_existing_template() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(OUTPUT_FILE_NAME);
    fs::write(&target, "stale").unwrap();

    let output = run_in(dir.path());
    assert!(output.status.success(), "{output:?}");
    assert!(fs::read_to_string(&target).unwrap().starts_with("<?xml"));
}

#[test]
fn write_failure_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(OUTPUT_FILE_NAME)).unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to write canvas template"), "{stderr}");
}
