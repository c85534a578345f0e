//! End-to-end tests for the segplay binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn segplay() -> Command {
    let mut cmd = Command::cargo_bin("segplay").unwrap();
    cmd.env_remove("SEGPLAY_LOG").env_remove("RUST_LOG");
    cmd
}

/// Config file inside `dir` that logs to `dir` as well.
fn write_config(dir: &Path) -> PathBuf {
    let config = dir.join("config.toml");
    let log = dir.join("segplay.log");
    fs::write(
        &config,
        format!("[logging]\nfile = {:?}\n", log.display().to_string()),
    )
    .unwrap();
    config
}

fn write_manifest(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    segplay()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_prints_package_version() {
    segplay()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    segplay().assert().failure();
}

// ============================================================================
// check
// ============================================================================

#[test]
fn check_accepts_valid_manifest() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let manifest = write_manifest(
        dir.path(),
        "page.toml",
        "[[player]]\nvideo_id = \"intro\"\nstart_time = 30\nend_time = 90\n",
    );

    segplay()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 intro"))
        .stdout(predicate::str::contains("0:30 - 1:30"));
}

#[test]
fn check_rejects_invalid_placement() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let manifest = write_manifest(
        dir.path(),
        "page.toml",
        "[[player]]\nvideo_id = \"ok\"\n\n[[player]]\nvideo_id = \"bad\"\nstart_time = 60\nend_time = 10\n",
    );

    segplay()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&manifest)
        .assert()
        .failure()
        .stdout(predicate::str::contains("endTime must be greater than startTime"))
        .stderr(predicate::str::contains("1 of 2 placement(s) invalid"));
}

#[test]
fn check_json_reports_each_placement() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let manifest = write_manifest(
        dir.path(),
        "page.json",
        r#"{"player": [{"video_id": "abc", "start_time": 5}, {"start_time": 1}]}"#,
    );

    let output = segplay()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&manifest)
        .arg("--json")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["valid"], true);
    assert_eq!(reports[0]["start_time"], 5.0);
    assert_eq!(reports[1]["valid"], false);
    assert_eq!(reports[1]["error"], "videoId is required");
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_prints_given_path() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");

    segplay()
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"))
        .stdout(predicate::str::contains("not created yet"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("config.toml");

    segplay()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("progress_interval_ms = 500"));

    segplay()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    segplay()
        .arg("--config")
        .arg(&config)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_effective_settings() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[player]\nseek_step_secs = 5.5\n").unwrap();

    segplay()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seek_step_secs = 5.5"))
        .stdout(predicate::str::contains("boundary_interval_ms = 300"));
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[player\n").unwrap();

    segplay()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

// ============================================================================
// completions and play
// ============================================================================

#[test]
fn completions_for_bash() {
    segplay()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("segplay"));
}

#[test]
fn play_requires_a_terminal() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    segplay()
        .arg("--config")
        .arg(&config)
        .args(["play", "abc", "--start", "10", "--end", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn page_with_no_placements_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let manifest = write_manifest(dir.path(), "empty.toml", "title = \"Nothing\"\n");

    segplay()
        .arg("--config")
        .arg(&config)
        .arg("page")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No placements found"));
}
