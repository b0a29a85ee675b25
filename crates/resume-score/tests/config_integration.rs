//! Configuration integration tests.
//!
//! Config discovery, precedence, and how settings reach the `score` command,
//! checked through the compiled binary. `info --json` reports the values that
//! were actually loaded.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const WEAK_RESUME: &str = r#"{"personalInfo": {"firstName": "Ada"}}"#;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RESUME_SCORE_MIN_SCORE")
        .env_remove("RESUME_SCORE_MAX_INPUT_BYTES");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert!(json["config"]["min_score"].is_null());
    assert_eq!(json["config"]["max_input_bytes"], 5 * 1024 * 1024);
}

#[test]
fn discovers_dotfile_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".resume-score.toml"), "min_score = 70\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["min_score"], 70);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".resume-score.toml"), "{reported}");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".resume-score.toml"), "min_score = 40\n").unwrap();
    fs::write(tmp.path().join("resume-score.toml"), "min_score = 80\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["min_score"], 80);
}

#[test]
fn discovers_yaml_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("applications").join("2026");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        tmp.path().join(".resume-score.yaml"),
        "log_level: debug\nmax_input_bytes: 4096\n",
    )
    .unwrap();

    let json = info_json(&nested);

    assert_eq!(json["config"]["log_level"], "debug");
    assert_eq!(json["config"]["max_input_bytes"], 4096);
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(tmp.path().join(".resume-score.toml"), "min_score = 90\n").unwrap();

    let json = info_json(&src);

    assert!(json["config"]["min_score"].is_null());
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".resume-score.toml"), "min_score = 40\n").unwrap();
    let explicit = tmp.path().join("strict.toml");
    fs::write(&explicit, "min_score = 95\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_score"], 95);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("strict.toml"), "{reported}");
}

#[test]
fn env_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".resume-score.toml"), "min_score = 40\n").unwrap();

    let output = cmd()
        .env("RESUME_SCORE_MIN_SCORE", "65")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_score"], 65);
}

#[test]
fn disable_input_limit_removes_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".resume-score.toml"),
        "max_input_bytes = 10\ndisable_input_limit = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
}

#[test]
fn lexicon_additions_are_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".resume-score.toml"),
        "[lexicon]\ncliches = [\"rockstar\", \"ninja\"]\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(
        json["config"]["lexicon_additions"],
        serde_json::json!([["cliches", 2]])
    );
}

// =============================================================================
// Settings reaching `score`
// =============================================================================

#[test]
fn configured_min_score_gates_score() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".resume-score.toml"), "min_score = 90\n").unwrap();
    fs::write(tmp.path().join("resume.json"), WEAK_RESUME).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "resume.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL:"))
        .stderr(predicate::str::contains("min: 90"));
}

#[test]
fn flag_min_score_overrides_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".resume-score.toml"), "min_score = 90\n").unwrap();
    fs::write(tmp.path().join("resume.json"), WEAK_RESUME).unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "score",
            "resume.json",
            "--min-score",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn configured_input_limit_rejects_large_resume() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".resume-score.toml"), "max_input_bytes = 8\n").unwrap();
    fs::write(tmp.path().join("resume.json"), WEAK_RESUME).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "resume.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn configured_soft_skill_is_flagged() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".resume-score.toml"),
        "[lexicon]\nsoft_skills = [\"juggling\"]\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("resume.json"),
        r#"{"skills": [{"name": "Juggling", "category": "Other"}]}"#,
    )
    .unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--json",
            "score",
            "resume.json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = json["breakdown"]["skillsKeywords"]["actionableItems"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["id"].as_str())
        .collect();
    assert!(ids.contains(&"skills-soft-heavy"), "{ids:?}");
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".resume-score.toml"), "min_score = [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn blank_lexicon_term_fails_score() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".resume-score.toml"),
        "[lexicon]\naction_verbs = [\"  \"]\n",
    )
    .unwrap();
    fs::write(tmp.path().join("resume.json"), WEAK_RESUME).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "resume.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lexicon"));
}
