//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_kairos"))
        .env("KAIROS_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("stdout is not JSON")
}

#[test]
fn test_analyze_json() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["analyze", "--json", "Estou extremamente ansioso e preocupado com o prazo"],
    );
    assert_eq!(code, 0);
    let profile = json(&stdout);
    assert_eq!(profile["dominant_emotion"], "anxiety");
    assert_eq!(profile["intensity"], "high");
}

#[test]
fn test_analyze_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["analyze", "hoje foi um dia normal"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Emotion:   none"));
}

#[test]
fn test_environment_follows_last_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["analyze", "estou irritado com o trânsito"]);
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(dir.path(), &["environment"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["emotion"], "anger");
}

#[test]
fn test_environment_explicit_portuguese_names() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["environment", "--emotion", "tristeza", "--intensity", "baixa"],
    );
    assert_eq!(code, 0);
    let env = json(&stdout);
    assert_eq!(env["emotion"], "sadness");
    assert_eq!(env["intensity"], "low");
}

#[test]
fn test_environment_rejects_unknown_emotion() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["environment", "--emotion", "boredom"]);
    assert_ne!(code, 0);
    assert!(!stderr.is_empty());
}

#[test]
fn test_points_accumulate_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["points", "record", "daily_reflection_deep"]);
    assert_eq!(code, 0);
    let (code, stdout, _) = run_cli(dir.path(), &["points", "record", "made_tea"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["points"], 30);

    let (code, stdout, _) = run_cli(dir.path(), &["points", "status"]);
    assert_eq!(code, 0);
    let state = json(&stdout);
    assert_eq!(state["points"], 30);
    assert_eq!(state["level"], 1);
    assert_eq!(state["recent_activities"][0]["type"], "made_tea");
}

#[test]
fn test_points_recent_limit() {
    let dir = tempfile::tempdir().unwrap();
    for kind in ["gratitude_expressed", "insight_recorded", "compassion_practiced"] {
        let (code, _, _) = run_cli(dir.path(), &["points", "record", kind]);
        assert_eq!(code, 0);
    }
    let (code, stdout, _) = run_cli(dir.path(), &["points", "recent", "--limit", "2"]);
    assert_eq!(code, 0);
    let recent = json(&stdout);
    assert_eq!(recent.as_array().unwrap().len(), 2);
    assert_eq!(recent[0]["points"], 15);
}

#[test]
fn test_scenario_flow() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["scenario", "start"]);
    assert_eq!(code, 0);
    let scenario = json(&stdout);
    let choice_id = scenario["choices"][0]["id"].as_str().unwrap().to_string();

    let (code, stdout, _) = run_cli(dir.path(), &["scenario", "choose", &choice_id]);
    assert_eq!(code, 0);
    assert!(json(&stdout)["presence_level"].is_u64());

    let (code, stdout, _) = run_cli(
        dir.path(),
        &["scenario", "complete", "--reflection", "respirei antes de responder"],
    );
    assert_eq!(code, 0);
    let done = json(&stdout);
    assert_eq!(done["progression"]["points"], 20);

    let (code, stdout, _) = run_cli(dir.path(), &["scenario", "status"]);
    assert_eq!(code, 0);
    let status = json(&stdout);
    assert_eq!(status["state"], "completed");
    assert_eq!(status["completed"], 1);

    let (code, stdout, _) = run_cli(dir.path(), &["scenario", "exit"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("simulator exited"));
}

#[test]
fn test_scenario_abandon_then_start_again() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["scenario", "start"]);
    assert_eq!(code, 0);

    let (code, _, stderr) = run_cli(dir.path(), &["scenario", "start"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("presenting"));

    let (code, stdout, _) = run_cli(dir.path(), &["scenario", "abandon"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("abandoned"));

    let (code, stdout, _) = run_cli(dir.path(), &["scenario", "status"]);
    assert_eq!(code, 0);
    let status = json(&stdout);
    assert_eq!(status["state"], "idle");
    assert_eq!(status["completed"], 0);

    let (code, _, _) = run_cli(dir.path(), &["scenario", "start"]);
    assert_eq!(code, 0);

    let (_, stdout, _) = run_cli(dir.path(), &["points", "status"]);
    assert_eq!(json(&stdout)["points"], 0);
}

#[test]
fn test_scenario_choose_without_start_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["scenario", "choose", "a"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_breathe_prints_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["breathe", "--emotion", "anxiety", "--cycles", "1", "--record"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Inspire"));
    assert!(stdout.contains("done"));
    assert!(stdout.contains("+20 points"));
}

#[test]
fn test_config_set_get_reset() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "set", "progression.fallback_points", "9"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "progression.fallback_points"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "9");

    let (_, stdout, _) = run_cli(dir.path(), &["points", "record", "unlisted"]);
    assert_eq!(json(&stdout)["points"], 9);

    let (code, stdout, _) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("reset"));

    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "progression.fallback_points"]);
    assert_eq!(stdout.trim(), "5");
}

#[test]
fn test_config_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "nope.nothing"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("unused");
    let (code, stdout, _) = run_cli(&data_dir, &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("kairos"));
    assert!(!data_dir.exists());
}
