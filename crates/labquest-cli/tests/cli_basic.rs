//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a temporary data
//! directory and verify outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "labquest-cli", "--quiet", "--"])
        .args(["--data-dir", data_dir.to_str().unwrap()])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_progress_level() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["progress", "level", "--xp", "1000"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "3");
}

#[test]
fn test_progress_streak_empty_store() {
    let dir = TempDir::new().unwrap();
    let user = "3e4c1f4a-0f7e-4f7e-9a3a-000000000001";
    let (stdout, _, code) = run_cli(dir.path(), &["progress", "streak", "--user", user]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn test_badges_list_empty_store() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["badges", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn test_badges_evaluate_awards_from_seeded_files() {
    let dir = TempDir::new().unwrap();
    let user = "3e4c1f4a-0f7e-4f7e-9a3a-000000000001";

    std::fs::write(
        dir.path().join("attempts.json"),
        format!(
            r#"[{{
                "id": "3e4c1f4a-0f7e-4f7e-9a3a-00000000000a",
                "userId": "{user}",
                "experimentId": "3e4c1f4a-0f7e-4f7e-9a3a-00000000000b",
                "experimentName": "Ohms Law Laboratory",
                "subject": "Physics",
                "status": "completed",
                "score": 100.0,
                "completedAt": "2024-03-10T14:30:00Z"
            }}]"#
        ),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("badges.json"),
        r#"[{
            "id": "3e4c1f4a-0f7e-4f7e-9a3a-000000000010",
            "name": "First Steps",
            "description": "Complete your first experiment",
            "icon": "flask",
            "tier": "bronze",
            "xpRequirement": 0,
            "criteria": {"experimentsCompleted": 1}
        }]"#,
    )
    .unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["badges", "evaluate", "--user", user]);
    assert_eq!(code, 0);
    let newly: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(newly[0]["name"], "First Steps");

    // Re-running awards nothing further.
    let (stdout, _, code) = run_cli(dir.path(), &["badges", "evaluate", "--user", user]);
    assert_eq!(code, 0);
    let again: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(again, serde_json::json!([]));
}
