//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs.

use std::path::Path;
use std::process::{Command, Stdio};

use std::io::Write;

const SCHEDULE: &str = r#"{
  "yesterday": {"subuh": "5:49 AM", "syuruk": "7:09 AM", "zohor": "1:00 PM", "asar": "4:29 PM", "maghrib": "7:20 PM", "isyak": "8:35 PM"},
  "today": {"subuh": "5:50 AM", "syuruk": "7:10 AM", "zohor": "1:00 PM", "asar": "4:30 PM", "maghrib": "7:20 PM", "isyak": "8:35 PM",
            "gregorianDate": "16-Dec-2025", "hijriDate": "1447-06-25"},
  "tomorrow": {"fajr": "05:50:00", "syuruk": "07:10:00", "dhuhr": "13:01:00", "asr": "16:30:00", "maghrib": "19:21:00", "isha": "20:36:00"}
}"#;

/// Run a CLI command and return output.
fn run_cli(config_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_marisolat"))
        .args(args)
        .env("MARISOLAT_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn schedule_file(dir: &Path) -> String {
    let path = dir.join("schedule.json");
    std::fs::write(&path, SCHEDULE).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_now_json_reports_tahrim_before_asar() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = schedule_file(dir.path());
    let (code, stdout, stderr) = run_cli(
        dir.path(),
        &["now", "--schedule", &schedule, "--at", "2025-12-16T16:25", "--json"],
    );
    assert_eq!(code, 0, "now failed: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["current"], "zohor");
    assert_eq!(parsed["next"], "asar");
    assert_eq!(parsed["waktu"]["active"], "Tahrim");
    assert_eq!(parsed["waktu"]["countdown"], "5 minit 0 saat");
    assert_eq!(parsed["status"]["state"], "ready");
}

#[test]
fn test_now_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = schedule_file(dir.path());
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["now", "--schedule", &schedule, "--at", "2025-12-16T06:00"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Disember 2025"));
    assert!(stdout.contains("Waktu Subuh: Fadhilat"));
    assert!(stdout.contains("Sepertiga malam: 2:20 – 5:50"));
}

#[test]
fn test_now_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let (code, _, stderr) = run_cli(
        dir.path(),
        &["now", "--schedule", missing.to_str().unwrap()],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_night_json() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = schedule_file(dir.path());
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["night", "--schedule", &schedule, "--date", "2025-12-16", "--json"],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["night_minutes"], 630);
    assert_eq!(parsed["duration_minutes"], 210);
}

#[test]
fn test_night_for_yesterday_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = schedule_file(dir.path());
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["night", "--schedule", &schedule, "--view", "yesterday"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Sepertiga malam: -"));
}

#[test]
fn test_watch_runs_bounded_ticks() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = schedule_file(dir.path());
    run_cli(dir.path(), &["config", "set", "clock.tick_interval_ms", "10"]);
    let (code, stdout, stderr) = run_cli(
        dir.path(),
        &["watch", "--schedule", &schedule, "--ticks", "2"],
    );
    assert_eq!(code, 0, "watch failed: {stderr}");
    assert!(stdout.lines().count() >= 2);
}

#[test]
fn test_qibla_bearing_for_kuala_lumpur() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["qibla", "--lat", "3.139", "--lng", "101.6869"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Kiblat: 292."), "got {stdout}");
}

#[test]
fn test_qibla_reads_samples_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_marisolat"))
        .args(["qibla", "--lat", "3.139", "--lng", "101.6869"])
        .env("MARISOLAT_CONFIG_DIR", dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"250\n290\n292\n320\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.matches("pulse 40ms").count(), 1);
    assert_eq!(stdout.matches("aligned").count(), 2);
}

#[test]
fn test_qibla_rejects_bad_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["qibla", "--lat", "95", "--lng", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid coordinates"));
}

#[test]
fn test_config_set_get_reset() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "set", "waktu.tahrim_min", "7"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "waktu.tahrim_min"]);
    assert_eq!(stdout.trim(), "7");

    let (code, _, _) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "waktu.tahrim_min"]);
    assert_eq!(stdout.trim(), "5");
}

#[test]
fn test_config_unknown_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_path_uses_override() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains(&*dir.path().to_string_lossy()));
}

#[test]
fn test_config_rejects_unbounded_waktu_minutes() {
    let dir = tempfile::tempdir().unwrap();
    let schedule = schedule_file(dir.path());
    let (code, _, stderr) = run_cli(
        dir.path(),
        &["config", "set", "waktu.fadhilat_min", "10000000000000000"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("waktu.fadhilat_min"));

    let (code, stdout, _) = run_cli(
        dir.path(),
        &["now", "--schedule", &schedule, "--at", "2025-12-16T14:00", "--json"],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["waktu"]["active"], "Ikhtiar");
}
