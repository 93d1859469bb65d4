use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r#"{
    "teams": [
        { "name": "McLaren", "engine": "Mercedes", "isTopTeam": true },
        { "name": "Aston Martin", "engine": "Mercedes" }
    ],
    "drivers": [
        { "name": "Alonso", "number": 14, "country": "Spain", "teamIndex": 1 },
        { "name": "Norris", "number": 4, "country": "United Kingdom", "teamIndex": 0,
          "isTopDriver": true, "homeTrack": "Silverstone" }
    ]
}"#;

/// Run the binary from `dir` with the user config directory pointed at it too,
/// so nothing outside the temp dir is picked up.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_grand-prixdictor"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("OPENWEATHER_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn dir_with_config() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("f1_config.json"), CONFIG).unwrap();
    dir
}

#[test]
fn test_no_arguments_is_usage_error() {
    let dir = dir_with_config();
    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Incorrect usage"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_too_many_arguments_is_usage_error() {
    let dir = dir_with_config();
    let output = run(dir.path(), &["Monza", "dry", "extra"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_condition_is_usage_error() {
    let dir = dir_with_config();
    let output = run(dir.path(), &["Monza", "snowy"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("snowy"));
}

#[test]
fn test_help_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--no-weather"));
}

#[test]
fn test_missing_config_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["Monza", "dry"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("file not found"));
}

#[test]
fn test_tsv_prediction() {
    let dir = dir_with_config();
    let output = run(dir.path(), &["Silverstone", "dry", "--no-weather", "--format", "tsv"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1\tNorris\tMcLaren\t"));
    assert!(lines[1].starts_with("2\tAlonso\tAston Martin\t"));
}

#[test]
fn test_track_only_prints_note_and_table() {
    let dir = dir_with_config();
    let output = run(dir.path(), &["Monza", "--seed", "5"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Note:"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Predicted Grid:"));
    assert!(stdout.contains("Norris"));
}

#[test]
fn test_explicit_config_path() {
    let config_dir = dir_with_config();
    let work_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("f1_config.json");

    let output = run(
        work_dir.path(),
        &["Monza", "wet", "--no-weather", "--format", "tsv", "--config", config_path.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("1\tNorris"));
}

#[test]
fn test_out_of_scale_rating_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("f1_config.json"),
        r#"{
            "teams": [{ "name": "Alpine", "engine": "Renault" }],
            "drivers": [{ "name": "Gasly", "number": 10, "teamIndex": 0, "overtakingAbility": 2000000000 }]
        }"#,
    )
    .unwrap();

    let output = run(dir.path(), &["Monza", "dry", "--no-weather"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config errors:"));
    assert!(stderr.contains("drivers[0].overtakingAbility"));
}
