use log::LevelFilter;
use seabattle::level_from;
use std::process::Command;

fn seabattle() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seabattle"))
}

fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8(stdout.to_vec())
        .expect("non utf8 output")
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).expect("invalid json"))
        .collect()
}

#[test]
fn play_reports_each_shot() {
    let output = seabattle()
        .args([
            "play", "--fire", "0,0", "--fire", "5,5", "--fire", "5,5", "--fire", "3,3",
        ])
        .output()
        .expect("failed to run seabattle");
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    let outcomes: Vec<_> = lines[..4].iter().map(|v| v["outcome"].clone()).collect();
    assert_eq!(outcomes, vec!["Hit", "Sunk", "Miss", "Miss"]);
    assert_eq!(lines[1]["row"], 5);
    assert_eq!(lines[4]["ships_afloat"], 9);
    assert_eq!(lines[4]["all_sunk"], false);
}

#[test]
fn seeded_random_shots_are_reproducible() {
    let run = || {
        seabattle()
            .args(["play", "--random-shots", "25", "--seed", "7"])
            .output()
            .expect("failed to run seabattle")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(json_lines(&first.stdout).len(), 26);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn validate_default_and_rejected_layout() {
    let ok = seabattle().arg("validate").output().unwrap();
    assert!(ok.status.success());

    let path = std::env::temp_dir().join(format!("seabattle-layout-{}.json", std::process::id()));
    std::fs::write(&path, r#"[{"start":[0,0],"end":[0,0]},{"start":[0,1],"end":[0,1]}]"#).unwrap();
    let bad = seabattle()
        .args(["validate", "--layout"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!bad.status.success());
    assert!(String::from_utf8_lossy(&bad.stderr).contains("fleet needs 10 ships"));

    // the same layout can still be played when unchecked
    let unchecked = seabattle()
        .args(["play", "--unchecked", "--fire", "0,1", "--layout"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(unchecked.status.success());
    assert_eq!(json_lines(&unchecked.stdout)[0]["outcome"], "Sunk");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn out_of_bounds_shot_fails() {
    let output = seabattle().args(["play", "--fire", "10,0"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("outside the board"));
}

#[test]
fn log_level_parsing() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("WARN")), LevelFilter::Warn);
    assert_eq!(level_from(Some("chatty")), LevelFilter::Info);
    assert_eq!(level_from(None), LevelFilter::Info);
}
