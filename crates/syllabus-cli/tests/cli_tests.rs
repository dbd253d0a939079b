use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "main": [
    {"materialId": "grammar", "unitCode": "G1", "order": 1, "title": "Nouns", "lectureRange": "1-2"},
    {"materialId": "grammar", "unitCode": "G2", "order": 2, "title": "Verbs"},
    {"materialId": "grammar", "unitCode": "G3", "order": 3, "title": "Adjectives"},
    {"materialId": "grammar", "unitCode": "G4", "order": 4, "title": "Adverbs"},
    {"materialId": "grammar", "unitCode": "G5", "order": 5, "title": "Clauses"},
    {"materialId": "grammar", "unitCode": "G6", "order": 6, "title": "Review"}
  ],
  "vocab": [
    {"materialId": "words", "unitCode": "W1", "order": 1, "vocabRange": "1-40"},
    {"materialId": "words", "unitCode": "W2", "order": 2, "vocabRange": "41-80"}
  ]
}"#;

const SEGMENTS: &str = r#"[
  {"id": "spring", "startDate": "2024-01-08", "endDate": "2024-01-26", "days": "MON,WED,FRI",
   "lanes": {"main1": [{"materialId": "grammar"}], "vocab": [{"materialId": "words"}]}}
]"#;

const EXAM: &str = r#"{"id": "midterm", "startDate": "2024-01-15", "endDate": "2024-01-17", "days": "MON,WED,FRI"}"#;

/// Helper function to create a temporary directory holding the catalog
fn create_cli_test_environment() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    fs::write(temp_dir.path().join("catalog.json"), CATALOG).expect("Failed to write catalog");
    temp_dir
}

/// Writes `contents` next to the catalog and returns its path
fn write_fixture(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Helper function to create a Command with --no-color flag for testing
fn syl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("syl").expect("Failed to find syl binary");
    cmd.arg("--no-color");
    cmd
}

fn syl_with_catalog(temp_dir: &TempDir) -> Command {
    let mut cmd = syl_cmd();
    cmd.arg("--catalog").arg(temp_dir.path().join("catalog.json"));
    cmd
}

#[test]
fn test_cli_count_class_days() {
    syl_cmd()
        .args([
            "count",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
            "--days",
            "MON,WED,FRI",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("**14** class days"));
}

#[test]
fn test_cli_shift_date() {
    syl_cmd()
        .args(["shift", "--from", "2024-01-15", "--by", "2", "--days", "mon,wed,fri"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**2024-01-19** (FRI)"));
}

#[test]
fn test_cli_rejects_unknown_weekday() {
    syl_cmd()
        .args(["count", "--start", "2024-01-01", "--end", "2024-01-31", "--days", "MON,XYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("XYZ"));
}

#[test]
fn test_cli_plan_markdown() {
    let temp_dir = create_cli_test_environment();
    let request = write_fixture(
        &temp_dir,
        "request.json",
        r#"{"startDate": "2024-01-08", "endDate": "2024-01-12", "days": "MON,WED,FRI",
            "lanes": {"main1": [{"materialId": "grammar", "startUnitCode": "G2"}]},
            "tests": [{"date": "2024-01-10"}]}"#,
    );

    syl_with_catalog(&temp_dir)
        .arg("plan")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Lesson Plan"))
        .stdout(predicate::str::contains("## 2024-01-08 (MON)"))
        .stdout(predicate::str::contains("G2: Verbs"))
        .stdout(predicate::str::contains("Monthly Test"))
        .stdout(predicate::str::contains("G3: Adjectives"));
}

#[test]
fn test_cli_plan_json() {
    let temp_dir = create_cli_test_environment();
    let request = write_fixture(
        &temp_dir,
        "request.json",
        r#"{"startDate": "2024-01-01", "endDate": "2024-01-03", "days": "MON,WED",
            "lanes": {"vocab": [{"materialId": "words"}]}}"#,
    );

    let output = syl_with_catalog(&temp_dir)
        .arg("plan")
        .arg(&request)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let items: serde_json::Value = serde_json::from_slice(&output).expect("Invalid JSON");
    assert_eq!(items[0]["source"], "skip");
    assert_eq!(items[0]["reason"], "Holiday: New Year's Day");
    assert_eq!(items[1]["source"], "vocab");
    assert_eq!(items[1]["unitCode"], "W1");
    assert_eq!(items[1]["vocabRange"], "1-40");
}

#[test]
fn test_cli_plan_missing_days_fails() {
    let temp_dir = create_cli_test_environment();
    let request = write_fixture(
        &temp_dir,
        "request.json",
        r#"{"startDate": "2024-01-08", "endDate": "2024-01-12"}"#,
    );

    syl_with_catalog(&temp_dir)
        .arg("plan")
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build plan"))
        .stderr(predicate::str::contains("days"));
}

#[test]
fn test_cli_holidays_file_applies() {
    let temp_dir = create_cli_test_environment();
    let holidays = write_fixture(&temp_dir, "holidays.json", r#"{"2024-01-10": "Staff Training"}"#);
    let request = write_fixture(
        &temp_dir,
        "request.json",
        r#"{"startDate": "2024-01-08", "endDate": "2024-01-12", "days": "MON,WED,FRI",
            "lanes": {"main1": [{"materialId": "grammar"}]}}"#,
    );

    syl_with_catalog(&temp_dir)
        .arg("--holidays")
        .arg(&holidays)
        .arg("plan")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("Staff Training"))
        .stdout(predicate::str::contains("G3").not());
}

#[test]
fn test_cli_rebuild_inserts_exam() {
    let temp_dir = create_cli_test_environment();
    let segments = write_fixture(&temp_dir, "segments.json", SEGMENTS);
    let exam = write_fixture(&temp_dir, "exam.json", EXAM);

    syl_with_catalog(&temp_dir)
        .arg("rebuild")
        .arg(&segments)
        .arg("--exam")
        .arg(&exam)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Rebuilt Segments"))
        .stdout(predicate::str::contains("### spring: 2024-01-08 to 2024-01-14"))
        .stdout(predicate::str::contains("[exam]"))
        .stdout(predicate::str::contains("spring-after-midterm: 2024-01-19 to 2024-01-31"));
}

#[test]
fn test_cli_rebuild_json_resumes_lanes() {
    let temp_dir = create_cli_test_environment();
    let segments = write_fixture(&temp_dir, "segments.json", SEGMENTS);
    let exam = write_fixture(&temp_dir, "exam.json", EXAM);

    let output = syl_with_catalog(&temp_dir)
        .arg("rebuild")
        .arg(&segments)
        .arg("--exam")
        .arg(&exam)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rebuilt: serde_json::Value = serde_json::from_slice(&output).expect("Invalid JSON");
    assert_eq!(rebuilt.as_array().map(Vec::len), Some(3));
    assert_eq!(rebuilt[1]["kind"], "exam");
    assert_eq!(rebuilt[2]["startDate"], "2024-01-19");
    assert_eq!(rebuilt[2]["lanes"]["main1"][0]["startUnitCode"], "G4");
    // Both words units were read before the exam.
    assert_eq!(rebuilt[2]["lanes"]["vocab"], serde_json::json!([]));
}

#[test]
fn test_cli_rebuild_requires_exam() {
    let temp_dir = create_cli_test_environment();
    let segments = write_fixture(&temp_dir, "segments.json", SEGMENTS);

    syl_with_catalog(&temp_dir)
        .arg("rebuild")
        .arg(&segments)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--exam"));
}

#[test]
fn test_cli_preview_with_events() {
    let temp_dir = create_cli_test_environment();
    let segments = write_fixture(&temp_dir, "segments.json", SEGMENTS);
    let events = write_fixture(
        &temp_dir,
        "events.json",
        r#"{"skips": {"2024-01-08": "Dentist"}, "tests": [{"date": "2024-01-12", "title": "Quiz"}]}"#,
    );

    syl_with_catalog(&temp_dir)
        .arg("preview")
        .arg(&segments)
        .arg("--events")
        .arg(&events)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Segment Preview"))
        .stdout(predicate::str::contains("Dentist"))
        .stdout(predicate::str::contains("Quiz"));
}

#[test]
fn test_cli_progress() {
    let temp_dir = create_cli_test_environment();
    let segments = write_fixture(&temp_dir, "segments.json", SEGMENTS);

    syl_with_catalog(&temp_dir)
        .arg("progress")
        .arg(&segments)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Lane Progress"))
        .stdout(predicate::str::contains("### spring: 2024-01-08 to 2024-01-26"));
}

#[test]
fn test_cli_missing_catalog_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let segments = write_fixture(&temp_dir, "segments.json", SEGMENTS);

    syl_cmd()
        .arg("--catalog")
        .arg(temp_dir.path().join("nowhere.json"))
        .arg("preview")
        .arg(&segments)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize scheduler"));
}

#[test]
fn test_cli_catalog_from_xdg_data_home() {
    let temp_dir = create_cli_test_environment();
    let data_dir = temp_dir.path().join("data").join("syllabus");
    fs::create_dir_all(&data_dir).expect("Failed to create data dir");
    fs::write(data_dir.join("catalog.json"), CATALOG).expect("Failed to write catalog");
    let segments = write_fixture(&temp_dir, "segments.json", SEGMENTS);

    syl_cmd()
        .env("XDG_DATA_HOME", temp_dir.path().join("data"))
        .arg("preview")
        .arg(&segments)
        .assert()
        .success()
        .stdout(predicate::str::contains("G1: Nouns"));
}

#[test]
fn test_cli_schema() {
    syl_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("startDate"))
        .stdout(predicate::str::contains("holidays"));

    syl_cmd()
        .args(["schema", "segments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lanes"));
}
