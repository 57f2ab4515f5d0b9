use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use serde_json::Value;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_batch_writes_submission_documents() {
    let dir = tempdir().unwrap();
    let submissions_path = dir.path().join("submissions.jsonl");

    let mut cmd = Command::new(cargo_bin!("paint-estimate"));
    cmd.arg("batch")
        .arg("tests/fixtures/intake.csv")
        .arg("--submissions")
        .arg(&submissions_path);
    cmd.assert().success();

    let contents = std::fs::read_to_string(&submissions_path).unwrap();
    let documents: Vec<Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(documents.len(), 3);

    let first = &documents[0];
    assert_eq!(first["name"], "Avery Stone");
    assert_eq!(first["phone"], "555-010-2030");
    assert_eq!(first["projectType"], "interior");
    assert_eq!(first["squareFootage"], 1000);
    assert_eq!(first["surfaces"], serde_json::json!(["walls"]));

    let third = &documents[2];
    assert!(third.get("email").is_none());
    assert_eq!(third["difficultyLevel"], "moderate");

    // The submission carries the request, never the computed range
    for document in &documents {
        assert!(document.get("min_price").is_none());
        assert!(document.get("tier_label").is_none());
    }
}

#[test]
fn test_rejected_rows_are_not_submitted() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("intake.csv");
    std::fs::write(
        &input_path,
        "project_type,square_footage,paint_tier\ninterior,10,standard\nexterior,900,designer\n",
    )
    .unwrap();
    let submissions_path = dir.path().join("submissions.jsonl");

    let mut cmd = Command::new(cargo_bin!("paint-estimate"));
    cmd.arg("batch")
        .arg(&input_path)
        .arg("--submissions")
        .arg(&submissions_path);
    cmd.assert().success();

    let contents = std::fs::read_to_string(&submissions_path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("\"squareFootage\":900"));
}
