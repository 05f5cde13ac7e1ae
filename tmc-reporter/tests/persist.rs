// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino_tempfile::Utf8TempDir;
use hmac::{Hmac, Mac};
use pretty_assertions::assert_eq;
use sha2::Sha256;
use tmc_reporter::{
    RESULTS_FILE_NAME, SIGNATURE_FILE_NAME, Secret, TestOutcome, persist,
};

fn temp_dir() -> Utf8TempDir {
    camino_tempfile::tempdir().expect("created temp dir")
}

#[test]
fn empty_run_writes_empty_array() {
    let dir = temp_dir();
    persist(&[], None, dir.path()).expect("persisted results");

    let json = std::fs::read_to_string(dir.path().join(RESULTS_FILE_NAME))
        .expect("results artifact exists");
    assert_eq!(json, "[]");
}

#[test]
fn no_secret_means_no_signature_artifact() {
    let dir = temp_dir();
    let results = [TestOutcome::passed("test.test_item.ItemTest.test_can_init", vec![])];
    persist(&results, None, dir.path()).expect("persisted results");

    assert!(dir.path().join(RESULTS_FILE_NAME).exists());
    assert!(!dir.path().join(SIGNATURE_FILE_NAME).exists());
}

#[test]
fn persists_outcomes_in_recording_order() {
    let dir = temp_dir();
    let results = [
        TestOutcome::passed("test.test_item.ItemTest.A", vec![]),
        TestOutcome::failed(
            "test.test_item.ItemTest.B",
            vec!["1.1".to_owned()],
            "expected 1 got 2",
            vec![],
        ),
    ];
    persist(&results, None, dir.path()).expect("persisted results");

    let json = std::fs::read_to_string(dir.path().join(RESULTS_FILE_NAME))
        .expect("results artifact exists");
    let value: serde_json::Value = serde_json::from_str(&json).expect("artifact parses");
    assert_eq!(
        value,
        serde_json::json!([
            {
                "name": "test.test_item.ItemTest.A",
                "status": "passed",
                "message": "",
                "passed": true,
                "points": [],
                "backtrace": [],
            },
            {
                "name": "test.test_item.ItemTest.B",
                "status": "failed",
                "message": "expected 1 got 2",
                "passed": false,
                "points": ["1.1"],
                "backtrace": [],
            },
        ])
    );
}

#[test]
fn signature_covers_exact_artifact_bytes() {
    let dir = temp_dir();
    let results = [
        TestOutcome::passed("test.test_suitcase.SuitcaseTest.test_can_init", vec![
            "1.2".to_owned(),
        ]),
        TestOutcome::errored(
            "test.test_suitcase.SuitcaseTest.test_heaviest",
            vec!["1.2".to_owned()],
            "index out of bounds",
            vec!["frame 0".to_owned()],
        ),
    ];
    let secret_bytes = b"047QzQx8RAYLR3lf0UfB75WX5EFnx7AV";
    persist(&results, Some(Secret::new(&secret_bytes[..])), dir.path())
        .expect("persisted results");

    let json = std::fs::read_to_string(dir.path().join(RESULTS_FILE_NAME))
        .expect("results artifact exists");
    let digest_hex = std::fs::read_to_string(dir.path().join(SIGNATURE_FILE_NAME))
        .expect("signature artifact exists");
    assert_eq!(digest_hex.len(), 64);

    // Recompute the digest over the artifact as written, the way the
    // grading server does.
    let mut mac = Hmac::<Sha256>::new_from_slice(secret_bytes).expect("key accepted");
    mac.update(json.as_bytes());
    let digest = hex::decode(&digest_hex).expect("signature is hex");
    mac.verify_slice(&digest).expect("signature verifies");
}

#[test]
fn artifact_round_trips_to_signed_bytes() {
    let dir = temp_dir();
    let results = [TestOutcome::failed(
        "test.test_cargo_hold.CargoHoldTest.test_total_weight",
        vec!["1.3".to_owned()],
        "expected 8 got 0",
        vec!["frame 0".to_owned(), "frame 1".to_owned()],
    )];
    persist(&results, None, dir.path()).expect("persisted results");

    let json = std::fs::read_to_string(dir.path().join(RESULTS_FILE_NAME))
        .expect("results artifact exists");
    let parsed: Vec<TestOutcome> = serde_json::from_str(&json).expect("artifact parses");
    assert_eq!(parsed, results);
    let reserialized = serde_json::to_string(&parsed).expect("reserializes");
    assert_eq!(reserialized, json);
}

#[test]
fn overwrites_previous_artifacts() {
    let dir = temp_dir();
    let first = [
        TestOutcome::passed("test.test_item.ItemTest.A", vec![]),
        TestOutcome::passed("test.test_item.ItemTest.B", vec![]),
    ];
    persist(&first, Some(Secret::new(&b"first secret"[..])), dir.path())
        .expect("persisted results");

    let second = [TestOutcome::passed("test.test_item.ItemTest.C", vec![])];
    persist(&second, Some(Secret::new(&b"second secret"[..])), dir.path())
        .expect("persisted results");

    let json = std::fs::read_to_string(dir.path().join(RESULTS_FILE_NAME))
        .expect("results artifact exists");
    let parsed: Vec<TestOutcome> = serde_json::from_str(&json).expect("artifact parses");
    assert_eq!(parsed, second);
}

#[test]
fn write_failure_reports_the_file() {
    let dir = temp_dir();
    let missing = dir.path().join("does-not-exist");
    let err = persist(&[], None, &missing).expect_err("write must fail");
    let message = err.to_string();
    assert!(message.contains(RESULTS_FILE_NAME), "unexpected error: {message}");
}
