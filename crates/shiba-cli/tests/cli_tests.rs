use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Path of the catalog fixture shared with the core crate
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../shiba-core/tests/fixtures/workout_database.json")
}

/// Helper function to create a Command with --no-color flag for testing
fn shiba_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shiba").expect("Failed to find shiba binary");
    cmd.env_remove("SHIBA_CATALOG").arg("--no-color");
    cmd
}

/// Helper function to create a Command reading the fixture catalog
fn fixture_cmd() -> Command {
    let mut cmd = shiba_cmd();
    cmd.arg("--catalog-file").arg(fixture_path());
    cmd
}

#[test]
fn test_cli_default_shows_summary() {
    fixture_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Catalog"))
        .stdout(predicate::str::contains("- Exercises: 6"))
        .stdout(predicate::str::contains("- Equipment: 5 (3 categories)"))
        .stdout(predicate::str::contains("- Weeks: 1-2 (2 weeks)"));
}

#[test]
fn test_cli_list_workout() {
    fixture_cmd()
        .args([
            "exercise",
            "list",
            "--week",
            "1",
            "--workout-type",
            "Upper (Strength)",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "### bench1. Barbell Bench Press (Barbell)",
        ))
        .stdout(predicate::str::contains("### pullup1. Weighted Pull-Up"))
        .stdout(predicate::str::contains(
            "- Tags: barbell, chest, pressing, push, strength",
        ))
        .stdout(predicate::str::contains("squat1").not());
}

#[test]
fn test_cli_list_empty_workout() {
    fixture_cmd()
        .args(["exercise", "ls", "-w", "3", "-t", "Upper (Strength)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No exercises found."));
}

#[test]
fn test_cli_list_all_exercises() {
    fixture_cmd()
        .args(["exercise", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### curl2. EZ Bar Curl"))
        .stdout(predicate::str::contains("### squat1. Back Squat"));
}

#[test]
fn test_cli_show_exercise() {
    fixture_cmd()
        .args(["exercise", "show", "bench1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# bench1. Barbell Bench Press"))
        .stdout(predicate::str::contains("- Sets: 2-3 warm-up, 3 working"))
        .stdout(predicate::str::contains("- RPE: 8 early, 9-10 last set"))
        .stdout(predicate::str::contains("## Substitutions"));
}

#[test]
fn test_cli_show_missing_exercise_fails() {
    fixture_cmd()
        .args(["exercise", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Exercise 'missing' not found"));
}

#[test]
fn test_cli_list_substitutions() {
    fixture_cmd()
        .args(["sub", "list", "bench1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- db_bench: Dumbbell Bench Press (Dumbbell, Chest, Push)",
        ))
        .stdout(predicate::str::contains(
            "- smith_bench: Smith Machine Bench Press",
        ));
}

#[test]
fn test_cli_list_substitutions_empty_vs_missing() {
    fixture_cmd()
        .args(["sub", "list", "lateral1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No substitutions available."));

    fixture_cmd()
        .args(["sub", "list", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "original exercise 'missing' not found",
        ));
}

#[test]
fn test_cli_apply_substitution() {
    fixture_cmd()
        .args(["sub", "apply", "bench1", "db_bench"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# db_bench. Dumbbell Bench Press"))
        .stdout(predicate::str::contains("- Workout: Upper (Strength)"))
        .stdout(predicate::str::contains("- Rest: 2-3 min"))
        .stdout(predicate::str::contains("Pause briefly on the chest."));
}

#[test]
fn test_cli_reset_substitution() {
    fixture_cmd()
        .args(["sub", "apply", "bench1", "bench1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# bench1. Barbell Bench Press"));
}

#[test]
fn test_cli_apply_undeclared_substitution_fails() {
    fixture_cmd()
        .args(["sub", "apply", "bench1", "lat_pulldown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "substitution 'lat_pulldown' not found",
        ));
}

#[test]
fn test_cli_blank_ids_are_rejected() {
    fixture_cmd()
        .args(["sub", "apply", "bench1", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SUBSTITUTION_ID"))
        .stdout(predicate::str::is_empty());

    fixture_cmd()
        .args(["sub", "list", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ID>"));

    fixture_cmd()
        .args(["exercise", "show", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ID>"));
}

#[test]
fn test_cli_apply_substitution_json() {
    let output = fixture_cmd()
        .args(["--json", "sub", "apply", "bench1", "db_bench"])
        .output()
        .expect("Failed to run shiba");
    assert!(output.status.success());

    let view: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(view["id"], "db_bench");
    assert_eq!(view["equipment"], "Dumbbell");
    assert_eq!(view["week"], 1);
    assert_eq!(view["working_sets"], 3);
    assert_eq!(view["reps"], "6-8");
    assert_eq!(view["substitutions"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_cli_equipment() {
    fixture_cmd()
        .args(["equipment", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Bodyweight\n- Free Weight\n- Machine\n",
        ));

    fixture_cmd()
        .args(["equipment", "list", "Machine"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- cable: Cable (Cable Stack, Fixed, Constant)",
        ))
        .stdout(predicate::str::contains("- smith_machine: Smith Machine"));

    fixture_cmd()
        .args(["equipment", "list", "machine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No equipment found."));
}

#[test]
fn test_cli_workout_types() {
    fixture_cmd()
        .args(["workout", "types", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Lower (Strength)\n- Upper (Hypertrophy)\n- Upper (Strength)\n",
        ));

    fixture_cmd()
        .args(["workout", "types", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts scheduled in week 7."));
}

#[test]
fn test_cli_workout_template() {
    fixture_cmd()
        .args(["workout", "template", "--week", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Week 2"))
        .stdout(predicate::str::contains("## Arms"))
        .stdout(predicate::str::contains("1. EZ Bar Curl (curl2): 2 x 12"))
        .stdout(predicate::str::contains("# Week 1").not());
}

#[test]
fn test_cli_catalog_from_env() {
    shiba_cmd()
        .env("SHIBA_CATALOG", fixture_path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Exercises: 6"));
}

#[test]
fn test_cli_missing_catalog_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.json");

    shiba_cmd()
        .arg("--catalog-file")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load exercise catalog"));
}

#[test]
fn test_cli_strict_ids() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = temp_dir.path().join("workout_database.json");
    std::fs::write(
        &catalog,
        r#"{"muscles": {}, "equipment": {},
            "exercises": [{"id": "a", "name": "First"}, {"id": "a", "name": "Second"}]}"#,
    )
    .unwrap();

    shiba_cmd()
        .arg("--catalog-file")
        .arg(&catalog)
        .args(["exercise", "show", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# a. First"));

    shiba_cmd()
        .arg("--catalog-file")
        .arg(&catalog)
        .args(["--strict-ids", "exercise", "show", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate exercise ID 'a'"));
}
