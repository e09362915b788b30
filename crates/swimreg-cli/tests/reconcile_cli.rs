//! Command runners against fixture CSV exports.

use std::io::Write;

use clap::Parser;

use swimreg_cli::cli::{ClassesArgs, ReconcileArgs};
use swimreg_cli::commands::{run_classes, run_reconcile};
use swimreg_model::{Provenance, Stage};

fn fixture_roster() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "First Name,Last Name,Program,Day,Time,S1 Front Float,S2 Front Glide,SAW Submerge"
    )
    .expect("write");
    writeln!(file, "Ann,Lee,Stage 2,Mon.,9:00 AM,pass,working,pass").expect("write");
    writeln!(file, "Ben,Cho,Stage 2,Mon.,9:00 AM,pass,,").expect("write");
    writeln!(file, "Eve,Ito,Stage 3,Tuesday,10:00 AM,,,").expect("write");
    file
}

#[test]
fn reconcile_matches_students_and_filters_skills() {
    let roster = fixture_roster();
    let args = ReconcileArgs::parse_from([
        "test",
        roster.path().to_str().expect("utf8 path"),
        "--class",
        "Stage 2 (Monday, 9:00 AM)",
    ]);

    let result = run_reconcile(&args).expect("reconcile");
    assert_eq!(result.stage, Some(Stage::Numeric(2)));
    assert_eq!(result.roster.provenance, Provenance::Real);

    let names: Vec<_> = result
        .roster
        .students
        .iter()
        .map(|s| s.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["Ann", "Ben"]);

    let stage_headers: Vec<_> = result.skills.stage.iter().map(|s| s.header.as_str()).collect();
    assert_eq!(stage_headers, vec!["S1 Front Float", "S2 Front Glide"]);
    assert_eq!(
        result.roster.students[0]
            .skills
            .get("S2 Front Glide")
            .map(String::as_str),
        Some("working")
    );
}

#[test]
fn unreadable_roster_degrades_to_synthetic_result() {
    let args = ReconcileArgs::parse_from([
        "test",
        "/nonexistent/roster.csv",
        "--class",
        "Stage 2 (Monday, 9:00 AM)",
    ]);

    let result = run_reconcile(&args).expect("reconcile never hard-fails on roster");
    assert_eq!(result.roster.provenance, Provenance::Synthetic);
    assert!(!result.roster.students.is_empty());
}

#[test]
fn no_fallback_yields_empty_real_result() {
    let roster = fixture_roster();
    let args = ReconcileArgs::parse_from([
        "test",
        roster.path().to_str().expect("utf8 path"),
        "--class",
        "Stage 6 (Sunday, 7:00 AM)",
        "--no-fallback",
    ]);

    let result = run_reconcile(&args).expect("reconcile");
    assert_eq!(result.roster.provenance, Provenance::Real);
    assert!(result.roster.students.is_empty());
}

#[test]
fn missing_skills_file_is_a_hard_error() {
    let roster = fixture_roster();
    let args = ReconcileArgs::parse_from([
        "test",
        roster.path().to_str().expect("utf8 path"),
        "--class",
        "Stage 2 (Monday, 9:00 AM)",
        "--skills",
        "/nonexistent/skills.csv",
    ]);

    assert!(run_reconcile(&args).is_err());
}

#[test]
fn classes_lists_distinct_selections_with_counts() {
    let roster = fixture_roster();
    let args =
        ClassesArgs::parse_from(["test", roster.path().to_str().expect("utf8 path")]);

    let classes = run_classes(&args).expect("classes");
    assert_eq!(
        classes,
        vec![
            ("Stage 2 (Mon., 9:00 AM)".to_string(), 2),
            ("Stage 3 (Tuesday, 10:00 AM)".to_string(), 1),
        ]
    );
}
