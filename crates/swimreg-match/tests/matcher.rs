//! Matching pass behavior against hand-built roster tables.

use swimreg_match::matcher::{MatchConfig, RecordMatcher};
use swimreg_match::parse_descriptor;
use swimreg_model::{EnrollmentRecord, MatchReason, Provenance, RosterTable};

fn record(
    row_index: usize,
    first: &str,
    last: &str,
    program: &str,
    day: &str,
    time: &str,
) -> EnrollmentRecord {
    EnrollmentRecord {
        first_name: first.to_string(),
        last_name: last.to_string(),
        program: program.to_string(),
        day: day.to_string(),
        time: time.to_string(),
        row_index,
        raw_row: vec![
            first.to_string(),
            last.to_string(),
            program.to_string(),
            day.to_string(),
            time.to_string(),
        ],
    }
}

fn roster(records: Vec<EnrollmentRecord>) -> RosterTable {
    RosterTable {
        headers: ["First Name", "Last Name", "Program", "Day", "Time"]
            .iter()
            .map(|h| (*h).to_string())
            .collect(),
        records,
        skipped_rows: 0,
    }
}

#[test]
fn exact_pass_requires_case_sensitive_equality() {
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 2 (Monday, 9:00 AM)");
    let table = roster(vec![
        record(0, "Ann", "Lee", "Stage 2", "Monday", "9:00 AM"),
        record(1, "Ben", "Cho", "stage 2", "Monday", "9:00 AM"),
    ]);

    let exact = matcher.exact_pass(&descriptor, &table);
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].record.first_name, "Ann");
    assert_eq!(exact[0].reason, MatchReason::Exact);
}

#[test]
fn normalized_pass_bridges_day_notation() {
    // Spec scenario: "Stage 1 (Monday, 9:00 AM)" vs a row written "Mon.".
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 1 (Monday, 9:00 AM)");
    let table = roster(vec![record(0, "Ann", "Lee", "Stage 1", "Mon.", "9:00 AM")]);

    let outcome = matcher.match_class(&descriptor, &table);
    assert_eq!(outcome.provenance, Provenance::Real);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(
        outcome.records[0].reason,
        MatchReason::Normalized {
            day_variation: true,
            time_variation: false
        }
    );
}

#[test]
fn normalized_pass_requires_all_three_fields() {
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 1 (Monday, 9:00 AM)");
    let table = roster(vec![
        record(0, "Ann", "Lee", "Stage 1", "Mon.", "9:00 AM"),
        record(1, "Ben", "Cho", "Stage 1", "Tuesday", "9:00 AM"),
        record(2, "Eve", "Ito", "Stage 4", "Monday", "9:00 AM"),
    ]);

    let normalized = matcher.normalized_pass(&descriptor, &table);
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].record.first_name, "Ann");
}

#[test]
fn normalized_pass_rejects_wrong_day_and_time() {
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 1 (Monday, 9:00 AM)");
    let table = roster(vec![
        // Right program, wrong day AND wrong time.
        record(0, "Ann", "Lee", "Stage 1", "Friday", "6:30 PM"),
        // Right program and day, wrong time.
        record(1, "Ben", "Cho", "Stage 1", "Monday", "6:30 PM"),
    ]);

    let normalized = matcher.normalized_pass(&descriptor, &table);
    assert!(normalized.is_empty());
}

#[test]
fn token_overlap_matches_combined_export_columns() {
    // Export with one combined "class" cell instead of separate fields.
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 3 (Wednesday, 4:00 PM)");
    let mut rec = record(0, "Ann", "Lee", "", "", "");
    rec.raw_row = vec![
        "Ann".to_string(),
        "Lee".to_string(),
        "Stage 3 swim - Wed 4:00PM".to_string(),
    ];
    let mut other = record(1, "Ben", "Cho", "", "", "");
    other.raw_row = vec![
        "Ben".to_string(),
        "Cho".to_string(),
        "Parent & Child - Sat 8:30AM".to_string(),
    ];
    let table = roster(vec![rec, other]);

    let outcome = matcher.match_class(&descriptor, &table);
    assert_eq!(outcome.provenance, Provenance::Real);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].record.first_name, "Ann");
    assert!(matches!(
        outcome.records[0].reason,
        MatchReason::TokenOverlap { .. }
    ));
}

#[test]
fn matches_come_back_in_source_row_order() {
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 2 (Monday, 9:00 AM)");
    let table = roster(vec![
        record(0, "Zoe", "Park", "Stage 2", "Monday", "9:00 AM"),
        record(1, "Ann", "Lee", "Stage 2", "Monday", "9:00 AM"),
        record(2, "Ben", "Cho", "Stage 2", "Monday", "9:00 AM"),
    ]);

    let outcome = matcher.match_class(&descriptor, &table);
    let order: Vec<_> = outcome
        .records
        .iter()
        .map(|m| m.record.first_name.as_str())
        .collect();
    assert_eq!(order, vec!["Zoe", "Ann", "Ben"]);
}

#[test]
fn empty_table_yields_labeled_placeholder_set() {
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 2 (Monday, 9:00 AM)");

    let outcome = matcher.match_class(&descriptor, &roster(vec![]));
    assert_eq!(outcome.provenance, Provenance::Synthetic);
    assert!(!outcome.records.is_empty());
    for matched in &outcome.records {
        assert_eq!(matched.reason, MatchReason::Placeholder);
        assert_eq!(matched.record.program, "Stage 2");
    }
}

#[test]
fn disabling_fallback_is_the_only_way_to_get_empty() {
    let matcher = RecordMatcher::new(MatchConfig {
        fallback_enabled: false,
        ..MatchConfig::default()
    });
    let descriptor = parse_descriptor("Stage 2 (Monday, 9:00 AM)");
    let table = roster(vec![record(0, "Ann", "Lee", "Diving Team", "Friday", "6:00 PM")]);

    let outcome = matcher.match_class(&descriptor, &table);
    assert_eq!(outcome.provenance, Provenance::Real);
    assert!(outcome.records.is_empty());
}

#[test]
fn unmatched_roster_escalates_to_placeholder() {
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 6 (Sunday, 7:00 AM)");
    let table = roster(vec![record(0, "Ann", "Lee", "Diving Team", "Friday", "6:00 PM")]);

    let outcome = matcher.match_class(&descriptor, &table);
    assert_eq!(outcome.provenance, Provenance::Synthetic);
    assert!(!outcome.records.is_empty());
}

#[test]
fn malformed_rows_never_panic_the_matcher() {
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 2 (Monday, 9:00 AM)");
    let mut bare = record(0, "", "", "", "", "");
    bare.raw_row = Vec::new();
    let table = roster(vec![bare]);

    let outcome = matcher.match_class(&descriptor, &table);
    assert_eq!(outcome.provenance, Provenance::Synthetic);
}

#[test]
fn passes_relax_monotonically_on_fixed_tables() {
    let matcher = RecordMatcher::new(MatchConfig::default());
    let descriptor = parse_descriptor("Stage 2 (Monday, 9:00 AM)");
    let table = roster(vec![
        record(0, "Ann", "Lee", "Stage 2", "Monday", "9:00 AM"),
        record(1, "Ben", "Cho", "stage 2", "Mon.", "9:00AM"),
        record(2, "Eve", "Ito", "Stage 2 Swim", "Mon", "900"),
        record(3, "Kai", "Sun", "Diving Team", "Friday", "6:00 PM"),
    ]);

    let exact: Vec<_> = matcher
        .exact_pass(&descriptor, &table)
        .into_iter()
        .map(|m| m.record.row_index)
        .collect();
    let normalized: Vec<_> = matcher
        .normalized_pass(&descriptor, &table)
        .into_iter()
        .map(|m| m.record.row_index)
        .collect();
    let overlap: Vec<_> = matcher
        .token_overlap_pass(&descriptor, &table, false)
        .into_iter()
        .map(|m| m.record.row_index)
        .collect();

    assert!(exact.iter().all(|idx| normalized.contains(idx)));
    assert!(normalized.iter().all(|idx| overlap.contains(idx)));
    assert!(!overlap.contains(&3));
}
