//! Reconciliation orchestration.
//!
//! Sequences parse → stage extraction → record matching → skill filtering
//! and projects skill values per matched student. Collaborator failures
//! (an unreadable roster source) are caught here and converted to the
//! synthetic fallback path: the caller always receives a renderable result.

use std::collections::BTreeMap;

use tracing::{info, warn};

use swimreg_model::{
    ClassRoster, MatchOutcome, MatchedStudent, Reconciliation, RosterTable, SkillCatalog,
};

use crate::descriptor::{compose_descriptor, parse_descriptor};
use crate::filter::filter_catalog;
use crate::matcher::{MatchConfig, RecordMatcher};
use crate::stage::extract_stage;

/// A collaborator that can produce the enrollment snapshot for one run.
pub trait RosterSource {
    /// Human-readable origin for diagnostics.
    fn describe(&self) -> String;

    fn load(&self) -> anyhow::Result<RosterTable>;
}

pub struct Reconciler {
    matcher: RecordMatcher,
}

impl Reconciler {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            matcher: RecordMatcher::new(config),
        }
    }

    /// Runs one reconciliation against a roster source, converting source
    /// errors into the fallback path rather than propagating them.
    pub fn reconcile(
        &self,
        selection: &str,
        source: &dyn RosterSource,
        catalog: &SkillCatalog,
    ) -> Reconciliation {
        let roster = match source.load() {
            Ok(roster) => roster,
            Err(error) => {
                warn!(
                    source = %source.describe(),
                    %error,
                    "roster source unavailable, continuing with empty snapshot"
                );
                RosterTable::default()
            }
        };
        self.reconcile_table(selection, &roster, catalog)
    }

    /// Runs one reconciliation against an already-loaded roster snapshot.
    pub fn reconcile_table(
        &self,
        selection: &str,
        roster: &RosterTable,
        catalog: &SkillCatalog,
    ) -> Reconciliation {
        let descriptor = parse_descriptor(selection);
        let stage = extract_stage(&descriptor.program);
        info!(
            class = %descriptor.full_name,
            program = %descriptor.program,
            stage = stage.map(|s| s.to_string()).unwrap_or_default(),
            rows = roster.len(),
            "reconciling class selection"
        );

        let outcome = self.matcher.match_class(&descriptor, roster);
        let skills = filter_catalog(catalog, stage.as_ref());
        let students = project_students(&outcome, &skills);
        info!(
            students = students.students.len(),
            provenance = ?students.provenance,
            skills = skills.len(),
            "reconciliation complete"
        );

        Reconciliation {
            descriptor,
            stage,
            roster: students,
            skills,
        }
    }
}

/// Joins matched rows with the filtered catalog, reading each student's
/// recorded value per skill column. Columns a row doesn't reach read as
/// unassessed rather than failing.
fn project_students(outcome: &MatchOutcome, skills: &SkillCatalog) -> ClassRoster {
    let students = outcome
        .records
        .iter()
        .map(|matched| {
            let mut values = BTreeMap::new();
            for skill in skills.stage.iter().chain(&skills.safety) {
                let value = matched
                    .record
                    .raw_row
                    .get(skill.index)
                    .cloned()
                    .unwrap_or_default();
                values.insert(skill.header.clone(), value);
            }
            MatchedStudent {
                first_name: matched.record.first_name.clone(),
                last_name: matched.record.last_name.clone(),
                reason: matched.reason,
                provenance: outcome.provenance,
                skills: values,
            }
        })
        .collect();
    ClassRoster {
        students,
        provenance: outcome.provenance,
    }
}

/// Distinct class selection strings present in a roster, with enrollment
/// counts, in first-appearance order. This is what populates the class
/// selection dropdown.
pub fn distinct_classes(roster: &RosterTable) -> Vec<(String, usize)> {
    let mut order = Vec::new();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in &roster.records {
        let name = compose_descriptor(&record.program, &record.day, &record.time);
        if !counts.contains_key(&name) {
            order.push(name.clone());
        }
        *counts.entry(name).or_insert(0) += 1;
    }
    order
        .into_iter()
        .map(|name| {
            let count = counts.get(&name).copied().unwrap_or(0);
            (name, count)
        })
        .collect()
}
