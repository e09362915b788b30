//! Record matching with escalating passes.
//!
//! The matcher scores each enrollment row against the parsed class
//! descriptor using progressively looser strategies:
//!
//! 1. **Exact**: program/day/time equal the descriptor, case-sensitive.
//! 2. **Normalized**: per-field case-insensitive containment either way,
//!    with day/time variations bridging notation differences.
//! 3. **Token overlap**: descriptor-derived search terms counted against the
//!    row's concatenated text; used when the first two passes find nothing
//!    or the caller requests aggressive matching.
//! 4. **Fallback**: aggressive token overlap, then a labeled synthetic
//!    placeholder set so callers never receive "no data".
//!
//! Each looser pass subsumes the stricter ones (monotonic relaxation), rows
//! come back in source order, and every match carries a [`MatchReason`].
//! Shape problems in rows are skipped, never fatal.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use swimreg_model::{
    ClassDescriptor, EnrollmentRecord, MatchOutcome, MatchReason, MatchedRecord, Provenance,
    RosterTable,
};

use crate::stage::extract_stage;
use crate::variations::{day_variations, time_start_token, time_variations};

/// Words too common in program names to count as search terms. "stage"
/// alone is in here: every program carries it, so only the stage-qualified
/// phrase ("stage 2") is discriminating.
const STOPWORDS: [&str; 11] = [
    "and", "the", "for", "with", "lessons", "lesson", "class", "swim", "swimming", "session",
    "stage",
];

/// Matching behavior, fixed at matcher construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Fraction of non-trivial search terms that must appear in a row's
    /// text for a token-overlap match.
    pub overlap_threshold: f64,
    /// Minimum length for a program word to count as a search term.
    pub min_token_len: usize,
    /// Run the token-overlap pass aggressively from the start.
    pub aggressive: bool,
    /// Substitute the synthetic placeholder set when every pass comes up
    /// empty. Disabling this is the only way to receive an empty result.
    pub fallback_enabled: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: 0.5,
            min_token_len: 3,
            aggressive: false,
            fallback_enabled: true,
        }
    }
}

pub struct RecordMatcher {
    config: MatchConfig,
}

impl RecordMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Runs the escalating pass cascade and returns the rows judged to
    /// belong to the descriptor's class. Never fails; the worst case with
    /// fallback enabled is a synthetic placeholder set.
    pub fn match_class(&self, descriptor: &ClassDescriptor, roster: &RosterTable) -> MatchOutcome {
        let exact = self.exact_pass(descriptor, roster);
        if !exact.is_empty() {
            debug!(count = exact.len(), "exact pass matched");
            return MatchOutcome::real(exact);
        }

        let normalized = self.normalized_pass(descriptor, roster);
        if !normalized.is_empty() {
            debug!(count = normalized.len(), "normalized pass matched");
            return MatchOutcome::real(normalized);
        }

        let overlap = self.token_overlap_pass(descriptor, roster, self.config.aggressive);
        if !overlap.is_empty() {
            debug!(count = overlap.len(), "token overlap pass matched");
            return MatchOutcome::real(overlap);
        }

        if !roster.is_empty() && !self.config.aggressive {
            let aggressive = self.token_overlap_pass(descriptor, roster, true);
            if !aggressive.is_empty() {
                debug!(count = aggressive.len(), "aggressive overlap pass matched");
                return MatchOutcome::real(aggressive);
            }
        }

        if self.config.fallback_enabled {
            debug!(class = %descriptor.full_name, "no roster match, substituting placeholder set");
            MatchOutcome {
                records: placeholder_records(descriptor),
                provenance: Provenance::Synthetic,
            }
        } else {
            MatchOutcome::real(Vec::new())
        }
    }

    /// Pass 1: case-sensitive equality on all three fields.
    pub fn exact_pass(
        &self,
        descriptor: &ClassDescriptor,
        roster: &RosterTable,
    ) -> Vec<MatchedRecord> {
        roster
            .records
            .iter()
            .filter(|record| exact_row(descriptor, record))
            .map(|record| MatchedRecord {
                record: record.clone(),
                reason: MatchReason::Exact,
            })
            .collect()
    }

    /// Pass 2: case-insensitive containment per field, with day/time
    /// variations. A row matches only if all three fields pass.
    pub fn normalized_pass(
        &self,
        descriptor: &ClassDescriptor,
        roster: &RosterTable,
    ) -> Vec<MatchedRecord> {
        roster
            .records
            .iter()
            .filter_map(|record| {
                normalized_row(descriptor, record).map(|(day_variation, time_variation)| {
                    MatchedRecord {
                        record: record.clone(),
                        reason: MatchReason::Normalized {
                            day_variation,
                            time_variation,
                        },
                    }
                })
            })
            .collect()
    }

    /// Pass 3: search-term overlap against the row's concatenated text.
    pub fn token_overlap_pass(
        &self,
        descriptor: &ClassDescriptor,
        roster: &RosterTable,
        aggressive: bool,
    ) -> Vec<MatchedRecord> {
        let terms = SearchTerms::build(descriptor, &self.config);
        let threshold = if aggressive {
            self.config.overlap_threshold / 2.0
        } else {
            self.config.overlap_threshold
        };

        roster
            .records
            .iter()
            .filter_map(|record| {
                let blob = row_blob(record);
                let hits = terms.score(&blob);
                let accepted = (hits.total > 0 && hits.ratio() >= threshold)
                    || (hits.variation && (hits.program || hits.stage))
                    || (aggressive && hits.variation)
                    // Looser passes subsume the stricter ones.
                    || normalized_row(descriptor, record).is_some();
                accepted.then(|| MatchedRecord {
                    record: record.clone(),
                    reason: MatchReason::TokenOverlap {
                        matched: hits.matched,
                        total: hits.total,
                    },
                })
            })
            .collect()
    }
}

fn exact_row(descriptor: &ClassDescriptor, record: &EnrollmentRecord) -> bool {
    record.program == descriptor.program
        && record.day == descriptor.day
        && record.time == descriptor.time
}

/// Returns `Some((day_variation, time_variation))` when all three fields
/// match under normalization, flagging fields that needed a variation.
fn normalized_row(
    descriptor: &ClassDescriptor,
    record: &EnrollmentRecord,
) -> Option<(bool, bool)> {
    if !contains_ci(&record.program, &descriptor.program) {
        return None;
    }
    let day_variation = match field_with_variations(&record.day, &descriptor.day, day_variations) {
        Some(varied) => varied,
        None => return None,
    };
    let time_variation =
        match field_with_variations(&record.time, &descriptor.time, time_variations) {
            Some(varied) => varied,
            None => return None,
        };
    Some((day_variation, time_variation))
}

/// Containment in either direction, case-insensitive. An empty descriptor
/// field matches anything; an empty row field matches nothing else.
fn contains_ci(row_value: &str, wanted: &str) -> bool {
    let row_value = row_value.trim().to_lowercase();
    let wanted = wanted.trim().to_lowercase();
    if wanted.is_empty() {
        return true;
    }
    if row_value.is_empty() {
        return false;
    }
    row_value.contains(&wanted) || wanted.contains(&row_value)
}

/// Field match allowing generated variations; `Some(true)` means a
/// variation (not the original spelling) bridged the gap.
fn field_with_variations(
    row_value: &str,
    wanted: &str,
    generate: fn(&str) -> BTreeSet<String>,
) -> Option<bool> {
    if contains_ci(row_value, wanted) {
        return Some(false);
    }
    let row_lower = row_value.trim().to_lowercase();
    if row_lower.is_empty() {
        return None;
    }
    let wanted_lower = wanted.trim().to_lowercase();
    // Cross-wise only: every generated set contains its own input, so
    // same-side containment proves nothing. Single-character spellings
    // (the bare "9" of "9:00 AM") are skipped as too easy to contain.
    let bridged = generate(wanted).iter().any(|variation| {
        let variation = variation.trim().to_lowercase();
        variation.len() >= 2 && row_lower.contains(&variation)
    }) || generate(row_value).iter().any(|variation| {
        let variation = variation.trim().to_lowercase();
        variation.len() >= 2 && wanted_lower.contains(&variation)
    });
    bridged.then_some(true)
}

struct SearchTerms {
    /// Non-trivial terms counted toward the overlap ratio, lowercased.
    terms: Vec<String>,
    /// Program spellings (full string plus significant words).
    program_terms: Vec<String>,
    /// Stage spellings (`s2`, `stage 2`).
    stage_terms: Vec<String>,
    /// Day/time variation spellings.
    variation_terms: Vec<String>,
}

struct TermHits {
    matched: usize,
    total: usize,
    program: bool,
    stage: bool,
    variation: bool,
}

impl TermHits {
    fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }
}

impl SearchTerms {
    fn build(descriptor: &ClassDescriptor, config: &MatchConfig) -> Self {
        let mut program_terms = Vec::new();
        let program = descriptor.program.trim().to_lowercase();
        if !program.is_empty() {
            program_terms.push(program.clone());
        }
        for word in program.split_whitespace() {
            let word = word.trim_matches(|ch: char| !ch.is_alphanumeric());
            if word.len() >= config.min_token_len && !STOPWORDS.contains(&word) {
                program_terms.push(word.to_string());
            }
        }

        let mut stage_terms = Vec::new();
        if let Some(stage) = extract_stage(&descriptor.program) {
            stage_terms.push(stage.to_string().to_lowercase());
            stage_terms.push(format!("stage {}", stage.code().to_lowercase()));
        }

        // Single-character spellings (the bare "7" of "7:00 AM") match far
        // too much text to count as evidence.
        let mut variation_terms = Vec::new();
        if !descriptor.day.trim().is_empty() {
            for variation in day_variations(&descriptor.day) {
                if variation.len() >= 2 {
                    variation_terms.push(variation.to_lowercase());
                }
            }
        }
        if !descriptor.time.trim().is_empty() {
            for variation in time_variations(&descriptor.time) {
                if variation.len() >= 2 {
                    variation_terms.push(variation.to_lowercase());
                }
            }
        }

        // Ratio denominator: the distinct non-trivial terms.
        let mut terms: BTreeSet<String> = BTreeSet::new();
        for term in program_terms.iter().chain(&stage_terms) {
            if term.len() >= config.min_token_len {
                terms.insert(term.clone());
            }
        }
        if !descriptor.day.trim().is_empty() {
            terms.insert(descriptor.day.trim().to_lowercase());
        }
        let start = time_start_token(&descriptor.time);
        if start.len() >= config.min_token_len {
            terms.insert(start.to_lowercase());
        }

        Self {
            terms: terms.into_iter().collect(),
            program_terms,
            stage_terms,
            variation_terms,
        }
    }

    fn score(&self, blob: &str) -> TermHits {
        let matched = self.terms.iter().filter(|term| blob.contains(*term)).count();
        TermHits {
            matched,
            total: self.terms.len(),
            program: self.program_terms.iter().any(|term| blob.contains(term)),
            stage: self.stage_terms.iter().any(|term| blob.contains(term)),
            variation: self.variation_terms.iter().any(|term| blob.contains(term)),
        }
    }
}

/// All textual content of a row, lowercased, for token-overlap search.
fn row_blob(record: &EnrollmentRecord) -> String {
    let mut pieces = vec![
        record.first_name.as_str(),
        record.last_name.as_str(),
        record.program.as_str(),
        record.day.as_str(),
        record.time.as_str(),
    ];
    pieces.extend(record.raw_row.iter().map(String::as_str));
    pieces.join(" ").to_lowercase()
}

/// The labeled synthetic set substituted when no real row matches.
fn placeholder_records(descriptor: &ClassDescriptor) -> Vec<MatchedRecord> {
    ["Student A", "Student B", "Student C"]
        .into_iter()
        .enumerate()
        .map(|(index, last_name)| MatchedRecord {
            record: EnrollmentRecord {
                first_name: "Sample".to_string(),
                last_name: last_name.to_string(),
                program: descriptor.program.clone(),
                day: descriptor.day.clone(),
                time: descriptor.time.clone(),
                row_index: index,
                raw_row: Vec::new(),
            },
            reason: MatchReason::Placeholder,
        })
        .collect()
}
