//! Reconciliation result types.
//!
//! Every matched row carries a [`MatchReason`] naming the pass and rule that
//! produced it, and every result set carries a [`Provenance`] tag so
//! downstream consumers can tell real matches from synthetic placeholders
//! without string-sniffing. A reconciliation never yields "no data": when
//! fallback is enabled the worst case is a labeled synthetic set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::ClassDescriptor;
use crate::roster::EnrollmentRecord;
use crate::skills::SkillCatalog;
use crate::stage::Stage;

/// Which matching pass and rule accepted a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pass")]
pub enum MatchReason {
    /// Program, day, and time equal the descriptor exactly.
    Exact,
    /// Case-insensitive containment on all three fields; the flags record
    /// whether a day or time variation was needed to bridge notation.
    Normalized {
        day_variation: bool,
        time_variation: bool,
    },
    /// Descriptor search terms found in the row's concatenated text.
    TokenOverlap { matched: usize, total: usize },
    /// Synthetic placeholder row, not sourced from the roster.
    Placeholder,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Normalized {
                day_variation,
                time_variation,
            } => {
                write!(f, "normalized")?;
                match (day_variation, time_variation) {
                    (true, true) => write!(f, " (day+time variation)"),
                    (true, false) => write!(f, " (day variation)"),
                    (false, true) => write!(f, " (time variation)"),
                    (false, false) => Ok(()),
                }
            }
            Self::TokenOverlap { matched, total } => {
                write!(f, "token overlap {matched}/{total}")
            }
            Self::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// Whether a result set came from the roster or was synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    Real,
    Synthetic,
}

impl Provenance {
    pub fn description(self) -> &'static str {
        match self {
            Self::Real => "matched from roster",
            Self::Synthetic => "synthetic placeholder - no roster match",
        }
    }
}

/// A roster row accepted by the matcher, tagged with why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedRecord {
    pub record: EnrollmentRecord,
    pub reason: MatchReason,
}

/// Raw matcher output before skill projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Accepted rows in source table order.
    pub records: Vec<MatchedRecord>,
    pub provenance: Provenance,
}

impl MatchOutcome {
    pub fn real(records: Vec<MatchedRecord>) -> Self {
        Self {
            records,
            provenance: Provenance::Real,
        }
    }
}

/// One student as handed to presentation collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedStudent {
    pub first_name: String,
    pub last_name: String,
    pub reason: MatchReason,
    pub provenance: Provenance,
    /// Skill header to recorded value, empty string when unassessed.
    pub skills: BTreeMap<String, String>,
}

/// The matched-student list for one class selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRoster {
    pub students: Vec<MatchedStudent>,
    pub provenance: Provenance,
}

/// Everything one reconciliation run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reconciliation {
    pub descriptor: ClassDescriptor,
    pub stage: Option<Stage>,
    pub roster: ClassRoster,
    pub skills: SkillCatalog,
}
