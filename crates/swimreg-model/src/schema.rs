//! Roster column schema.
//!
//! Enrollment exports label the same semantic columns differently depending
//! on which registration system produced them. Rather than re-scanning
//! headers on every access, the accepted synonyms per semantic field are
//! declared here and resolved once per table load into a typed column-index
//! map.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::lookup::CaseInsensitiveSet;

/// The semantic columns the reconciliation core requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RosterField {
    FirstName,
    LastName,
    Program,
    Day,
    Time,
}

impl RosterField {
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Program,
        Self::Day,
        Self::Time,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Program => "program",
            Self::Day => "day",
            Self::Time => "time",
        }
    }

    /// Header spellings accepted for this field, compared case-insensitively
    /// after whitespace normalization.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::FirstName => &[
                "first name",
                "first",
                "student first name",
                "child first name",
                "participant first name",
                "fname",
                "given name",
            ],
            Self::LastName => &[
                "last name",
                "last",
                "student last name",
                "child last name",
                "participant last name",
                "lname",
                "surname",
                "family name",
            ],
            Self::Program => &[
                "program",
                "program name",
                "class",
                "class name",
                "lesson",
                "activity",
                "course",
                "session",
            ],
            Self::Day => &["day", "days", "day of week", "weekday", "meeting day"],
            Self::Time => &[
                "time",
                "times",
                "class time",
                "start time",
                "meeting time",
                "time slot",
            ],
        }
    }
}

/// Declared header synonyms for every roster field.
#[derive(Debug, Clone)]
pub struct RosterSchema {
    sets: Vec<(RosterField, CaseInsensitiveSet)>,
}

impl Default for RosterSchema {
    fn default() -> Self {
        let sets = RosterField::ALL
            .into_iter()
            .map(|field| (field, CaseInsensitiveSet::new(field.synonyms())))
            .collect();
        Self { sets }
    }
}

/// Column indices after resolving a header row against a [`RosterSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub first_name: usize,
    pub last_name: usize,
    pub program: usize,
    pub day: usize,
    pub time: usize,
}

impl RosterSchema {
    /// Resolves a header row into a typed column-index map.
    ///
    /// Resolution is a two-phase scan per field: exact synonym equality
    /// first, then substring containment (header contains synonym) for
    /// exports that decorate headers ("Student First Name *"). A field with
    /// no matching header is a hard ingest error; everything downstream of
    /// ingest assumes resolution succeeded.
    pub fn resolve(&self, headers: &[String]) -> Result<ResolvedColumns> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let mut indices = [None; RosterField::ALL.len()];

        for (slot, (_, set)) in indices.iter_mut().zip(&self.sets) {
            *slot = normalized.iter().position(|header| set.contains(header));
        }
        // Containment pass for fields the exact scan missed.
        for (slot, (field, _)) in indices.iter_mut().zip(&self.sets) {
            if slot.is_some() {
                continue;
            }
            *slot = normalized.iter().position(|header| {
                field
                    .synonyms()
                    .iter()
                    .any(|synonym| header.contains(synonym))
            });
        }

        let require = |index: Option<usize>, field: RosterField| {
            index.ok_or(RosterError::MissingColumn(field.name()))
        };
        Ok(ResolvedColumns {
            first_name: require(indices[0], RosterField::FirstName)?,
            last_name: require(indices[1], RosterField::LastName)?,
            program: require(indices[2], RosterField::Program)?,
            day: require(indices[3], RosterField::Day)?,
            time: require(indices[4], RosterField::Time)?,
        })
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
