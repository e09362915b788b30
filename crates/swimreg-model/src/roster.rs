use serde::{Deserialize, Serialize};

/// One row of the enrollment export, read-only once built.
///
/// `raw_row` keeps every cell of the source row so the token-overlap matcher
/// can search text that the semantic columns miss (notes, session labels,
/// combined fields from odd export formats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub day: String,
    pub time: String,
    /// Zero-based index of this row in the source table (header excluded).
    pub row_index: usize,
    pub raw_row: Vec<String>,
}

/// In-memory snapshot of the enrollment export taken at the start of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub records: Vec<EnrollmentRecord>,
    /// Rows dropped during ingest for shape problems. Diagnostic only.
    pub skipped_rows: usize,
}

impl RosterTable {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
