//! Enrollment export ingestion.
//!
//! Reads CSV exports into the plain-data tables the reconciliation core
//! consumes: a [`swimreg_model::RosterTable`] snapshot and a
//! [`swimreg_model::SkillCatalog`] partition of the skill columns. Header
//! synonyms are resolved once per load; rows with shape problems are skipped
//! and counted, never fatal.

pub mod csv_table;
pub mod roster;
pub mod skills;
pub mod source;

pub use csv_table::{CsvTable, read_csv_table};
pub use roster::build_roster;
pub use skills::partition_skills;
pub use source::CsvRosterSource;
