use std::path::{Path, PathBuf};

use anyhow::Result;

use swimreg_match::RosterSource;
use swimreg_model::{RosterSchema, RosterTable, SkillCatalog};

use crate::csv_table::read_csv_table;
use crate::roster::build_roster;
use crate::skills::partition_skills;

/// Roster collaborator backed by one CSV export file.
///
/// The same sheet carries the semantic student columns and the skill
/// columns, so the skill catalog comes from the same header row.
pub struct CsvRosterSource {
    path: PathBuf,
    schema: RosterSchema,
}

impl CsvRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            schema: RosterSchema::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the roster and the skill catalog from the export in one read.
    pub fn load_with_catalog(&self) -> Result<(RosterTable, SkillCatalog)> {
        let table = read_csv_table(&self.path)?;
        let columns = self.schema.resolve(&table.headers)?;
        let catalog = partition_skills(&table.headers);
        Ok((build_roster(&table, &columns), catalog))
    }
}

impl RosterSource for CsvRosterSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<RosterTable> {
        let (roster, _) = self.load_with_catalog()?;
        Ok(roster)
    }
}
