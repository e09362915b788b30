use tracing::warn;

use swimreg_model::{EnrollmentRecord, ResolvedColumns, RosterTable};

use crate::csv_table::CsvTable;

/// Builds the roster snapshot from a raw CSV table.
///
/// Rows too short to carry the resolved semantic columns, and rows with no
/// student name at all, are skipped and counted. Shape problems never fail
/// the build.
pub fn build_roster(table: &CsvTable, columns: &ResolvedColumns) -> RosterTable {
    let needed = [
        columns.first_name,
        columns.last_name,
        columns.program,
        columns.day,
        columns.time,
    ]
    .into_iter()
    .max()
    .unwrap_or(0);

    let mut records = Vec::new();
    let mut skipped_rows = 0usize;
    for (row_index, row) in table.rows.iter().enumerate() {
        if row.len() <= needed {
            warn!(row = row_index, cells = row.len(), "skipping short roster row");
            skipped_rows += 1;
            continue;
        }
        let first_name = row[columns.first_name].trim().to_string();
        let last_name = row[columns.last_name].trim().to_string();
        if first_name.is_empty() && last_name.is_empty() {
            warn!(row = row_index, "skipping roster row with no student name");
            skipped_rows += 1;
            continue;
        }
        records.push(EnrollmentRecord {
            first_name,
            last_name,
            program: row[columns.program].trim().to_string(),
            day: row[columns.day].trim().to_string(),
            time: row[columns.time].trim().to_string(),
            row_index,
            raw_row: row.clone(),
        });
    }

    RosterTable {
        headers: table.headers.clone(),
        records,
        skipped_rows,
    }
}
