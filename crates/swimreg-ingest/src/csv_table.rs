use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// Raw CSV content: a header row and data rows, whitespace-normalized.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file into a [`CsvTable`]. The first row is the header row;
/// ragged rows are tolerated (downstream code skips or pads as needed).
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open csv {}", path.display()))?;

    let mut table = CsvTable::default();
    for (index, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("read csv row {index}"))?;
        if index == 0 {
            table.headers = record.iter().map(normalize_header).collect();
        } else {
            table.rows.push(record.iter().map(normalize_cell).collect());
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_headers_and_rows() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "\u{feff}First Name , Last Name,Program").expect("write");
        writeln!(file, " Ann ,Lee,Stage 1").expect("write");
        writeln!(file, "Ben,Cho").expect("write");
        let table = read_csv_table(file.path()).expect("read");
        assert_eq!(table.headers, vec!["First Name", "Last Name", "Program"]);
        assert_eq!(table.rows[0], vec!["Ann", "Lee", "Stage 1"]);
        // Ragged rows survive ingest; downstream decides what to do.
        assert_eq!(table.rows[1], vec!["Ben", "Cho"]);
    }
}
