//! CSV ingestion and serialization for the three tabular inputs.
//!
//! File handling lives here, at the edge; the matching core only ever sees
//! the in-memory structures these functions produce. Structural problems
//! (unreadable files, a mapping sheet without its two rows) are the only
//! fatal errors in the crate.

use crate::error::{FillError, Result};
use crate::grid::Grid;
use crate::table::ReferenceTable;
use std::path::Path;
use tracing::info;

fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

/// Load the master reference table. The first row is the header; missing
/// required columns are synthesized as empty by the table itself.
pub fn read_reference(path: &Path) -> Result<ReferenceTable> {
    let rows = read_rows(path)?;
    let (header, data) = rows
        .split_first()
        .ok_or_else(|| FillError::Reference(format!("{}: empty table", path.display())))?;
    let table = ReferenceTable::from_rows(header, data);
    info!(
        path = %path.display(),
        records = table.records().len(),
        "reference table loaded"
    );
    Ok(table)
}

/// Load the headerless mapping sheet: row 0 is questions, row 1 is target
/// attribute names. Fewer than two rows is a structural failure.
pub fn read_mapping(path: &Path) -> Result<(Vec<String>, Vec<String>)> {
    let rows = read_rows(path)?;
    if rows.len() < 2 {
        return Err(FillError::Mapping(format!(
            "{}: expected two rows (questions, attributes), found {}",
            path.display(),
            rows.len()
        )));
    }
    Ok((rows[0].clone(), rows[1].clone()))
}

/// Load the target grid as raw cells.
pub fn read_grid(path: &Path) -> Result<Grid> {
    let rows = read_rows(path)?;
    info!(path = %path.display(), rows = rows.len(), "target grid loaded");
    Ok(Grid::new(rows))
}

/// Write the (filled) grid back out. Rows are padded to a uniform width so
/// the output stays rectangular.
pub fn write_grid(path: &Path, grid: &Grid) -> Result<()> {
    let width = grid.n_cols();
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for row in grid.rows() {
        let mut record: Vec<&str> = row.iter().map(String::as_str).collect();
        record.resize(width, "");
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
