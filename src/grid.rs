/// In-memory cell grid for the target sheet.
///
/// Rows may be ragged: reading past the end of a row (or past the last row)
/// yields a blank cell, and writes grow the addressed row as needed. This
/// matches how spreadsheet readers hand us partially populated sheets.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

/// A cell is blank when it is empty after trimming.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn n_cols(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn cell_is_blank(&self, row: usize, col: usize) -> bool {
        is_blank(self.cell(row, col))
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: String) {
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let r = &mut self.rows[row];
        if col >= r.len() {
            r.resize(col + 1, String::new());
        }
        r[col] = value;
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
