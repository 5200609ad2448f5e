use serde::{Deserialize, Serialize};

/// Default similarity cutoff for both header and label resolution.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Structural parameters of a fill run.
///
/// All row/column indices are 0-based into the target grid. The defaults
/// mirror the layout this tool was originally deployed against: the question
/// row is spreadsheet row 6, data starts one row below it, parameter labels
/// live in spreadsheet column B, and answer columns start at column G.
///
/// Nothing here is auto-detected; the config is built once and threaded
/// through the fill pass explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillConfig {
    /// Row holding the free-text question headers.
    pub header_row: usize,
    /// First data row, normally `header_row + 1`.
    pub data_start_row: usize,
    /// Column holding the free-text parameter labels.
    pub label_column: usize,
    /// First column to attempt to fill.
    pub data_start_column: usize,
    /// Similarity cutoff for matching headers against mapping questions.
    pub question_cutoff: f64,
    /// Similarity cutoff for matching row labels against reference variants.
    pub parameter_cutoff: f64,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            header_row: 5,
            data_start_row: 6,
            label_column: 1,
            data_start_column: 6,
            question_cutoff: DEFAULT_CUTOFF,
            parameter_cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl FillConfig {
    pub fn with_cutoffs(mut self, question_cutoff: f64, parameter_cutoff: f64) -> Self {
        self.question_cutoff = question_cutoff;
        self.parameter_cutoff = parameter_cutoff;
        self
    }
}
