use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Columns every reference table must expose. Missing ones are synthesized
/// as empty rather than rejected.
pub const REQUIRED_COLUMNS: [&str; 4] = ["product_name", "parameter", "test_name_id", "alias"];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize a column header to lower_snake_case: trim, lowercase, collapse
/// internal whitespace into single underscores.
pub fn normalize_column_name(name: &str) -> String {
    WHITESPACE
        .replace_all(name.trim().to_lowercase().as_str(), "_")
        .to_string()
}

/// One row of the master reference table: the four name-variant fields plus
/// the full open attribute set, keyed by normalized column name.
#[derive(Debug, Clone)]
pub struct ReferenceRecord {
    pub test_name_id: String,
    pub product_name: String,
    pub parameter: String,
    pub alias: String,
    pub attributes: HashMap<String, String>,
}

impl ReferenceRecord {
    /// The canonical identifier for this record.
    pub fn canonical_id(&self) -> &str {
        self.test_name_id.trim()
    }

    /// The four name-variant fields in their fixed registration order.
    pub fn variants(&self) -> [&str; 4] {
        [
            &self.test_name_id,
            &self.product_name,
            &self.parameter,
            &self.alias,
        ]
    }
}

/// The master reference table with normalized schema.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    columns: Vec<String>,
    records: Vec<ReferenceRecord>,
}

impl ReferenceTable {
    /// Build from a raw header row and data rows. Headers are normalized to
    /// lower_snake_case; required columns absent from the input are carried
    /// as present-but-empty. Rows shorter than the header are padded with
    /// blanks, extra trailing cells are ignored.
    pub fn from_rows(header: &[String], rows: &[Vec<String>]) -> Self {
        let mut columns: Vec<String> = header.iter().map(|h| normalize_column_name(h)).collect();
        for required in REQUIRED_COLUMNS {
            if !columns.iter().any(|c| c == required) {
                columns.push(required.to_string());
            }
        }

        let records = rows
            .iter()
            .map(|row| {
                let attributes: HashMap<String, String> = columns
                    .iter()
                    .enumerate()
                    .map(|(idx, col)| {
                        let value = row.get(idx).cloned().unwrap_or_default();
                        (col.clone(), value)
                    })
                    .collect();
                let field = |name: &str| attributes.get(name).cloned().unwrap_or_default();
                let test_name_id = field("test_name_id");
                let product_name = field("product_name");
                let parameter = field("parameter");
                let alias = field("alias");
                ReferenceRecord {
                    test_name_id,
                    product_name,
                    parameter,
                    alias,
                    attributes,
                }
            })
            .collect();

        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }
}
