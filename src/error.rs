use thiserror::Error;

#[derive(Error, Debug)]
pub enum FillError {
    #[error("Reference table error: {0}")]
    Reference(String),

    #[error("Mapping table error: {0}")]
    Mapping(String),

    #[error("Target grid error: {0}")]
    Grid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FillError>;
