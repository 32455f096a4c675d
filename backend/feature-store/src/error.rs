use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeatureStoreError>;

#[derive(Debug, Error)]
pub enum FeatureStoreError {
    #[error("Dimension mismatch for {what} of track {track_id}: expected {expected}, got {actual}")]
    DimensionMismatch {
        track_id: String,
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Non-finite value in column '{column}' of track {track_id}")]
    InvalidFeatureValue { track_id: String, column: String },

    #[error("Missing column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    #[error("Parse error in {path} at line {line}, column '{column}': {message}")]
    Parse {
        path: String,
        line: u64,
        column: String,
        message: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
