use feature_store::FeatureStoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RankingError>;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Dimension mismatch for {what}: catalog has {catalog}, history has {history}")]
    DimensionMismatch {
        what: &'static str,
        catalog: usize,
        history: usize,
    },

    #[error("Listening history is empty; at least one history track is required")]
    EmptyHistory,

    #[error("Feature data error: {0}")]
    FeatureStore(#[from] FeatureStoreError),
}

impl RankingError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        RankingError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
