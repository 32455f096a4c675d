//! Catalog and listening-history feature data for the Adventure playlist ranker
//!
//! - `models`: track identity, tag vectors, the 7 audio attributes
//! - `services`: validated in-memory `FeatureStore` (catalog) and `HistoryProfile`
//! - `ingestion`: CSV loading with documented column offsets
//! - `utils`: cosine / row-normalization helpers over ndarray

pub mod error;
pub mod ingestion;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use error::{FeatureStoreError, Result};
pub use ingestion::{load_catalog, load_history, CsvLayout};
pub use models::{
    AudioFeatures, CatalogItem, FeatureRow, HistoryItem, TrackIdentity, AUDIO_FEATURE_DIM,
    AUDIO_FEATURE_NAMES,
};
pub use services::{FeatureStore, HistoryProfile};
