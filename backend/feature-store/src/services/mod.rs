pub mod catalog;
pub mod history;

pub use catalog::FeatureStore;
pub use history::HistoryProfile;

use crate::error::{FeatureStoreError, Result};
use crate::models::{FeatureRow, AUDIO_FEATURE_DIM, AUDIO_FEATURE_NAMES};
use ndarray::Array2;

/// Check the input contract shared by catalog and history rows:
/// one tag dimensionality for every row, finite values everywhere.
///
/// Returns the common tag dimensionality (0 for an empty table).
pub(crate) fn validate_rows<R: FeatureRow>(rows: &[R]) -> Result<usize> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };
    let tag_dim = first.tag_vector().len();

    for row in rows {
        let tags = row.tag_vector();
        if tags.len() != tag_dim {
            return Err(FeatureStoreError::DimensionMismatch {
                track_id: row.track_id().to_string(),
                what: "tag vector",
                expected: tag_dim,
                actual: tags.len(),
            });
        }

        if let Some(idx) = tags.iter().position(|v| !v.is_finite()) {
            return Err(FeatureStoreError::InvalidFeatureValue {
                track_id: row.track_id().to_string(),
                column: format!("tag[{}]", idx),
            });
        }

        if let Some(idx) = row.audio().to_array().iter().position(|v| !v.is_finite()) {
            return Err(FeatureStoreError::InvalidFeatureValue {
                track_id: row.track_id().to_string(),
                column: AUDIO_FEATURE_NAMES[idx].to_string(),
            });
        }
    }

    Ok(tag_dim)
}

/// Stack tag vectors into an (rows x tag_dim) matrix.
pub(crate) fn tag_matrix<R: FeatureRow>(rows: &[R], tag_dim: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows.len(), tag_dim), |(i, j)| rows[i].tag_vector()[j])
}

/// Stack audio-feature vectors into an (rows x 7) matrix.
pub(crate) fn audio_matrix<R: FeatureRow>(rows: &[R]) -> Array2<f64> {
    let arrays: Vec<[f64; AUDIO_FEATURE_DIM]> = rows.iter().map(|r| r.audio().to_array()).collect();
    Array2::from_shape_fn((rows.len(), AUDIO_FEATURE_DIM), |(i, j)| arrays[i][j])
}
