use super::{audio_matrix, tag_matrix, validate_rows};
use crate::error::Result;
use crate::models::CatalogItem;
use ndarray::Array2;
use tracing::debug;

/// Full track catalog, validated and held in memory
///
/// Immutable after construction, so a single store can be shared across
/// threads and queried with different blend parameters concurrently.
#[derive(Debug, Clone)]
pub struct FeatureStore {
    items: Vec<CatalogItem>,
    tag_dim: usize,
    tag_vocabulary: Option<Vec<String>>,
}

impl FeatureStore {
    /// Validate and wrap catalog items
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let tag_dim = validate_rows(&items)?;
        debug!(catalog_size = items.len(), tag_dim, "Catalog loaded");

        Ok(Self {
            items,
            tag_dim,
            tag_vocabulary: None,
        })
    }

    /// Attach the tag names backing each tag-vector position
    pub fn with_tag_vocabulary(mut self, vocabulary: Vec<String>) -> Self {
        self.tag_vocabulary = Some(vocabulary);
        self
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shared tag-vector length (0 when the catalog is empty)
    pub fn tag_dim(&self) -> usize {
        self.tag_dim
    }

    pub fn tag_vocabulary(&self) -> Option<&[String]> {
        self.tag_vocabulary.as_deref()
    }

    /// (N x tag_dim) tag-count matrix
    pub fn tag_matrix(&self) -> Array2<f64> {
        tag_matrix(&self.items, self.tag_dim)
    }

    /// (N x 7) audio-feature matrix
    pub fn audio_matrix(&self) -> Array2<f64> {
        audio_matrix(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeatureStoreError;
    use crate::models::{AudioFeatures, TrackIdentity};

    #[test]
    fn test_feature_store_new() {
        let items = vec![
            CatalogItem::new(TrackIdentity::new("a"), vec![1.0, 0.0, 2.0], AudioFeatures::default()),
            CatalogItem::new(TrackIdentity::new("b"), vec![0.0, 1.0, 0.0], AudioFeatures::default()),
        ];
        let store = FeatureStore::new(items).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.tag_dim(), 3);
        assert_eq!(store.tag_matrix().shape(), &[2, 3]);
        assert_eq!(store.audio_matrix().shape(), &[2, 7]);
        assert!(store.tag_vocabulary().is_none());
    }

    #[test]
    fn test_feature_store_rejects_ragged_tags() {
        let items = vec![
            CatalogItem::new(TrackIdentity::new("a"), vec![1.0, 0.0], AudioFeatures::default()),
            CatalogItem::new(TrackIdentity::new("b"), vec![1.0], AudioFeatures::default()),
        ];
        assert!(matches!(
            FeatureStore::new(items),
            Err(FeatureStoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let store = FeatureStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.tag_dim(), 0);
    }
}
