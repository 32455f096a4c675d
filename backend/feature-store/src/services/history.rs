use super::{audio_matrix, tag_matrix, validate_rows};
use crate::error::Result;
use crate::models::HistoryItem;
use ndarray::Array2;
use tracing::debug;

/// Consumer listening history, validated and held in memory
#[derive(Debug, Clone)]
pub struct HistoryProfile {
    items: Vec<HistoryItem>,
    tag_dim: usize,
    tag_vocabulary: Option<Vec<String>>,
}

impl HistoryProfile {
    pub fn new(items: Vec<HistoryItem>) -> Result<Self> {
        let tag_dim = validate_rows(&items)?;
        debug!(history_size = items.len(), tag_dim, "History loaded");

        Ok(Self {
            items,
            tag_dim,
            tag_vocabulary: None,
        })
    }

    pub fn with_tag_vocabulary(mut self, vocabulary: Vec<String>) -> Self {
        self.tag_vocabulary = Some(vocabulary);
        self
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn tag_dim(&self) -> usize {
        self.tag_dim
    }

    pub fn tag_vocabulary(&self) -> Option<&[String]> {
        self.tag_vocabulary.as_deref()
    }

    /// History ordered by playcount, most played first.
    /// Equal playcounts keep their original order.
    pub fn by_playcount(&self) -> Vec<&HistoryItem> {
        let mut sorted: Vec<&HistoryItem> = self.items.iter().collect();
        sorted.sort_by(|a, b| b.playcount.cmp(&a.playcount));
        sorted
    }

    /// (M x tag_dim) tag-count matrix
    pub fn tag_matrix(&self) -> Array2<f64> {
        tag_matrix(&self.items, self.tag_dim)
    }

    /// (M x 7) audio-feature matrix
    pub fn audio_matrix(&self) -> Array2<f64> {
        audio_matrix(&self.items)
    }
}
