//! Ranking Module
//!
//! Blends per-track relevance and novelty into `nr_score` and keeps the top K.
//!
//! # Ordering
//! - Descending by `nr_score`
//! - Equal scores keep catalog order (stable sort)

pub mod alpha;

pub use alpha::Alpha;

use super::distance::DistanceScores;
use crate::error::{RankingError, Result};
use crate::models::{RecommendationRecord, ScoredIndex};
use feature_store::FeatureStore;
use ndarray::ArrayView1;
use tracing::debug;

/// Default playlist length
pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone)]
pub struct RankingSelector {
    top_k: usize,
}

impl Default for RankingSelector {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl RankingSelector {
    pub fn new(top_k: usize) -> Result<Self> {
        if top_k == 0 {
            return Err(RankingError::invalid("top_k", "must be at least 1"));
        }
        Ok(Self { top_k })
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Score every position and keep the best `min(top_k, len)`
    pub fn rank(
        &self,
        relevance: ArrayView1<f64>,
        novelty: ArrayView1<f64>,
        alpha: Alpha,
    ) -> Vec<ScoredIndex> {
        let mut scored: Vec<ScoredIndex> = relevance
            .iter()
            .zip(novelty.iter())
            .enumerate()
            .map(|(index, (&relevance, &novelty))| ScoredIndex {
                index,
                relevance,
                novelty,
                nr_score: alpha.blend(novelty, relevance),
            })
            .collect();

        // Stable: ties stay in catalog order
        scored.sort_by(|a, b| {
            b.nr_score
                .partial_cmp(&a.nr_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.top_k);

        debug!(
            alpha = alpha.value(),
            candidates = relevance.len(),
            selected = scored.len(),
            top_score = scored.first().map(|s| s.nr_score),
            "Ranking complete"
        );

        scored
    }

    /// Top tracks of `catalog` as output records
    pub fn select(
        &self,
        catalog: &FeatureStore,
        scores: &DistanceScores,
        alpha: Alpha,
    ) -> Vec<RecommendationRecord> {
        self.rank(scores.relevance.view(), scores.novelty.view(), alpha)
            .into_iter()
            .map(|scored| RecommendationRecord {
                identity: catalog.items()[scored.index].identity.clone(),
                relevance: scored.relevance,
                novelty: scored.novelty,
                nr_score: scored.nr_score,
            })
            .collect()
    }
}
