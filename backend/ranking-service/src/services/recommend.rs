// Novelty-relevance playlist pipeline: validate -> distances -> ranking

use super::distance::{DistanceEngine, DEFAULT_CHUNK_ROWS};
use super::ranking::{Alpha, RankingSelector, DEFAULT_TOP_K};
use crate::error::Result;
use crate::models::RecommendationRecord;
use feature_store::{FeatureStore, HistoryProfile};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderOptions {
    /// Playlist length
    pub top_k: usize,
    /// Catalog rows per distance block
    pub chunk_rows: usize,
}

impl Default for RecommenderOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            chunk_rows: DEFAULT_CHUNK_ROWS,
        }
    }
}

/// Stateless recommender; one instance can serve concurrent callers
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    engine: DistanceEngine,
    selector: RankingSelector,
}

impl Recommender {
    pub fn new(options: RecommenderOptions) -> Result<Self> {
        Ok(Self {
            engine: DistanceEngine::new(options.chunk_rows)?,
            selector: RankingSelector::new(options.top_k)?,
        })
    }

    /// Rank `catalog` for the listener described by `history`.
    ///
    /// Returns `min(top_k, catalog.len())` records ordered by `nr_score`
    /// descending. Alpha, history emptiness and tag dimensionality are all
    /// checked before any distance is computed.
    pub fn recommend(
        &self,
        catalog: &FeatureStore,
        history: &HistoryProfile,
        alpha: f64,
    ) -> Result<Vec<RecommendationRecord>> {
        let alpha = Alpha::new(alpha)?;

        let scores = self.engine.compute(catalog, history)?;
        if catalog.is_empty() {
            debug!("Empty catalog, nothing to rank");
            return Ok(Vec::new());
        }

        let records = self.selector.select(catalog, &scores, alpha);

        info!(
            alpha = alpha.value(),
            catalog_size = catalog.len(),
            history_size = history.len(),
            returned = records.len(),
            "Recommendations ready"
        );

        Ok(records)
    }
}

/// Top-10 playlist with default options
pub fn recommend(
    catalog: &FeatureStore,
    history: &HistoryProfile,
    alpha: f64,
) -> Result<Vec<RecommendationRecord>> {
    Recommender::default().recommend(catalog, history, alpha)
}
