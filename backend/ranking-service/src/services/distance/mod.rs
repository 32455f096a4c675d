//! Distance Module
//!
//! Mean cosine distance from every catalog track to the listener's history,
//! in two independent feature spaces.
//!
//! # Feature spaces
//! - **Tags** (relevance): raw cosine distance over tag-count vectors
//! - **Audio** (novelty): cosine distance over the 7 audio attributes, halved
//!   into [0, 1]
//!
//! Rows are L2-normalized once and similarities come from one matrix product
//! per catalog row block, so peak memory is `chunk_rows x history_size`.

use crate::error::{RankingError, Result};
use crate::models::DegenerateCounts;
use feature_store::utils::normalize_rows;
use feature_store::{FeatureStore, HistoryProfile};
use ndarray::{s, Array1, Array2, Axis};
use tracing::{debug, info, warn};

/// Default catalog rows per distance block
pub const DEFAULT_CHUNK_ROWS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSpace {
    Tags,
    Audio,
}

impl FeatureSpace {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureSpace::Tags => "tags",
            FeatureSpace::Audio => "audio",
        }
    }

    /// Factor applied to the raw [0, 2] cosine distance
    fn scale(&self) -> f64 {
        match self {
            FeatureSpace::Tags => 1.0,
            FeatureSpace::Audio => 0.5,
        }
    }
}

/// Per-track mean distances, aligned with catalog order
#[derive(Debug, Clone)]
pub struct DistanceScores {
    pub relevance: Array1<f64>,
    pub novelty: Array1<f64>,
    pub tag_degenerate: DegenerateCounts,
    pub audio_degenerate: DegenerateCounts,
}

/// Mean distances of one feature space
#[derive(Debug, Clone)]
pub struct SpaceDistances {
    pub means: Array1<f64>,
    pub degenerate: DegenerateCounts,
    pub degenerate_catalog_rows: Vec<usize>,
    pub degenerate_history_rows: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct DistanceEngine {
    chunk_rows: usize,
}

impl Default for DistanceEngine {
    fn default() -> Self {
        Self {
            chunk_rows: DEFAULT_CHUNK_ROWS,
        }
    }
}

impl DistanceEngine {
    pub fn new(chunk_rows: usize) -> Result<Self> {
        if chunk_rows == 0 {
            return Err(RankingError::invalid("chunk_rows", "must be at least 1"));
        }
        Ok(Self { chunk_rows })
    }

    pub fn chunk_rows(&self) -> usize {
        self.chunk_rows
    }

    /// Relevance and novelty for every catalog track.
    ///
    /// Fails before any distance is computed when the history is empty or the
    /// tag dimensionalities disagree.
    pub fn compute(&self, catalog: &FeatureStore, history: &HistoryProfile) -> Result<DistanceScores> {
        validate_inputs(catalog, history)?;

        info!(
            catalog_size = catalog.len(),
            history_size = history.len(),
            tag_dim = history.tag_dim(),
            chunk_rows = self.chunk_rows,
            "Computing distance scores"
        );

        let tags = self.mean_cosine_distances(
            &catalog.tag_matrix(),
            &history.tag_matrix(),
            FeatureSpace::Tags,
        );
        report_degenerate(FeatureSpace::Tags, &tags, catalog, history);

        let audio = self.mean_cosine_distances(
            &catalog.audio_matrix(),
            &history.audio_matrix(),
            FeatureSpace::Audio,
        );
        report_degenerate(FeatureSpace::Audio, &audio, catalog, history);

        Ok(DistanceScores {
            relevance: tags.means,
            novelty: audio.means,
            tag_degenerate: tags.degenerate,
            audio_degenerate: audio.degenerate,
        })
    }

    /// Row means of the (catalog x history) cosine-distance matrix, scaled for `space`.
    ///
    /// A zero-magnitude row has similarity 0 with everything, i.e. raw distance 1.0.
    /// Raw distances are clipped to [0, 2].
    pub fn mean_cosine_distances(
        &self,
        catalog: &Array2<f64>,
        history: &Array2<f64>,
        space: FeatureSpace,
    ) -> SpaceDistances {
        let n = catalog.nrows();
        let m = history.nrows();
        let scale = space.scale();

        let catalog_rows = normalize_rows(catalog);
        let history_rows = normalize_rows(history);
        let history_t = history_rows.matrix.t();

        let mut means = Array1::<f64>::zeros(n);
        if m > 0 {
            for (block_idx, block) in catalog_rows
                .matrix
                .axis_chunks_iter(Axis(0), self.chunk_rows)
                .enumerate()
            {
                let start = block_idx * self.chunk_rows;
                let distances = block
                    .dot(&history_t)
                    .mapv(|similarity| (1.0 - similarity).clamp(0.0, 2.0) * scale);
                let block_means = distances.sum_axis(Axis(1)) / m as f64;
                means
                    .slice_mut(s![start..start + block.nrows()])
                    .assign(&block_means);

                debug!(
                    space = space.as_str(),
                    block = block_idx,
                    rows = block.nrows(),
                    "Distance block done"
                );
            }
        }

        let catalog_zero = catalog_rows.zero_rows.len();
        let history_zero = history_rows.zero_rows.len();
        let degenerate = DegenerateCounts {
            catalog_rows: catalog_zero,
            history_rows: history_zero,
            pairs: catalog_zero * m + history_zero * n - catalog_zero * history_zero,
        };

        SpaceDistances {
            means,
            degenerate,
            degenerate_catalog_rows: catalog_rows.zero_rows,
            degenerate_history_rows: history_rows.zero_rows,
        }
    }
}

/// Input contract checked before any distance work
pub fn validate_inputs(catalog: &FeatureStore, history: &HistoryProfile) -> Result<()> {
    if history.is_empty() {
        return Err(RankingError::EmptyHistory);
    }

    if !catalog.is_empty() && catalog.tag_dim() != history.tag_dim() {
        return Err(RankingError::DimensionMismatch {
            what: "tag vector length",
            catalog: catalog.tag_dim(),
            history: history.tag_dim(),
        });
    }

    Ok(())
}

fn report_degenerate(
    space: FeatureSpace,
    distances: &SpaceDistances,
    catalog: &FeatureStore,
    history: &HistoryProfile,
) {
    if distances.degenerate.is_empty() {
        return;
    }

    warn!(
        space = space.as_str(),
        catalog_rows = distances.degenerate.catalog_rows,
        history_rows = distances.degenerate.history_rows,
        pairs = distances.degenerate.pairs,
        "Zero-magnitude feature vectors, using distance 1.0 for affected pairs"
    );

    for &idx in &distances.degenerate_catalog_rows {
        debug!(
            space = space.as_str(),
            track_id = catalog.items()[idx].track_id(),
            "Degenerate catalog vector"
        );
    }
    for &idx in &distances.degenerate_history_rows {
        debug!(
            space = space.as_str(),
            track_id = history.items()[idx].track_id(),
            "Degenerate history vector"
        );
    }
}
