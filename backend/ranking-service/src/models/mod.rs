use feature_store::TrackIdentity;
use serde::{Deserialize, Serialize};

/// One ranked track in a playlist
///
/// `relevance` is a mean cosine distance to the history tags: larger means
/// *less* similar to what the listener already plays. Scores are ranked
/// descending, so a relevance-heavy blend surfaces the most dissimilar tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    #[serde(flatten)]
    pub identity: TrackIdentity,
    /// Mean tag cosine distance to the history, in [0, 2] ([0, 1] for counts)
    pub relevance: f64,
    /// Mean halved audio-feature cosine distance to the history, in [0, 1]
    pub novelty: f64,
    pub nr_score: f64,
}

impl RecommendationRecord {
    pub fn track_id(&self) -> &str {
        &self.identity.track_id
    }
}

/// Score triple for a catalog position, before identity fields are attached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIndex {
    pub index: usize,
    pub relevance: f64,
    pub novelty: f64,
    pub nr_score: f64,
}

/// Zero-magnitude vectors met while computing one feature space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DegenerateCounts {
    pub catalog_rows: usize,
    pub history_rows: usize,
    /// (catalog, history) pairs that fell back to distance 1.0
    pub pairs: usize,
}

impl DegenerateCounts {
    pub fn is_empty(&self) -> bool {
        self.pairs == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_flat() {
        let record = RecommendationRecord {
            identity: TrackIdentity {
                track_id: "t1".to_string(),
                name: "Song".to_string(),
                artist: "Artist".to_string(),
                preview_url: "http://p".to_string(),
                year: Some(1999),
                tags: "rock".to_string(),
            },
            relevance: 0.25,
            novelty: 0.5,
            nr_score: 0.375,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["track_id"], "t1");
        assert_eq!(json["preview_url"], "http://p");
        assert_eq!(json["year"], 1999);
        assert_eq!(json["nr_score"], 0.375);
        assert!(json.get("identity").is_none());
    }
}
