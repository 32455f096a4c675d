// Domain models for the track catalog and listening history

use crate::error::{FeatureStoreError, Result};
use serde::{Deserialize, Serialize};

/// Number of audio attributes describing a track's sonic character
pub const AUDIO_FEATURE_DIM: usize = 7;

/// Audio attribute column names, in vector order
pub const AUDIO_FEATURE_NAMES: [&str; AUDIO_FEATURE_DIM] = [
    "danceability",
    "energy",
    "speechiness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo_scaled",
];

/// Display / identity fields of a track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackIdentity {
    pub track_id: String,
    pub name: String,
    pub artist: String,
    pub preview_url: String,
    pub year: Option<i32>,
    /// Human readable tag list, e.g. "rock, indie, 2000s"
    pub tags: String,
}

impl TrackIdentity {
    pub fn new(track_id: impl Into<String>) -> Self {
        Self {
            track_id: track_id.into(),
            ..Default::default()
        }
    }
}

/// Pre-normalized audio attributes of a track
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub danceability: f64,
    pub energy: f64,
    pub speechiness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo_scaled: f64,
}

impl AudioFeatures {
    /// Build from a slice in `AUDIO_FEATURE_NAMES` order.
    pub fn from_slice(track_id: &str, values: &[f64]) -> Result<Self> {
        let array = <[f64; AUDIO_FEATURE_DIM]>::try_from(values).map_err(|_| {
            FeatureStoreError::DimensionMismatch {
                track_id: track_id.to_string(),
                what: "audio-feature vector",
                expected: AUDIO_FEATURE_DIM,
                actual: values.len(),
            }
        })?;
        let [danceability, energy, speechiness, instrumentalness, liveness, valence, tempo_scaled] =
            array;

        Ok(Self {
            danceability,
            energy,
            speechiness,
            instrumentalness,
            liveness,
            valence,
            tempo_scaled,
        })
    }

    pub fn to_array(&self) -> [f64; AUDIO_FEATURE_DIM] {
        [
            self.danceability,
            self.energy,
            self.speechiness,
            self.instrumentalness,
            self.liveness,
            self.valence,
            self.tempo_scaled,
        ]
    }
}

/// A track available for recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub identity: TrackIdentity,
    /// Tag counts; every item in a catalog / history shares the same length
    pub tag_vector: Vec<f64>,
    pub audio: AudioFeatures,
}

impl CatalogItem {
    pub fn new(identity: TrackIdentity, tag_vector: Vec<f64>, audio: AudioFeatures) -> Self {
        Self {
            identity,
            tag_vector,
            audio,
        }
    }

    pub fn track_id(&self) -> &str {
        &self.identity.track_id
    }
}

/// A track from the consumer's listening history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub identity: TrackIdentity,
    pub tag_vector: Vec<f64>,
    pub audio: AudioFeatures,
    /// Display ordering only
    pub playcount: u64,
}

impl HistoryItem {
    pub fn new(
        identity: TrackIdentity,
        tag_vector: Vec<f64>,
        audio: AudioFeatures,
        playcount: u64,
    ) -> Self {
        Self {
            identity,
            tag_vector,
            audio,
            playcount,
        }
    }

    pub fn track_id(&self) -> &str {
        &self.identity.track_id
    }
}

/// Common view over catalog and history rows
pub trait FeatureRow {
    fn track_id(&self) -> &str;
    fn tag_vector(&self) -> &[f64];
    fn audio(&self) -> &AudioFeatures;
}

impl FeatureRow for CatalogItem {
    fn track_id(&self) -> &str {
        &self.identity.track_id
    }

    fn tag_vector(&self) -> &[f64] {
        &self.tag_vector
    }

    fn audio(&self) -> &AudioFeatures {
        &self.audio
    }
}

impl FeatureRow for HistoryItem {
    fn track_id(&self) -> &str {
        &self.identity.track_id
    }

    fn tag_vector(&self) -> &[f64] {
        &self.tag_vector
    }

    fn audio(&self) -> &AudioFeatures {
        &self.audio
    }
}
