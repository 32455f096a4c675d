//! Tabular (CSV) loading for catalog and history files
//!
//! Both files carry a header row. Identity and audio-feature columns are looked
//! up by name; every column from `tag_offset` to the end of the row is a
//! tag-count column, in the same order in both files.

use crate::error::{FeatureStoreError, Result};
use crate::models::{
    AudioFeatures, CatalogItem, HistoryItem, TrackIdentity, AUDIO_FEATURE_DIM, AUDIO_FEATURE_NAMES,
};
use crate::services::{FeatureStore, HistoryProfile};
use csv::StringRecord;
use std::path::Path;
use tracing::{debug, info};

/// First tag-count column of the preprocessed catalog table
pub const CATALOG_TAG_OFFSET: usize = 21;
/// First tag-count column of the preprocessed history table
pub const HISTORY_TAG_OFFSET: usize = 23;

const PREVIEW_URL_COLUMNS: [&str; 2] = ["spotify_preview_url", "preview_url"];

/// Column layout of a feature table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvLayout {
    pub tag_offset: usize,
}

impl CsvLayout {
    pub fn new(tag_offset: usize) -> Self {
        Self { tag_offset }
    }

    pub fn catalog() -> Self {
        Self::new(CATALOG_TAG_OFFSET)
    }

    pub fn history() -> Self {
        Self::new(HISTORY_TAG_OFFSET)
    }
}

/// Load the full catalog table
pub fn load_catalog<P: AsRef<Path>>(path: P, layout: CsvLayout) -> Result<FeatureStore> {
    let table = FeatureTable::open(path.as_ref(), layout, false)?;
    let items = table
        .rows
        .into_iter()
        .map(|row| CatalogItem::new(row.identity, row.tag_vector, row.audio))
        .collect::<Vec<_>>();

    info!(
        path = %path.as_ref().display(),
        catalog_size = items.len(),
        tag_dim = table.vocabulary.len(),
        "Catalog table loaded"
    );

    Ok(FeatureStore::new(items)?.with_tag_vocabulary(table.vocabulary))
}

/// Load the consumer's listening-history table (requires a `playcount` column)
pub fn load_history<P: AsRef<Path>>(path: P, layout: CsvLayout) -> Result<HistoryProfile> {
    let table = FeatureTable::open(path.as_ref(), layout, true)?;
    let items = table
        .rows
        .into_iter()
        .map(|row| {
            HistoryItem::new(
                row.identity,
                row.tag_vector,
                row.audio,
                row.playcount.unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>();

    info!(
        path = %path.as_ref().display(),
        history_size = items.len(),
        tag_dim = table.vocabulary.len(),
        "History table loaded"
    );

    Ok(HistoryProfile::new(items)?.with_tag_vocabulary(table.vocabulary))
}

struct ParsedRow {
    identity: TrackIdentity,
    tag_vector: Vec<f64>,
    audio: AudioFeatures,
    playcount: Option<u64>,
}

struct FeatureTable {
    vocabulary: Vec<String>,
    rows: Vec<ParsedRow>,
}

/// Resolved column indices for one file
struct Columns {
    track_id: usize,
    name: usize,
    artist: usize,
    preview_url: usize,
    year: usize,
    tags: usize,
    audio: [usize; AUDIO_FEATURE_DIM],
    playcount: Option<usize>,
}

impl FeatureTable {
    fn open(path: &Path, layout: CsvLayout, with_playcount: bool) -> Result<Self> {
        let path_str = path.display().to_string();
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let columns = Columns::resolve(&headers, &path_str, with_playcount)?;

        if layout.tag_offset > headers.len() {
            return Err(FeatureStoreError::MissingColumn {
                column: format!("tag columns starting at index {}", layout.tag_offset),
                path: path_str,
            });
        }
        let vocabulary: Vec<String> = headers
            .iter()
            .skip(layout.tag_offset)
            .map(str::to_string)
            .collect();

        debug!(
            path = %path_str,
            tag_offset = layout.tag_offset,
            tag_columns = vocabulary.len(),
            "Resolved table layout"
        );

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let cells = RecordCells {
                record: &record,
                headers: &headers,
                path: &path_str,
                line,
            };
            rows.push(cells.parse_row(&columns, layout)?);
        }

        Ok(Self { vocabulary, rows })
    }
}

impl Columns {
    fn resolve(headers: &StringRecord, path: &str, with_playcount: bool) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| FeatureStoreError::MissingColumn {
                    column: name.to_string(),
                    path: path.to_string(),
                })
        };

        let preview_url = PREVIEW_URL_COLUMNS
            .iter()
            .find_map(|name| headers.iter().position(|h| h.trim() == *name))
            .ok_or_else(|| FeatureStoreError::MissingColumn {
                column: PREVIEW_URL_COLUMNS[0].to_string(),
                path: path.to_string(),
            })?;

        let mut audio = [0usize; AUDIO_FEATURE_DIM];
        for (slot, name) in audio.iter_mut().zip(AUDIO_FEATURE_NAMES.iter()) {
            *slot = find(name)?;
        }

        let playcount = if with_playcount {
            Some(find("playcount")?)
        } else {
            None
        };

        Ok(Self {
            track_id: find("track_id")?,
            name: find("name")?,
            artist: find("artist")?,
            preview_url,
            year: find("year")?,
            tags: find("tags")?,
            audio,
            playcount,
        })
    }
}

struct RecordCells<'a> {
    record: &'a StringRecord,
    headers: &'a StringRecord,
    path: &'a str,
    line: u64,
}

impl RecordCells<'_> {
    fn parse_row(&self, columns: &Columns, layout: CsvLayout) -> Result<ParsedRow> {
        let identity = TrackIdentity {
            track_id: self.text(columns.track_id).to_string(),
            name: self.text(columns.name).to_string(),
            artist: self.text(columns.artist).to_string(),
            preview_url: self.text(columns.preview_url).to_string(),
            year: self.year(columns.year)?,
            tags: self.text(columns.tags).to_string(),
        };

        let mut audio_values = [0.0; AUDIO_FEATURE_DIM];
        for (value, &idx) in audio_values.iter_mut().zip(columns.audio.iter()) {
            *value = self.number(idx)?;
        }
        let audio = AudioFeatures::from_slice(&identity.track_id, &audio_values)?;

        let tag_vector = (layout.tag_offset..self.record.len())
            .map(|idx| self.number(idx))
            .collect::<Result<Vec<f64>>>()?;

        let playcount = columns
            .playcount
            .map(|idx| self.playcount(idx))
            .transpose()?;

        Ok(ParsedRow {
            identity,
            tag_vector,
            audio,
            playcount,
        })
    }

    fn text(&self, idx: usize) -> &str {
        self.record.get(idx).map(str::trim).unwrap_or_default()
    }

    fn error(&self, idx: usize, message: String) -> FeatureStoreError {
        FeatureStoreError::Parse {
            path: self.path.to_string(),
            line: self.line,
            column: self.headers.get(idx).unwrap_or("?").to_string(),
            message,
        }
    }

    fn number(&self, idx: usize) -> Result<f64> {
        let raw = self.text(idx);
        raw.parse::<f64>()
            .map_err(|e| self.error(idx, format!("invalid number '{}': {}", raw, e)))
    }

    /// Whole numbers written either as integers or as floats ("2005.0")
    fn whole_number(&self, idx: usize) -> Result<Option<f64>> {
        let raw = self.text(idx);
        if raw.is_empty() {
            return Ok(None);
        }
        let value = self.number(idx)?;
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(self.error(idx, format!("expected a whole number, got '{}'", raw)));
        }
        Ok(Some(value))
    }

    fn year(&self, idx: usize) -> Result<Option<i32>> {
        Ok(self.whole_number(idx)?.map(|v| v as i32))
    }

    fn playcount(&self, idx: usize) -> Result<u64> {
        match self.whole_number(idx)? {
            Some(v) if v >= 0.0 => Ok(v as u64),
            Some(v) => Err(self.error(idx, format!("playcount must be non-negative, got {}", v))),
            None => Err(self.error(idx, "playcount is required".to_string())),
        }
    }
}
