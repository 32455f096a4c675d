// Text / JSON rendering of a playlist and the listener's most played tracks

use crate::models::RecommendationRecord;
use feature_store::HistoryItem;
use serde::Serialize;
use std::fmt::Write;

const NAME_WIDTH: usize = 32;
const ARTIST_WIDTH: usize = 24;
const TAGS_WIDTH: usize = 36;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow<'a> {
    pub playcount: u64,
    pub name: &'a str,
    pub artist: &'a str,
    pub year: Option<i32>,
    pub tags: &'a str,
}

impl<'a> From<&'a HistoryItem> for HistoryRow<'a> {
    fn from(item: &'a HistoryItem) -> Self {
        Self {
            playcount: item.playcount,
            name: &item.identity.name,
            artist: &item.identity.artist,
            year: item.identity.year,
            tags: &item.identity.tags,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistReport<'a> {
    pub alpha: f64,
    pub recommendations: &'a [RecommendationRecord],
    pub history: Vec<HistoryRow<'a>>,
}

impl<'a> PlaylistReport<'a> {
    /// `history` is expected most-played first; only `history_limit` rows are kept
    pub fn new(
        alpha: f64,
        recommendations: &'a [RecommendationRecord],
        history: Vec<&'a HistoryItem>,
        history_limit: usize,
    ) -> Self {
        Self {
            alpha,
            recommendations,
            history: history
                .into_iter()
                .take(history_limit)
                .map(HistoryRow::from)
                .collect(),
        }
    }

    pub fn render_table(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Adventure playlist (novelty = {})", self.alpha);
        let _ = writeln!(
            out,
            "{:>2}  {:<NAME_WIDTH$}  {:<ARTIST_WIDTH$}  {:>4}  {:<TAGS_WIDTH$}  {:>9}  {:>7}  {:>8}",
            "#", "name", "artist", "year", "tags", "relevance", "novelty", "nr_score"
        );
        for (rank, record) in self.recommendations.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>2}  {:<NAME_WIDTH$}  {:<ARTIST_WIDTH$}  {:>4}  {:<TAGS_WIDTH$}  {:>9.4}  {:>7.4}  {:>8.4}",
                rank + 1,
                clip(&record.identity.name, NAME_WIDTH),
                clip(&record.identity.artist, ARTIST_WIDTH),
                year_cell(record.identity.year),
                clip(&record.identity.tags, TAGS_WIDTH),
                record.relevance,
                record.novelty,
                record.nr_score,
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Your listening history");
        let _ = writeln!(
            out,
            "{:>9}  {:<NAME_WIDTH$}  {:<ARTIST_WIDTH$}  {:>4}  {:<TAGS_WIDTH$}",
            "playcount", "name", "artist", "year", "tags"
        );
        for row in &self.history {
            let _ = writeln!(
                out,
                "{:>9}  {:<NAME_WIDTH$}  {:<ARTIST_WIDTH$}  {:>4}  {:<TAGS_WIDTH$}",
                row.playcount,
                clip(row.name, NAME_WIDTH),
                clip(row.artist, ARTIST_WIDTH),
                year_cell(row.year),
                clip(row.tags, TAGS_WIDTH),
            );
        }

        out
    }
}

fn year_cell(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Cut to `width` characters, marking the cut with '~'
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('~');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use feature_store::{AudioFeatures, TrackIdentity};

    fn record(id: &str, name: &str, nr_score: f64) -> RecommendationRecord {
        let mut identity = TrackIdentity::new(id);
        identity.name = name.to_string();
        identity.artist = "Artist".to_string();
        identity.year = Some(2001);
        RecommendationRecord {
            identity,
            relevance: nr_score,
            novelty: nr_score,
            nr_score,
        }
    }

    fn played(name: &str, playcount: u64) -> HistoryItem {
        let mut identity = TrackIdentity::new(name);
        identity.name = name.to_string();
        HistoryItem::new(identity, vec![1.0], AudioFeatures::default(), playcount)
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("abcdefghij", 5), "abcd~");
        assert_eq!(clip("ééééé", 5), "ééééé");
    }

    #[test]
    fn test_render_table() {
        let records = vec![record("a", "First Song", 0.9), record("b", "Second Song", 0.4)];
        let history = vec![played("Old Favourite", 42)];
        let report = PlaylistReport::new(0.5, &records, history.iter().collect(), 10);

        let table = report.render_table();
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].contains("novelty = 0.5"));
        assert!(lines[2].starts_with(" 1  First Song"));
        assert!(lines[2].contains("0.9000"));
        assert!(lines[3].starts_with(" 2  Second Song"));
        assert!(table.contains("Old Favourite"));
        assert!(table.contains("       42"));
    }

    #[test]
    fn test_history_limit_and_json() {
        let records = vec![record("a", "First Song", 0.9)];
        let history = vec![played("x", 3), played("y", 2), played("z", 1)];
        let report = PlaylistReport::new(0.2, &records, history.iter().collect(), 2);

        assert_eq!(report.history.len(), 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["alpha"], 0.2);
        assert_eq!(json["recommendations"][0]["track_id"], "a");
        assert_eq!(json["history"][1]["name"], "y");
    }
}
