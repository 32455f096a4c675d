// Integration tests for catalog / history loading

use feature_store::{load_catalog, load_history, CsvLayout, FeatureStoreError};
use std::fs;
use tempfile::TempDir;

const CATALOG_HEADER: &str = "track_id,name,artist,spotify_preview_url,year,tags,\
danceability,energy,speechiness,instrumentalness,liveness,valence,tempo_scaled,\
indie,electronic,folk";

const HISTORY_HEADER: &str = "track_id,name,artist,spotify_preview_url,year,tags,\
danceability,energy,speechiness,instrumentalness,liveness,valence,tempo_scaled,\
playcount,user_id,indie,electronic,folk";

fn write(dir: &TempDir, name: &str, header: &str, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_catalog_and_history_with_matching_vocabulary() {
    let dir = TempDir::new().unwrap();
    let catalog_path = write(
        &dir,
        "catalog.csv",
        CATALOG_HEADER,
        &[
            "c1,Night Drive,Chromatics,http://c1,2012,\"indie, electronic\",0.6,0.5,0.04,0.7,0.1,0.3,0.45,1,1,0",
            "c2,River,Joni Mitchell,http://c2,1971.0,folk,0.3,0.2,0.03,0.0,0.1,0.2,0.30,0,0,1",
        ],
    );
    let history_path = write(
        &dir,
        "history.csv",
        HISTORY_HEADER,
        &[
            "h1,Heroes,David Bowie,http://h1,1977,indie,0.5,0.7,0.05,0.1,0.2,0.4,0.55,4,u1,1,0,0",
            "h2,Hyperballad,Bjork,http://h2,1995,electronic,0.6,0.6,0.04,0.2,0.1,0.3,0.50,12,u1,0,1,0",
        ],
    );

    let catalog = load_catalog(&catalog_path, CsvLayout::new(13)).unwrap();
    let history = load_history(&history_path, CsvLayout::new(15)).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(history.len(), 2);
    assert_eq!(catalog.tag_dim(), history.tag_dim());
    assert_eq!(catalog.tag_vocabulary(), history.tag_vocabulary());

    assert_eq!(catalog.items()[0].identity.tags, "indie, electronic");
    assert_eq!(catalog.items()[1].identity.year, Some(1971));

    let most_played = history.by_playcount();
    assert_eq!(most_played[0].identity.name, "Hyperballad");
    assert_eq!(most_played[0].playcount, 12);
}

#[test]
fn test_missing_audio_column() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "catalog.csv",
        "track_id,name,artist,spotify_preview_url,year,tags,danceability,energy,indie",
        &["c1,A,B,http://c1,2012,indie,0.6,0.5,1"],
    );

    let err = load_catalog(&path, CsvLayout::new(8)).unwrap_err();
    assert!(matches!(
        err,
        FeatureStoreError::MissingColumn { ref column, .. } if column == "speechiness"
    ));
}

#[test]
fn test_negative_playcount_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "history.csv",
        HISTORY_HEADER,
        &["h1,Heroes,David Bowie,http://h1,1977,indie,0.5,0.7,0.05,0.1,0.2,0.4,0.55,-3,u1,1,0,0"],
    );

    let err = load_history(&path, CsvLayout::new(15)).unwrap_err();
    assert!(matches!(err, FeatureStoreError::Parse { ref column, .. } if column == "playcount"));
}

#[test]
fn test_missing_file() {
    let err = load_catalog("/nonexistent/catalog.csv", CsvLayout::catalog()).unwrap_err();
    assert!(matches!(err, FeatureStoreError::Csv(_)));
}
