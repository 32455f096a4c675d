use crate::services::ranking::Alpha;
use anyhow::{anyhow, Result};
use feature_store::ingestion::{CATALOG_TAG_OFFSET, HISTORY_TAG_OFFSET};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Input tables
    pub catalog_path: String,
    pub history_path: String,
    pub catalog_tag_offset: usize,
    pub history_tag_offset: usize,

    // Ranking
    pub alpha: f64,
    pub top_k: usize,
    pub chunk_rows: usize,

    // Output
    pub history_display_limit: usize,
    pub output_format: OutputFormat,

    // Observability
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("catalog_path", "data/df_track_vec.csv")?
            .set_default("history_path", "data/df_user_a.csv")?
            .set_default("catalog_tag_offset", CATALOG_TAG_OFFSET as i64)?
            .set_default("history_tag_offset", HISTORY_TAG_OFFSET as i64)?
            .set_default("alpha", 0.5)?
            .set_default("top_k", 10)?
            .set_default("chunk_rows", 1024)?
            .set_default("history_display_limit", 10)?
            .set_default("output_format", "table")?
            .set_default("log_level", "info")?
            .set_default("log_json", false)?
            .add_source(config::Environment::default().separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog_path.is_empty() {
            return Err(anyhow!("Catalog path is required"));
        }

        if self.history_path.is_empty() {
            return Err(anyhow!("History path is required"));
        }

        Alpha::new(self.alpha)?;

        if self.top_k == 0 {
            return Err(anyhow!("top_k must be greater than 0"));
        }

        if self.chunk_rows == 0 {
            return Err(anyhow!("chunk_rows must be greater than 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            catalog_path: "data/df_track_vec.csv".to_string(),
            history_path: "data/df_user_a.csv".to_string(),
            catalog_tag_offset: 21,
            history_tag_offset: 23,
            alpha: 0.5,
            top_k: 10,
            chunk_rows: 1024,
            history_display_limit: 10,
            output_format: OutputFormat::Table,
            log_level: "info".to_string(),
            log_json: false,
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_alpha() {
        let mut config = base_config();
        config.alpha = 1.5;
        assert!(config.validate().is_err());

        config.alpha = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_sizes() {
        let mut config = base_config();
        config.top_k = 0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.chunk_rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_paths() {
        let mut config = base_config();
        config.catalog_path.clear();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.history_path.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_format_names() {
        let table: OutputFormat = serde_json::from_str("\"table\"").unwrap();
        let json: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(table, OutputFormat::Table);
        assert_eq!(json, OutputFormat::Json);
        assert!(serde_json::from_str::<OutputFormat>("\"csv\"").is_err());
    }
}
