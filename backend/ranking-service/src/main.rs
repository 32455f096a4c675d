use anyhow::{bail, Context, Result};
use feature_store::{load_catalog, load_history, CsvLayout};
use ranking_service::{
    config::OutputFormat, report::PlaylistReport, Config, Recommender, RecommenderOptions,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Load config
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing (stderr, so JSON output on stdout stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    config
        .validate()
        .context("Configuration validation failed")?;
    info!(
        catalog_path = %config.catalog_path,
        history_path = %config.history_path,
        alpha = config.alpha,
        "Configuration loaded and validated"
    );

    let catalog = load_catalog(&config.catalog_path, CsvLayout::new(config.catalog_tag_offset))
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_path))?;
    let history = load_history(&config.history_path, CsvLayout::new(config.history_tag_offset))
        .with_context(|| format!("Failed to load history from {}", config.history_path))?;

    if catalog.tag_vocabulary() != history.tag_vocabulary() {
        bail!(
            "Tag columns of {} and {} differ; both tables must share one tag vocabulary",
            config.catalog_path,
            config.history_path
        );
    }

    let recommender = Recommender::new(RecommenderOptions {
        top_k: config.top_k,
        chunk_rows: config.chunk_rows,
    })?;
    let records = recommender
        .recommend(&catalog, &history, config.alpha)
        .context("Failed to build recommendations")?;

    let report = PlaylistReport::new(
        config.alpha,
        &records,
        history.by_playcount(),
        config.history_display_limit,
    );

    match config.output_format {
        OutputFormat::Table => print!("{}", report.render_table()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(())
}
