use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use review_scraper::application::{
    ReviewAggregator, ReviewScrapeUseCase, RunOptions, validate_request,
};
use review_scraper::infrastructure::{
    AppConfig, ConfigManager, HttpClient, JsonReviewStore, PageFetcher, init_logging_with_config,
    log_system_info,
};

/// Scrape product reviews from G2, Capterra and Software Advice
#[derive(Parser, Debug)]
#[command(name = "review-scraper", version)]
#[command(about = "Scrape product reviews for a company within a date range", long_about = None)]
struct Cli {
    /// Company or product name to search for
    #[arg(short, long, required_unless_present = "init_config")]
    company_name: Option<String>,

    /// Start of the date range (YYYY-MM-DD, inclusive)
    #[arg(short, long, required_unless_present = "init_config")]
    start_date: Option<String>,

    /// End of the date range (YYYY-MM-DD, inclusive)
    #[arg(short, long, required_unless_present = "init_config")]
    end_date: Option<String>,

    /// g2, capterra, software-advice or all
    #[arg(long, default_value = "all")]
    source: String,

    /// Output file (default: timestamped file in the output directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Use built-in sample reviews instead of scraping
    #[arg(short, long)]
    demo: bool,

    /// Configuration file (default: per-user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };

    if cli.init_config {
        manager.save_config(&AppConfig::default()).await?;
        println!("Default configuration written to {}", manager.config_path().display());
        return Ok(());
    }

    let mut config = manager.load_config()?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging_with_config(&config.logging).context("Failed to initialize logging")?;
    log_system_info();

    let now = Local::now().naive_local();
    let request = validate_request(
        cli.company_name.as_deref().unwrap_or_default(),
        cli.start_date.as_deref().unwrap_or_default(),
        cli.end_date.as_deref().unwrap_or_default(),
        &cli.source,
        now.date(),
    )
    .inspect_err(|e| error!("❌ Input validation error: {}", e))?;

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpClient::from_config(&config.http)?);
    let aggregator = ReviewAggregator::from_config(&config, fetcher)?;
    let use_case = ReviewScrapeUseCase::new(
        aggregator,
        JsonReviewStore::new(config.output.output_dir.clone()),
    );

    let options = RunOptions {
        output_path: cli.output,
        demo: cli.demo,
    };
    let outcome = use_case.run(&request, &options, now).await?;

    match outcome.output_path {
        Some(path) => info!("✅ Scraping completed: {} reviews saved to {:?}", outcome.total_reviews, path),
        None => info!("Scraping completed without results"),
    }
    Ok(())
}
