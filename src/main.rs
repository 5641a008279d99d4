//! Main application entry point (binary).
//!
//! This is a thin wrapper around the `catalog_scraper` library that handles:
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! Each invocation performs exactly one fetch-extract-persist cycle for the
//! tablets listing and exits. Scheduling (e.g. cron) is external.

use anyhow::{Context, Result};
use log::LevelFilter;
use std::process;

use catalog_scraper::initialization::init_logger_with;
use catalog_scraper::storage::SaveOutcome;
use catalog_scraper::{run_scrape, LogFormat, TABLETS};

#[tokio::main]
async fn main() -> Result<()> {
    // Database credentials usually live in a .env file next to the binary
    // when run from cron; fall back to the working directory's .env.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    init_logger_with(LevelFilter::Info, LogFormat::from_env())
        .context("Failed to initialize logger")?;

    match run_scrape(TABLETS).await {
        Ok(report) => {
            let saved = match &report.save {
                SaveOutcome::Saved(rows) => format!("{rows} saved"),
                SaveOutcome::Skipped => "database skipped".to_string(),
                SaveOutcome::Failed(_) => "database write failed".to_string(),
            };
            println!(
                "Fetched {} {} product{} over {} page{} ({}) in {:.1}s",
                report.records_fetched,
                TABLETS.category,
                if report.records_fetched == 1 { "" } else { "s" },
                report.pages_fetched,
                if report.pages_fetched == 1 { "" } else { "s" },
                saved,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("catalog_scraper error: {:#}", e);
            process::exit(1);
        }
    }
}
