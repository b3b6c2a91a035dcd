use anyhow::{Context, Result};
use clap::Parser;
use itask::config::Config;
use itask::logger::Logger;
use itask::storage::{KeyValueStore, LocalStorage, MemoryStorage};
use itask::tasks::TaskStore;
use itask::ui;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,

    /// Keep tasks in memory only, nothing is saved
    #[arg(long)]
    ephemeral: bool,

    /// Read configuration from this file instead of the usual locations
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    let logger = Logger::from_config(config.logging.enabled)?;
    if let Some(path) = logger.get_log_file_path() {
        log::info!("Logging to {}", path.display());
    }

    let storage: Arc<dyn KeyValueStore> = if cli.ephemeral {
        logger.log("Storage: Running with in-memory storage".to_string());
        Arc::new(MemoryStorage::new())
    } else {
        let path = config.database_path()?;
        let storage = LocalStorage::open(&path)
            .await
            .with_context(|| format!("Failed to open task database: {}", path.display()))?;
        logger.log(format!("Storage: Opened {}", path.display()));
        Arc::new(storage)
    };

    let store = TaskStore::hydrate(storage, config.storage.storage_key.clone()).await;

    // Run the TUI application
    ui::run_app(store, &config, logger).await?;

    Ok(())
}
