use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
///
/// Entries are always kept in memory for the logs dialog. When file logging is
/// enabled, the same records are also appended to `itask.log` in the data directory.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
    forward_to_log: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
            forward_to_log: false,
        }
    }

    /// Create a logger and install it as the global `log` backend
    ///
    /// Records emitted with `log::info!`/`log::warn!` anywhere in the crate end up in
    /// the in-memory buffer, and in the log file when `file_logging` is set.
    pub fn from_config(file_logging: bool) -> Result<Self> {
        let mut logger = Self::new();

        let logs = Arc::clone(&logger.logs);
        let memory = fern::Dispatch::new()
            .format(|out, message, _record| {
                out.finish(format_args!("[{}] {}", Local::now().format("%H:%M:%S%.3f"), message));
            })
            .chain(fern::Output::call(move |record| {
                if let Ok(mut logs) = logs.lock() {
                    logs.push(record.args().to_string());
                }
            }));

        let mut dispatch = fern::Dispatch::new()
            .level(log::LevelFilter::Info)
            .level_for("sqlx", log::LevelFilter::Warn)
            .level_for("sea_orm", log::LevelFilter::Warn)
            .chain(memory);

        if file_logging {
            let path = Self::default_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} {:<5} [{}] {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ));
                    })
                    .chain(file),
            );
            logger.log_file = Some(path);
        }

        // A global logger can only be installed once per process
        if dispatch.apply().is_ok() {
            logger.forward_to_log = true;
        }

        Ok(logger)
    }

    /// Whether records are also written to a log file
    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    /// Path of the log file, when file logging is enabled
    pub fn get_log_file_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        if self.forward_to_log {
            log::info!("{}", message);
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    fn default_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
