//! Logging setup.
//!
//! Everything logs through the `log` facade. [`init`] routes records to an
//! in-memory [`LogBuffer`] (shown by the logs panel) and, when enabled in the
//! config, to a log file.

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;

/// Most recent entries kept in memory
const BUFFER_CAPACITY: usize = 500;

/// Shared in-memory log buffer
#[derive(Clone, Default)]
pub struct LogBuffer {
    logs: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a log entry, dropping the oldest once full
    pub fn push(&self, message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

/// Path of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dir.join("rewardsdesk").join("rewardsdesk.log"))
}

/// Build the dispatcher for `config` without installing it
pub fn build_dispatch(config: &LoggingConfig, buffer: LogBuffer) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())));

    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger
pub fn init(config: &LoggingConfig, buffer: LogBuffer) -> Result<()> {
    build_dispatch(config, buffer)?
        .apply()
        .context("Failed to install logger")?;
    log::info!("Logging initialised at level {}", config.level);
    Ok(())
}
