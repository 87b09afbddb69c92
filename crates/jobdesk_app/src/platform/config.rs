//! Front end configuration, read from `jobdesk.ron`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use jobdesk_engine::{SourceSettings, DEFAULT_BASE_URL};
use jobdesk_logging::{LogDestination, LogSettings};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "jobdesk.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub debounce_ms: u64,
    pub connect_timeout_ms: u64,
    /// Absent means fetches may hang indefinitely.
    pub request_timeout_ms: Option<u64>,
    pub max_response_bytes: u64,
    pub data_dir: PathBuf,
    pub log_destination: LogTarget,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        let source = SourceSettings::default();
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: jobdesk_core::DEBOUNCE_DELAY.as_millis() as u64,
            connect_timeout_ms: source.connect_timeout.as_millis() as u64,
            request_timeout_ms: None,
            max_response_bytes: source.max_bytes,
            data_dir: PathBuf::from("."),
            log_destination: LogTarget::File,
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    pub fn source_settings(&self) -> SourceSettings {
        SourceSettings {
            base_url: self.api_base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            max_bytes: self.max_response_bytes,
        }
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings::in_data_dir(
            self.log_destination.into(),
            self.log_level.into(),
            &self.data_dir,
        )
    }
}

/// A missing file yields the defaults; an unreadable or invalid one is an error.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };
    ron::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
}
