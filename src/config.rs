use crate::error::Error;
use crate::retention::RetentionWindow;
use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_LOG_WINDOW: usize = 30;
pub const DEFAULT_SIZE_THRESHOLD_KIB: u64 = 50;
pub const ENV_PREFIX: &str = "DIR_MAINTAINER";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Retention window for the log, csv, small txt and large txt buckets.
    pub log_window: RetentionWindow,
    /// KiB threshold above which a txt file counts as large.
    pub size_threshold: u64,
    /// Append a CSV record of every action to this file.
    #[serde(default)]
    pub action_log: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_window: RetentionWindow(DEFAULT_LOG_WINDOW),
            size_threshold: DEFAULT_SIZE_THRESHOLD_KIB,
            action_log: None,
        }
    }
}

/// Built-in defaults, then `Config.toml` (optional), then `DIR_MAINTAINER_*`
/// environment variables.
pub fn load_configuration() -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .set_default("log_window", DEFAULT_LOG_WINDOW as i64)?
        .set_default("size_threshold", DEFAULT_SIZE_THRESHOLD_KIB as i64)?
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}
