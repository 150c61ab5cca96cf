use clap::Parser;
use dir_maintainer::retention::RetentionWindow;
use dir_maintainer::AppConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "dir-maintainer")]
#[command(about = "Clean up a messy data directory", long_about = None)]
pub struct Cli {
    /// The directory to clean
    pub directory: PathBuf,

    /// Retention policy: how many most recent files to keep per category,
    /// 0 keeps every file [default: 30]
    #[arg(long, value_name = "N")]
    pub log_window: Option<usize>,

    /// File size threshold in KiB: how large is a large text file [default: 50]
    #[arg(long, value_name = "M")]
    pub size_threshold: Option<u64>,

    /// Append a CSV record of every action to FILE
    #[arg(long, value_name = "FILE")]
    pub action_log: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over file and environment configuration.
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(window) = self.log_window {
            config.log_window = RetentionWindow(window);
        }
        if let Some(threshold) = self.size_threshold {
            config.size_threshold = threshold;
        }
        if let Some(path) = &self.action_log {
            config.action_log = Some(path.clone());
        }
        config
    }
}
