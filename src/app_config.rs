use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
///
/// Fixed subpath under the home directory where Apple Podcasts caches
/// TTML assets, used as the batch root when none is configured
pub const DEFAULT_TTML_SUBPATH: &str =
    "Library/Group Containers/243LU875E5.groups.com.apple.podcasts/Library/Cache/Assets/TTML";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Root directory scanned in batch mode; when absent the Apple
    /// Podcasts TTML cache under the home directory is used
    #[serde(default)]
    pub batch_root: Option<PathBuf>,

    /// Directory batch-mode transcripts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./transcripts")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            batch_root: None,
            output_dir: default_output_dir(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Resolve the batch root directory, falling back to the platform
    /// default under the current user's home directory
    pub fn resolve_batch_root(&self) -> Result<PathBuf> {
        match &self.batch_root {
            Some(root) => Ok(root.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(DEFAULT_TTML_SUBPATH))
                .ok_or_else(|| anyhow!("Could not determine the home directory")),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }

        if let Some(root) = &self.batch_root {
            if root.as_os_str().is_empty() {
                return Err(anyhow!("Batch root must not be empty when set"));
            }
        }

        Ok(())
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
