//! Application configuration
//!
//! Settings taken from the command line, as opposed to the plugin
//! configuration file described in [`crate::config`].

use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Path of the plugin configuration file
    pub config_path: PathBuf,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8, config_path: impl Into<PathBuf>) -> Self {
        Self {
            verbose,
            config_path: config_path.into(),
        }
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
