use std::path::PathBuf;

use serde::Deserialize;

use crate::timemacro::ExpanderConfig;

/// Top-level TOML configuration.
///
/// ```toml
/// version = 1
///
/// [macros]
/// week_of_year = "iso_week"
/// upper_hour = true
///
/// [logging]
/// level = "debug"
/// file = "~/.local/state/timemacro.log"
/// ```
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub macros: ExpanderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
