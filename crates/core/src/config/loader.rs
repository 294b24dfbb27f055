use std::fs;
use std::path::{Path, PathBuf};

use shellexpand::full;
use thiserror::Error;

use crate::config::types::{ConfigFile, LoggingConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("failed to expand path '{0}': {1}")]
    PathExpansion(String, String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and validate a config file.
    ///
    /// `~` and environment variables in `logging.file` are expanded.
    pub fn load(path: &Path) -> Result<ConfigFile, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let mut cf = Self::parse(&s, &path.display().to_string())?;
        cf.logging = Self::resolve_logging(&cf.logging)?;
        Ok(cf)
    }

    /// Parse config from a TOML string without touching the filesystem.
    pub fn from_toml_str(s: &str) -> Result<ConfigFile, ConfigError> {
        Self::parse(s, "<string>")
    }

    fn parse(s: &str, origin: &str) -> Result<ConfigFile, ConfigError> {
        let cf: ConfigFile = toml::from_str(s)
            .map_err(|e| ConfigError::ParseError(origin.to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        Ok(cf)
    }

    fn resolve_logging(log_cfg: &LoggingConfig) -> Result<LoggingConfig, ConfigError> {
        let file = match log_cfg.file {
            Some(ref file) => Some(expand_path(&file.to_string_lossy())?),
            None => None,
        };
        Ok(LoggingConfig { file, ..log_cfg.clone() })
    }
}

fn expand_path(s: &str) -> Result<PathBuf, ConfigError> {
    let expanded =
        full(s).map_err(|e| ConfigError::PathExpansion(s.to_string(), e.to_string()))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timemacro::WeekOfYearFormat;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let cf = ConfigLoader::from_toml_str("version = 1\n").unwrap();
        assert_eq!(cf.macros.week_of_year, WeekOfYearFormat::Weekday);
        assert!(!cf.macros.upper_hour);
        assert_eq!(cf.logging, LoggingConfig::default());
    }

    #[test]
    fn test_expand_path_env_var() {
        // SAFETY: test-only, no other thread reads this variable.
        unsafe { std::env::set_var("TIMEMACRO_TEST_DIR", "/var/log/tm") };
        let p = expand_path("$TIMEMACRO_TEST_DIR/out.log").unwrap();
        assert_eq!(p, PathBuf::from("/var/log/tm/out.log"));
    }

    #[test]
    fn test_expand_path_unknown_var_fails() {
        let err = expand_path("$TIMEMACRO_SURELY_UNSET_VAR/x").unwrap_err();
        assert!(matches!(err, ConfigError::PathExpansion(..)));
    }
}
