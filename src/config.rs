//! User configuration loaded from a TOML file.
//!
//! Looked up at `$XDG_CONFIG_HOME/zcalc/config.toml` unless a path is given.
//!
//! ```toml
//! [display]
//! max_digits = 12
//!
//! [history]
//! size = 10
//!
//! [clipboard]
//! copy_results = false
//! ```

use crate::calculator::{Limits, MAX_DIGITS, MAX_DISPLAY_WIDTH, MAX_HISTORY_SIZE};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub history: HistoryConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Maximum entry length and display width.
    pub max_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_digits: MAX_DIGITS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    /// Completed calculations to keep.
    pub size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            size: MAX_HISTORY_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardConfig {
    /// Copy the display to the clipboard after every `=`.
    pub copy_results: bool,
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default path is optional and falls
    /// back to built-in defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.display.max_digits == 0 {
            anyhow::bail!("display.max_digits must be at least 1");
        }
        if self.display.max_digits > MAX_DISPLAY_WIDTH {
            anyhow::bail!("display.max_digits must be at most {}", MAX_DISPLAY_WIDTH);
        }
        if self.history.size == 0 {
            anyhow::bail!("history.size must be at least 1");
        }
        Ok(())
    }

    /// Engine limits described by this configuration.
    pub fn limits(&self) -> Limits {
        Limits {
            max_digits: self.display.max_digits,
            history_size: self.history.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.limits(), Limits::default());
        assert!(!config.clipboard.copy_results);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("[history]\nsize = 25\n").unwrap();
        assert_eq!(config.history.size, 25);
        assert_eq!(config.display.max_digits, MAX_DIGITS);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            [display]
            max_digits = 16

            [history]
            size = 5

            [clipboard]
            copy_results = true
            "#,
        )
        .unwrap();

        assert_eq!(
            config.limits(),
            Limits {
                max_digits: 16,
                history_size: 5,
            }
        );
        assert!(config.clipboard.copy_results);
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(Config::parse("[display]\nmax_digits = 0\n").is_err());
        assert!(Config::parse("[history]\nsize = 0\n").is_err());
    }

    #[test]
    fn test_oversized_width_rejected() {
        assert!(Config::parse("[display]\nmax_digits = 64\n").is_ok());
        assert!(Config::parse("[display]\nmax_digits = 65\n").is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::parse("[display]\ntheme = \"dark\"\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join("zcalc-missing-config-test.toml");
        assert!(Config::load(Some(path.as_path())).is_err());
    }
}
