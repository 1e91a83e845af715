//! Configuration management for poldeck.
//!
//! Loads configuration from ${POLDECK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for poldeck configuration and data directories.
    //!
    //! POLDECK_HOME resolution order:
    //! 1. POLDECK_HOME environment variable (if set)
    //! 2. ~/.config/poldeck (default)

    use std::path::PathBuf;

    /// Returns the poldeck home directory.
    ///
    /// Checks POLDECK_HOME env var first, falls back to ~/.config/poldeck
    pub fn poldeck_home() -> PathBuf {
        if let Ok(home) = std::env::var("POLDECK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("poldeck"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        poldeck_home().join("config.toml")
    }

    /// Returns the path to the session file.
    pub fn session_path() -> PathBuf {
        poldeck_home().join("session.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        poldeck_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the policy backend API.
    pub api_url: String,

    /// Log filter directive (tracing EnvFilter syntax).
    pub log_filter: String,
}

impl Config {
    const DEFAULT_API_URL: &'static str = "http://localhost:8080";
    const DEFAULT_LOG_FILTER: &'static str = "poldeck=info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to move config into place at {}",
                path.display()
            )
        })?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// The commented template written by `poldeck config init`.
fn default_config_template() -> &'static str {
    r#"# poldeck configuration

# Base URL of the policy backend API.
api_url = "http://localhost:8080"

# Log filter (tracing EnvFilter syntax). Logs go to ${POLDECK_HOME}/logs/.
# log_filter = "poldeck=debug"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.log_filter, "poldeck=info");
    }

    #[test]
    fn loads_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = \"https://insurance.example.com\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_url, "https://insurance.example.com");
        assert_eq!(config.log_filter, "poldeck=info");
    }

    #[test]
    fn rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn init_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("api_url ="));

        // Template must round-trip through the loader.
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080");

        assert!(Config::init(&path).is_err());
    }
}
