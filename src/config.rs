//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
///
/// Precedence, lowest to highest: built-in defaults, TOML config file,
/// environment variables, CLI flags (applied in `main`). Immutable once the
/// pipeline starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page to scrape
    #[serde(default = "default_url")]
    pub url: String,

    /// CSV output file
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Maximum number of items to keep (0 = unlimited)
    #[serde(default)]
    pub limit: usize,

    /// Polite pause after the run, in seconds
    #[serde(default = "default_delay_secs")]
    pub delay_secs: f64,

    /// Custom User-Agent header (None = built-in desktop browser string)
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra attempts after a transient failure
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Initial retry backoff in seconds, doubled per attempt
    #[serde(default = "default_backoff_secs")]
    pub backoff_secs: f64,

    /// Per-attempt request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "https://webscraper.io/test-sites/e-commerce/allinone".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("products.csv")
}

fn default_delay_secs() -> f64 {
    0.5
}

fn default_retries() -> u32 {
    3
}

fn default_backoff_secs() -> f64 {
    0.3
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            output: default_output(),
            limit: 0,
            delay_secs: default_delay_secs(),
            user_agent: None,
            retries: default_retries(),
            backoff_secs: default_backoff_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("shopscrape.toml");
        if local_config.exists() {
            debug!("Found shopscrape.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("shopscrape").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var("SHOPSCRAPE_URL") {
            self.url = url;
        }

        if let Ok(ua) = std::env::var("SHOPSCRAPE_USER_AGENT") {
            self.user_agent = Some(ua);
        }

        if let Ok(delay) = std::env::var("SHOPSCRAPE_DELAY") {
            if let Ok(d) = delay.parse() {
                self.delay_secs = d;
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.url, "https://webscraper.io/test-sites/e-commerce/allinone");
        assert_eq!(config.output, PathBuf::from("products.csv"));
        assert_eq!(config.limit, 0);
        assert_eq!(config.delay_secs, 0.5);
        assert_eq!(config.user_agent, None);
        assert_eq!(config.retries, 3);
        assert_eq!(config.backoff_secs, 0.3);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url = \"http://localhost:8080/shop\"\nlimit = 5").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.url, "http://localhost:8080/shop");
        assert_eq!(config.limit, 5);
        // Unspecified keys fall back to defaults
        assert_eq!(config.retries, 3);
        assert_eq!(config.output, PathBuf::from("products.csv"));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(Config::from_file("/nonexistent/shopscrape.toml").is_err());
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url = [not toml").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }
}
