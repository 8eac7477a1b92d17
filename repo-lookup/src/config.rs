//! Configuration loading for repo-lookup
//!
//! Configuration is loaded from:
//! 1. Environment variable REPO_LOOKUP_CONFIG_PATH
//! 2. <config dir>/repo-lookup/config.toml
//! 3. Default values
//!
//! `GITHUB_API_URL` overrides the file; CLI flags override both.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pipeline::OverlapPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API access
    #[serde(default)]
    pub github: GitHubConfig,
    /// Submission handling
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of the REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Submission handling configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    /// What to do with a response that arrives after a newer submission
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

// Default value functions
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    concat!("repo-lookup/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::load_from_path(&path)?
            }
            Some(path) => {
                tracing::debug!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => {
                tracing::debug!("No config path available, using defaults");
                Self::default()
            }
        };

        config
            .with_api_url(std::env::var("GITHUB_API_URL").ok())
            .validated()
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Replace the API URL when an override is present
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.github.api_url = url;
        }
        self
    }

    /// Check that the API URL is an absolute http(s) URL
    pub fn validated(self) -> Result<Self> {
        let parsed = url::Url::parse(&self.github.api_url)
            .with_context(|| format!("invalid GitHub API URL '{}'", self.github.api_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "GitHub API URL must use http or https, got '{}'",
                parsed.scheme()
            );
        }
        if self.github.timeout_seconds == 0 {
            bail!("timeout_seconds must be greater than zero");
        }
        Ok(self)
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("REPO_LOOKUP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Platform config directory
        dirs::config_dir().map(|dir| dir.join("repo-lookup").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.timeout_seconds, 30);
        assert!(config.github.user_agent.starts_with("repo-lookup/"));
        assert_eq!(config.lookup.overlap, OverlapPolicy::LatestSubmission);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[github]\napi_url = \"http://127.0.0.1:9000\"\n\n[lookup]\noverlap = \"last-response\""
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.github.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.github.timeout_seconds, 30);
        assert_eq!(config.lookup.overlap, OverlapPolicy::LastResponse);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[github\napi_url = ").unwrap();
        assert!(Config::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_api_url_override() {
        let config = Config::default().with_api_url(Some("http://localhost:1".into()));
        assert_eq!(config.github.api_url, "http://localhost:1");

        let config = Config::default().with_api_url(Some("  ".into()));
        assert_eq!(config.github.api_url, "https://api.github.com");

        let config = Config::default().with_api_url(None);
        assert_eq!(config.github.api_url, "https://api.github.com");
    }

    #[test]
    fn test_validation() {
        assert!(Config::default().validated().is_ok());
        assert!(Config::default()
            .with_api_url(Some("not a url".into()))
            .validated()
            .is_err());
        assert!(Config::default()
            .with_api_url(Some("ftp://example.com".into()))
            .validated()
            .is_err());

        let mut config = Config::default();
        config.github.timeout_seconds = 0;
        assert!(config.validated().is_err());
    }
}
