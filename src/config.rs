//! Resolver configuration loaded from `~/.config/newscast/config.toml`.
//!
//! Every key is optional. The source table is compiled in and cannot be
//! changed here; this file only tunes how upstreams are contacted.
//!
//! ```toml
//! request_timeout_secs = 10
//! connect_timeout_secs = 5
//! resolve_timeout_secs = 45
//! user_agent = "newscast/0.1"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Tunables for the HTTP client and the overall resolution deadline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout_secs: u64,
    /// TCP/TLS connect timeout.
    pub connect_timeout_secs: u64,
    /// Upper bound for one whole `resolve` call, retries included.
    pub resolve_timeout_secs: u64,
    /// User-Agent for requests that do not need a browser profile.
    pub user_agent: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            connect_timeout_secs: 5,
            resolve_timeout_secs: 45,
            user_agent: concat!("newscast/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl NewsConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_secs)
    }

    /// Load from the default location.
    ///
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. Unlike [`NewsConfig::load`], a missing file
    /// is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }
}

/// Return the path to the config file.
fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newscast")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config: NewsConfig = toml::from_str("").unwrap();
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.resolve_timeout_secs, 45);
        assert!(config.user_agent.starts_with("newscast/"));
    }

    #[test]
    fn parse_partial_config_keeps_other_defaults() {
        let toml_str = r#"
request_timeout_secs = 3
user_agent = "radio-box/2.0"
"#;
        let config: NewsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.user_agent, "radio-box/2.0");
        assert_eq!(config.resolve_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "resolve_timeout_secs = 12\n").unwrap();

        let config = NewsConfig::load_from(&path).unwrap();
        assert_eq!(config.resolve_timeout(), Duration::from_secs(12));
    }

    #[test]
    fn load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NewsConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_secs = \"soon\"\n").unwrap();

        let err = NewsConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }
}
