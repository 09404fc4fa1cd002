//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Environment variables
//!
//! Command-line arguments are applied on top by the handlers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taproom_core::http::SiteConfig;
use tracing::{debug, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The review site the CLI talks to
    pub site: SiteSettings,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Review site settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSettings {
    /// Site root used for the like endpoint and relative share URLs
    pub base_url: String,

    /// Name of the cookie holding the CSRF token
    pub csrf_cookie_name: String,

    /// Browser cookie string sent with requests
    pub cookie: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Use colored output by default
    pub color: bool,

    /// Show progress indicators
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        let site = SiteConfig::default();
        Self {
            base_url: site.base_url,
            csrf_cookie_name: site.csrf_cookie_name,
            cookie: None,
            timeout_secs: site.timeout_secs,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
            progress: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            file: None,
        }
    }
}

/// Serialization format of a config file, from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Yaml,
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("toml") => FileFormat::Toml,
            _ => FileFormat::Json,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match FileFormat::from_path(path) {
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content).map_err(|e| {
                Error::config(format!("Invalid TOML in {}: {}", path.display(), e))
            })?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };

        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Failed to load config");
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations, then apply environment overrides
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = file {
            Self::from_file(path)?
        } else {
            Self::load()?
        };
        config.merge_with_env();
        Ok(config)
    }

    /// Apply `TAPROOM_*` environment overrides
    pub fn merge_with_env(&mut self) {
        if let Ok(base_url) = std::env::var("TAPROOM_BASE_URL") {
            self.site.base_url = base_url;
        }
        if let Ok(cookie) = std::env::var("TAPROOM_COOKIE") {
            self.site.cookie = Some(cookie);
        }
        if let Ok(format) = std::env::var("TAPROOM_OUTPUT_FORMAT") {
            self.output.format = format;
        }
    }

    /// Project config written by `config init`
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".taproom.yaml")
    }

    /// User config written by `config init --user`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taproom").join("config.yaml"))
    }

    /// Configuration file paths to check, in priority order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".taproom.yaml"),
            PathBuf::from(".taproom.json"),
            PathBuf::from(".taproom.toml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let taproom_dir = config_dir.join("taproom");
            paths.push(taproom_dir.join("config.yaml"));
            paths.push(taproom_dir.join("config.json"));
            paths.push(taproom_dir.join("config.toml"));
        }

        paths
    }

    /// Site settings for the core HTTP client
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig {
            base_url: self.site.base_url.clone(),
            timeout_secs: self.site.timeout_secs,
            csrf_cookie_name: self.site.csrf_cookie_name.clone(),
        }
    }

    /// Look up a value by dotted key
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "site.base_url" => Ok(self.site.base_url.clone()),
            "site.csrf_cookie_name" => Ok(self.site.csrf_cookie_name.clone()),
            "site.cookie" => Ok(self.site.cookie.clone().unwrap_or_default()),
            "site.timeout_secs" => Ok(self.site.timeout_secs.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            "output.color" => Ok(self.output.color.to_string()),
            "output.progress" => Ok(self.output.progress.to_string()),
            "logging.level" => Ok(self.logging.level.clone()),
            "logging.format" => Ok(self.logging.format.clone()),
            "logging.file" => Ok(self
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            _ => Err(Error::config(format!("Unknown configuration key: {}", key))),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileFormat::from_path(path) {
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "site:\n  base_url: https://taproom.beer\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.site.base_url, "https://taproom.beer");
        assert_eq!(config.site.csrf_cookie_name, "csrftoken");
        assert_eq!(config.site.timeout_secs, 30);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_round_trip_each_format() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.site.cookie = Some("csrftoken=abc".to_string());
        config.logging.file = Some(PathBuf::from("/tmp/taproom.log"));

        for name in ["c.yaml", "c.json", "c.toml"] {
            let path = dir.path().join("nested").join(name);
            config.save(&path).unwrap();
            assert_eq!(Config::from_file(&path).unwrap(), config, "format of {}", name);
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_get_value() {
        let config = Config::default();
        assert_eq!(config.get_value("site.csrf_cookie_name").unwrap(), "csrftoken");
        assert_eq!(config.get_value("site.cookie").unwrap(), "");
        assert!(config.get_value("site.password").is_err());
    }

    #[test]
    fn test_site_config() {
        let mut config = Config::default();
        config.site.base_url = "https://taproom.beer".to_string();
        config.site.timeout_secs = 5;
        let site = config.site_config();
        assert_eq!(site.base_url, "https://taproom.beer");
        assert_eq!(site.timeout_secs, 5);
    }
}
