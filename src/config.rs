use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::filter::GameFilter;

/// Path of the GraphQL endpoint, relative to the server URL
const GRAPHQL_PATH: &str = "graphql";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

/// Collection server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the server, the GraphQL path is appended
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

fn default_url() -> String {
    "http://localhost:8000".to_string()
}

impl ServerConfig {
    /// Full URL of the GraphQL endpoint
    pub fn endpoint(&self) -> Result<Url> {
        let mut base = Url::parse(&self.url)
            .with_context(|| format!("Invalid server URL: {}", self.url))?;
        // Without a trailing slash `join` would replace the last segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(GRAPHQL_PATH)?)
    }
}

/// Initial paging and filter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Show complete games
    #[serde(default = "default_true")]
    pub complete: bool,
    /// Show incomplete games
    #[serde(default = "default_true")]
    pub incomplete: bool,
    /// Show ignored games
    #[serde(default)]
    pub ignored: bool,
    /// Show only one-region games
    #[serde(default)]
    pub one_region: bool,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            complete: true,
            incomplete: true,
            ignored: false,
            one_region: false,
        }
    }
}

fn default_page_size() -> usize {
    crate::state::DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

impl BrowseConfig {
    /// Filter settings with an empty name filter
    pub fn game_filter(&self) -> GameFilter {
        GameFilter {
            complete: self.complete,
            incomplete: self.incomplete,
            ignored: self.ignored,
            one_region: self.one_region,
            name: String::new(),
        }
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "rombrowser", "rombrowser")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {:?}", path))?;
            tracing::debug!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::debug!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.server.url, "http://localhost:8000");
        assert_eq!(config.browse.page_size, 100);
        assert!(config.browse.complete);
        assert!(!config.browse.ignored);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[browse]\npage_size = 20\none_region = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.browse.page_size, 20);
        assert!(config.browse.one_region);
        assert!(config.browse.incomplete);
        assert_eq!(config.server.url, "http://localhost:8000");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.server.url = "http://roms.lan:8080".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.url, "http://roms.lan:8080");
    }

    #[test]
    fn test_endpoint_appends_graphql_path() {
        let server = ServerConfig {
            url: "http://roms.lan:8080".to_string(),
        };
        assert_eq!(
            server.endpoint().unwrap().as_str(),
            "http://roms.lan:8080/graphql"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        for url in ["http://nas.lan/roms", "http://nas.lan/roms/"] {
            let server = ServerConfig {
                url: url.to_string(),
            };
            assert_eq!(
                server.endpoint().unwrap().as_str(),
                "http://nas.lan/roms/graphql"
            );
        }
    }

    #[test]
    fn test_invalid_url() {
        let server = ServerConfig {
            url: "not a url".to_string(),
        };
        assert!(server.endpoint().is_err());
    }
}
