//! Configuration management for mailscope.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides for credentials. A stage whose
//! credentials are absent is statically disabled by the resolver, so
//! every key here is optional.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// Loaded from `~/.config/mailscope/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Paid enrichment API settings
    pub enrichment: EnrichmentConfig,
    /// Web-search provider settings
    pub search: SearchConfig,
    /// Pipeline/batch behavior settings
    pub resolver: ResolverConfig,
    /// Cache database settings
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be determined, or the
    /// file exists but cannot be read or is not valid TOML.
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides applied.
    ///
    /// Supported variables:
    /// - `MAILSCOPE_ENRICHMENT_API_KEY`
    /// - `MAILSCOPE_SEARCH_API_KEY`
    /// - `MAILSCOPE_SEARCH_SCOPE_ID`
    /// - `MAILSCOPE_DATABASE_PATH`
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to an already-loaded config.
    ///
    /// Credentials usually arrive through the environment in deployments;
    /// the TOML file is for everything else.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MAILSCOPE_ENRICHMENT_API_KEY") {
            if !val.is_empty() {
                self.enrichment.api_key = Some(val);
                tracing::debug!("Override enrichment.api_key from env");
            }
        }

        if let Ok(val) = std::env::var("MAILSCOPE_SEARCH_API_KEY") {
            if !val.is_empty() {
                self.search.api_key = Some(val);
                tracing::debug!("Override search.api_key from env");
            }
        }

        if let Ok(val) = std::env::var("MAILSCOPE_SEARCH_SCOPE_ID") {
            if !val.is_empty() {
                self.search.scope_id = Some(val);
                tracing::debug!("Override search.scope_id from env");
            }
        }

        if let Ok(val) = std::env::var("MAILSCOPE_DATABASE_PATH") {
            if !val.is_empty() {
                self.database.path = Some(PathBuf::from(val));
                tracing::debug!("Override database.path from env");
            }
        }
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/mailscope/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "mailscope", "mailscope").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path.
    ///
    /// Uses XDG base directories: `~/.local/share/mailscope`
    pub fn data_dir() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "mailscope", "mailscope").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

/// Paid enrichment API settings (ReverseContact-shaped endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// API key; absence disables the enrichment stage
    pub api_key: Option<String>,
    /// Endpoint base URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.reversecontact.com".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Web-search provider settings (Custom Search-shaped endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API key; absence disables both search-driven stages
    pub api_key: Option<String>,
    /// Search-scope (engine) identifier; required alongside the key
    pub scope_id: Option<String>,
    /// Endpoint base URL
    pub base_url: String,
    /// Results requested per query (provider caps this at 10)
    pub page_size: u32,
    /// Minimum delay between consecutive provider calls in milliseconds
    pub min_interval_ms: u64,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            scope_id: None,
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            page_size: 10,
            min_interval_ms: 500,
            timeout_secs: 10,
        }
    }
}

/// Pipeline/batch behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum resolutions in flight during a batch
    pub max_concurrent: usize,
    /// Emails processed per batch chunk
    pub batch_chunk_size: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 5,
            batch_chunk_size: 10,
        }
    }
}

/// Cache database settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file path; defaults to `<data dir>/lookups.db`
    pub path: Option<PathBuf>,
}

impl DatabaseConfig {
    /// The effective database path, falling back to the XDG data directory.
    ///
    /// # Errors
    /// Returns error if no path is configured and the data directory cannot
    /// be determined.
    pub fn resolved_path(&self) -> ConfigResult<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(AppConfig::data_dir()?.join("lookups.db")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.enrichment.api_key.is_none());
        assert!(config.search.api_key.is_none());
        assert_eq!(config.search.page_size, 10);
        assert_eq!(config.search.min_interval_ms, 500);
        assert_eq!(config.resolver.max_concurrent, 5);
        assert_eq!(config.resolver.batch_chunk_size, 10);
        assert_eq!(config.enrichment.timeout_secs, 10);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[enrichment]"));
        assert!(toml_str.contains("[search]"));
        assert!(toml_str.contains("[resolver]"));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed.search.base_url, config.search.base_url);
    }

    #[test]
    fn test_config_save_load() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");

        let mut config = AppConfig::default();
        config.search.min_interval_ms = 1000;
        config.resolver.max_concurrent = 2;

        let contents = toml::to_string_pretty(&config).expect("serialize config");
        fs::write(&config_path, contents).expect("write config file");

        let loaded_contents = fs::read_to_string(&config_path).expect("read config file");
        let loaded: AppConfig = toml::from_str(&loaded_contents).expect("parse loaded config");

        assert_eq!(loaded.search.min_interval_ms, 1000);
        assert_eq!(loaded.resolver.max_concurrent, 2);
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("MAILSCOPE_ENRICHMENT_API_KEY", "sk_test_enrich");
        std::env::set_var("MAILSCOPE_SEARCH_API_KEY", "test-search-key");
        std::env::set_var("MAILSCOPE_SEARCH_SCOPE_ID", "scope-123");

        let mut config = AppConfig::default();
        config.apply_env_overrides();

        assert_eq!(config.enrichment.api_key.as_deref(), Some("sk_test_enrich"));
        assert_eq!(config.search.api_key.as_deref(), Some("test-search-key"));
        assert_eq!(config.search.scope_id.as_deref(), Some("scope-123"));

        std::env::remove_var("MAILSCOPE_ENRICHMENT_API_KEY");
        std::env::remove_var("MAILSCOPE_SEARCH_API_KEY");
        std::env::remove_var("MAILSCOPE_SEARCH_SCOPE_ID");
    }

    #[test]
    fn test_partial_config() {
        // Partial TOML fills the rest with defaults
        let toml_str = r#"
[search]
api_key = "abc"
min_interval_ms = 750
"#;

        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");
        assert_eq!(config.search.api_key.as_deref(), Some("abc"));
        assert_eq!(config.search.min_interval_ms, 750);
        // These should be defaults
        assert_eq!(config.search.page_size, 10);
        assert!(config.enrichment.api_key.is_none());
    }

    #[test]
    fn test_database_resolved_path_prefers_explicit() {
        let config = DatabaseConfig {
            path: Some(PathBuf::from("/tmp/custom.db")),
        };
        assert_eq!(
            config.resolved_path().expect("resolve path"),
            PathBuf::from("/tmp/custom.db")
        );
    }
}
