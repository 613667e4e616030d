//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use pricepal_catalog::mapper::{AssignmentStrategy, ProductMapper};
use pricepal_catalog::retailer::{Retailer, RetailerDirectory};
use pricepal_data::{
    DummyJsonSource, FetchClient, TimeoutConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
};
use pricepal_search::{SearchService, SearchSession, SuggestionService};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["pricepal.toml", ".pricepal.toml", "pricepal.json"];

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "PRICEPAL_API_BASE_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePalConfig {
    /// Product API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Search behaviour.
    #[serde(default)]
    pub search: SearchConfig,

    /// Retailer attribution.
    #[serde(default)]
    pub retailers: RetailersConfig,
}

impl PricePalConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply a base URL override, ignoring blank values.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Apply overrides from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Quiet period before a keystroke triggers a lookup.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    /// The retailer directory: configured entries, or the built-in seven.
    pub fn directory(&self) -> Result<RetailerDirectory> {
        if self.retailers.entries.is_empty() {
            return Ok(RetailerDirectory::default());
        }
        RetailerDirectory::new(self.retailers.entries.clone())
            .context("Invalid [retailers] configuration")
    }

    /// The product mapper for this configuration.
    pub fn mapper(&self) -> Result<ProductMapper> {
        Ok(ProductMapper::new(self.directory()?).with_strategy(self.retailers.assignment))
    }

    /// The remote product source.
    pub fn source(&self) -> Result<DummyJsonSource> {
        let client = FetchClient::builder(&self.api.base_url)
            .with_timeout(TimeoutConfig::from_millis(
                self.api.connect_timeout_ms,
                self.api.total_timeout_ms,
            ))
            .with_user_agent(
                self.api
                    .user_agent
                    .clone()
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            )
            .with_default_header("accept", "application/json")
            .build()
            .with_context(|| format!("Invalid API settings for {}", self.api.base_url))?;
        Ok(DummyJsonSource::new(client))
    }

    /// A search session against the remote source.
    pub fn session(&self) -> Result<SearchSession<DummyJsonSource>> {
        let source = self.source()?;
        Ok(SearchSession::from_services(
            SearchService::new(source.clone(), self.mapper()?),
            SuggestionService::new(source).with_limit(self.search.suggestion_limit),
        ))
    }
}

/// Product API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the search API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Total request timeout in milliseconds.
    #[serde(default = "default_total_timeout_ms")]
    pub total_timeout_ms: u64,

    /// `User-Agent` override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_ms() -> u64 {
    3_000
}

fn default_total_timeout_ms() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
            total_timeout_ms: default_total_timeout_ms(),
            user_agent: None,
        }
    }
}

/// Search behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Debounce quiet period in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Page size for suggestion lookups.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u32,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_suggestion_limit() -> u32 {
    5
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

/// Retailer attribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetailersConfig {
    /// How products are assigned to retailers.
    #[serde(default)]
    pub assignment: AssignmentStrategy,

    /// Custom directory; empty means the built-in retailers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Retailer>,
}

/// Generate a default pricepal.toml.
pub fn generate_default_config() -> String {
    format!(
        r#"# PricePal configuration

[api]
base_url = "{base_url}"
connect_timeout_ms = 3000
total_timeout_ms = 10000
# user_agent = "pricepal"

[search]
debounce_ms = 300
suggestion_limit = 5

[retailers]
# "hashed" keeps each product on the same retailer; "random" picks anew per search.
assignment = "hashed"

# Replace the built-in retailers by listing your own:
# [[retailers.entries]]
# name = "Amazon"
# logo = "https://logo.clearbit.com/amazon.in"
# link_template = "https://www.amazon.in/s?k={{query}}"
"#,
        base_url = DEFAULT_BASE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: PricePalConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, PricePalConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PricePalConfig = toml::from_str(
            r#"
[search]
debounce_ms = 150
"#,
        )
        .unwrap();
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.search.suggestion_limit, 5);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let config = PricePalConfig::default()
            .with_base_url_override(Some(" http://localhost:3000 ".to_string()));
        assert_eq!(config.api.base_url, "http://localhost:3000");

        let config = PricePalConfig::default().with_base_url_override(Some("  ".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_custom_retailers() {
        let config: PricePalConfig = toml::from_str(
            r#"
[retailers]
assignment = "random"

[[retailers.entries]]
name = "Nykaa"
logo = "https://logo.example/nykaa.png"
link_template = "https://www.nykaa.com/search/result/?q={query}"
"#,
        )
        .unwrap();

        let mapper = config.mapper().unwrap();
        assert_eq!(mapper.strategy(), AssignmentStrategy::Random);
        assert_eq!(mapper.directory().names(), vec!["Nykaa"]);
    }

    #[test]
    fn test_invalid_retailers_rejected() {
        let mut config = PricePalConfig::default();
        config.retailers.entries = vec![
            Retailer::new("Croma", "a.png"),
            Retailer::new("Croma", "b.png"),
        ];
        assert!(config.directory().is_err());
    }

    #[test]
    fn test_loads_json_by_extension() {
        let path = std::env::temp_dir().join(format!("pricepal-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"search": {"suggestion_limit": 8}}"#).unwrap();

        let loaded = PricePalConfig::load(&path.to_string_lossy());
        std::fs::remove_file(&path).ok();

        let loaded = loaded.unwrap();
        assert_eq!(loaded.search.suggestion_limit, 8);
        assert_eq!(loaded.search.debounce_ms, 300);
    }

    #[test]
    fn test_session_builds_from_defaults() {
        let session = PricePalConfig::default().session().unwrap();
        assert_eq!(session.suggestion_service().limit(), 5);
    }
}
