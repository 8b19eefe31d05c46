//! Catalog configuration (`catalog.toml`).

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }
}

/// Remote collection endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Server root, e.g. `http://localhost:3000`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Collection path segment under the base URL.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "api.base_url must use http or https: {}",
                self.base_url
            )));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "api.base_url cannot be used as a base: {}",
                self.base_url
            )));
        }
        let collection = self.collection.trim_matches('/');
        if collection.is_empty() || collection.contains('/') {
            return Err(AppError::config_error(
                "api.collection must be a single non-empty path segment",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("api.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:3000").expect("Default base URL must be valid")
}

fn default_collection() -> String {
    "products".to_string()
}

fn default_timeout() -> u64 {
    10
}

/// How edits are reflected in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Update only the edited field of the rendered record.
    #[default]
    Incremental,
    /// Re-render the whole product list.
    Full,
}

impl RenderMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "incremental" => Some(RenderMode::Incremental),
            "full" => Some(RenderMode::Full),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    #[serde(default)]
    pub render: RenderMode,
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<CatalogConfig, AppError> {
    let config: CatalogConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
