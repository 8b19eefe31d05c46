//! Configuration discovery: defaults, `catalog.toml`, environment, flags.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, CatalogConfig, RenderMode};

pub const CONFIG_FILE_NAME: &str = "catalog.toml";
pub const API_URL_ENV: &str = "CATALOG_API_URL";

/// Values supplied on the command line. They win over everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub api_url: Option<String>,
    pub render: Option<RenderMode>,
}

/// Resolve the effective configuration.
///
/// Precedence: defaults < config file < `CATALOG_API_URL` < command line.
/// An explicitly named config file must exist; `catalog.toml` in `dir` is optional.
pub fn load_config(overrides: &ConfigOverrides, dir: &Path) -> Result<CatalogConfig, AppError> {
    let mut config = match &overrides.config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            read_config(path)?
        }
        None => {
            let path = dir.join(CONFIG_FILE_NAME);
            if path.is_file() { read_config(&path)? } else { CatalogConfig::default() }
        }
    };

    if let Some(raw) = env::var(API_URL_ENV).ok().filter(|value| !value.trim().is_empty()) {
        config.api.base_url = parse_base_url(&raw)?;
    }
    if let Some(raw) = &overrides.api_url {
        config.api.base_url = parse_base_url(raw)?;
    }
    if let Some(render) = overrides.render {
        config.view.render = render;
    }

    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<CatalogConfig, AppError> {
    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}

fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw.trim())
        .map_err(|e| AppError::InvalidUrl { url: raw.to_string(), details: e.to_string() })
}
