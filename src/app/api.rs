//! API facade.
//!
//! Glues configuration discovery and adapter construction into a ready
//! catalog session.

use std::env;
use std::io::{Stderr, Stdout};

use crate::adapters::{ConfigOverrides, HttpProductStore, TerminalView, load_config};
use crate::app::CatalogService;
use crate::domain::{AppError, CatalogConfig};

pub use crate::adapters::config_file::{API_URL_ENV, CONFIG_FILE_NAME};

/// Catalog session talking HTTP and rendering to the terminal.
pub type TerminalCatalog = CatalogService<HttpProductStore, TerminalView<Stdout, Stderr>>;

/// Resolve configuration relative to the current directory.
pub fn resolve_config(overrides: &ConfigOverrides) -> Result<CatalogConfig, AppError> {
    let dir = env::current_dir()?;
    load_config(overrides, &dir)
}

/// Build an unloaded session from configuration.
pub fn connect(config: &CatalogConfig) -> Result<TerminalCatalog, AppError> {
    let store = HttpProductStore::new(&config.api)?;
    tracing::debug!(url = %store.collection_url(), "connecting to collection");
    Ok(CatalogService::new(store, TerminalView::stdio(), config.view.render))
}
