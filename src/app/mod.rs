pub mod api;
pub mod catalog;
pub mod cli;

pub use catalog::{CatalogService, UNCATEGORIZED};
