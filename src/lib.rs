//! catalog-mirror: keep a local mirror of a REST-backed products catalog in sync
//! with the server and reflect every change into a view.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{ConfigOverrides, DialoguerInteraction, HttpProductStore, TerminalView};
pub use app::api::{TerminalCatalog, connect, resolve_config};
pub use app::{CatalogService, UNCATEGORIZED};
pub use domain::{
    ActionKind, AppError, CatalogConfig, CatalogMirror, Message, MessageKind, NewProduct,
    Operation, Product, ProductAction, ProductField, ProductForm, ProductId, ProductPatch,
    RenderMode,
};
pub use ports::{AssumeYes, CatalogView, Interaction, ProductStore};
