mod catalog_view;
mod interaction;
mod product_store;

pub use catalog_view::CatalogView;
pub use interaction::{AssumeYes, Interaction};
pub use product_store::ProductStore;
