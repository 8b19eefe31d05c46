pub mod action;
pub mod config;
pub mod error;
pub mod message;
pub mod mirror;
pub mod product;

pub use action::{ActionKind, ProductAction};
pub use config::{ApiConfig, CatalogConfig, RenderMode, ViewConfig};
pub use error::AppError;
pub use message::{Message, MessageKind, Operation};
pub use mirror::{CatalogMirror, MirrorTicket};
pub use product::{NewProduct, Product, ProductField, ProductForm, ProductId, ProductPatch};
