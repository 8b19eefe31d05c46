pub mod config_file;
pub mod dialoguer_interaction;
pub mod http_product_store;
pub mod terminal_view;

pub use config_file::{ConfigOverrides, load_config};
pub use dialoguer_interaction::DialoguerInteraction;
pub use http_product_store::HttpProductStore;
pub use terminal_view::TerminalView;
