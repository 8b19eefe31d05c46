mod fake_product_store;
mod recording_view;
mod scripted_interaction;

pub use fake_product_store::{FakeProductStore, StoreCall};
pub use recording_view::{RecordingView, ViewEvent};
pub use scripted_interaction::ScriptedInteraction;

use crate::domain::{Product, ProductId};

pub fn product(id: &str, name: &str, price: f64, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        category: category.to_string(),
    }
}
