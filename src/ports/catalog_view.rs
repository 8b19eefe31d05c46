//! Rendering surface port.

use std::collections::BTreeMap;

use crate::domain::{Message, Product, ProductAction, ProductField};

/// Everything the catalog shows to the user.
pub trait CatalogView {
    /// Replace the "all products" listing.
    fn render_all(&mut self, products: &[Product]);

    /// Show a search hit together with its controls.
    ///
    /// `category` is the category the mirror's mapping associates with the hit.
    fn render_match(&mut self, product: &Product, category: &str, actions: &[ProductAction]);

    /// Show that a search term matched nothing.
    fn render_not_found(&mut self, term: &str);

    /// Update one field of an already rendered record.
    fn update_field(&mut self, name: &str, field: ProductField, value: &str);

    /// Show the category → product mapping.
    fn render_categories(&mut self, categories: &BTreeMap<String, String>);

    /// Show the message banner.
    fn show_message(&mut self, message: &Message);

    /// Clear the creation form.
    fn reset_form(&mut self);
}
