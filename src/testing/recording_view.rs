use std::collections::BTreeMap;

use crate::domain::{Message, Product, ProductAction, ProductField};
use crate::ports::CatalogView;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    RenderAll(Vec<String>),
    RenderMatch(Product, String, Vec<ProductAction>),
    NotFound(String),
    UpdateField(String, ProductField, String),
    Categories(BTreeMap<String, String>),
    Message(Message),
    ResetForm,
}

/// View that remembers everything it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

#[allow(dead_code)]
impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.events.iter().rev().find_map(|event| match event {
            ViewEvent::Message(message) => Some(message),
            _ => None,
        })
    }

    /// Names shown by the most recent full listing.
    pub fn last_listing(&self) -> Option<&[String]> {
        self.events.iter().rev().find_map(|event| match event {
            ViewEvent::RenderAll(names) => Some(names.as_slice()),
            _ => None,
        })
    }

    pub fn count(&self, predicate: impl Fn(&ViewEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl CatalogView for RecordingView {
    fn render_all(&mut self, products: &[Product]) {
        let names = products.iter().map(|product| product.name.clone()).collect();
        self.events.push(ViewEvent::RenderAll(names));
    }

    fn render_match(&mut self, product: &Product, category: &str, actions: &[ProductAction]) {
        let event = ViewEvent::RenderMatch(product.clone(), category.to_string(), actions.to_vec());
        self.events.push(event);
    }

    fn render_not_found(&mut self, term: &str) {
        self.events.push(ViewEvent::NotFound(term.to_string()));
    }

    fn update_field(&mut self, name: &str, field: ProductField, value: &str) {
        self.events.push(ViewEvent::UpdateField(name.to_string(), field, value.to_string()));
    }

    fn render_categories(&mut self, categories: &BTreeMap<String, String>) {
        self.events.push(ViewEvent::Categories(categories.clone()));
    }

    fn show_message(&mut self, message: &Message) {
        self.events.push(ViewEvent::Message(message.clone()));
    }

    fn reset_form(&mut self) {
        self.events.push(ViewEvent::ResetForm);
    }
}
