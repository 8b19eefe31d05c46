//! Local mirror of the remote product collection.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::product::{Product, ProductPatch, normalize_key};

/// Request-sequencing token.
///
/// Taken when an operation starts. A full reload advances the mirror generation,
/// after which results carrying an older ticket are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorTicket {
    generation: u64,
}

/// Client-held copy of the product collection.
///
/// The name set and category mapping are derived from `products` and rebuilt
/// wholesale after every mutation.
#[derive(Debug, Clone, Default)]
pub struct CatalogMirror {
    products: Vec<Product>,
    names: BTreeSet<String>,
    categories: BTreeMap<String, String>,
    generation: u64,
}

impl CatalogMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all records. Outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.products.clear();
        self.generation += 1;
        self.rebuild();
    }

    pub fn ticket(&self) -> MirrorTicket {
        MirrorTicket { generation: self.generation }
    }

    pub fn is_current(&self, ticket: MirrorTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replace the whole sequence with a fresh listing.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
        self.generation += 1;
        self.rebuild();
    }

    /// Append a created record. Returns false when the ticket is stale.
    pub fn append(&mut self, ticket: MirrorTicket, product: Product) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.products.push(product);
        self.rebuild();
        true
    }

    /// Remove every record with this name. Returns false when the ticket is stale.
    pub fn remove(&mut self, ticket: MirrorTicket, name: &str) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let key = normalize_key(name);
        self.products.retain(|product| product.key() != key);
        self.rebuild();
        true
    }

    /// Patch records named `name` in place. Returns false when the ticket is stale.
    pub fn patch(&mut self, ticket: MirrorTicket, name: &str, patch: &ProductPatch) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let key = normalize_key(name);
        self.products
            .iter_mut()
            .filter(|product| product.key() == key)
            .for_each(|product| patch.apply_to(product));
        self.rebuild();
        true
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(&normalize_key(name))
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        let key = normalize_key(name);
        self.products.iter().find(|product| product.key() == key)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Category → the last product seen in that category.
    pub fn categories(&self) -> &BTreeMap<String, String> {
        &self.categories
    }

    /// Category whose mapping entry points at `name`, if any.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        let key = normalize_key(name);
        self.categories
            .iter()
            .find(|(_, owner)| normalize_key(owner) == key)
            .map(|(category, _)| category.as_str())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn rebuild(&mut self) {
        self.names = self.products.iter().map(Product::key).collect();
        self.categories = self
            .products
            .iter()
            .map(|product| (normalize_key(&product.category), product.name.clone()))
            .collect();
    }
}
