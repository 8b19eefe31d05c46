//! Plain-text rendering of the catalog.

use std::collections::BTreeMap;
use std::io::{self, Stderr, Stdout, Write};

use crate::domain::{Message, Product, ProductAction, ProductField};
use crate::ports::CatalogView;

/// Writes listings and success banners to `out`, error banners to `err`.
///
/// Write failures are ignored: the terminal is the last place to report them.
pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
    listings: bool,
}

impl TerminalView<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err, listings: true }
    }

    /// Toggle full listings. Banners and search results are always shown.
    pub fn set_listings(&mut self, enabled: bool) {
        self.listings = enabled;
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_product(&mut self, product: &Product) {
        let _ = writeln!(self.out, "Name: {}", product.name);
        let _ = writeln!(self.out, "Price: ${}", product.display_price());
        let _ = writeln!(self.out, "Category: {}", product.category);
    }
}

impl<O: Write, E: Write> CatalogView for TerminalView<O, E> {
    fn render_all(&mut self, products: &[Product]) {
        if !self.listings {
            return;
        }
        if products.is_empty() {
            let _ = writeln!(self.out, "No products available.");
            return;
        }

        for (index, product) in products.iter().enumerate() {
            if index > 0 {
                let _ = writeln!(self.out);
            }
            self.write_product(product);
        }
    }

    fn render_match(&mut self, product: &Product, category: &str, actions: &[ProductAction]) {
        self.write_product(product);
        let _ = writeln!(self.out, "Mapped category: {}", category);
        if !actions.is_empty() {
            let controls: Vec<String> =
                actions.iter().map(|action| format!("[{}]", action.kind.label())).collect();
            let _ = writeln!(self.out, "{}", controls.join(" "));
        }
    }

    fn render_not_found(&mut self, term: &str) {
        let _ = writeln!(self.out, "Product \"{}\" not found.", term);
    }

    fn update_field(&mut self, name: &str, field: ProductField, value: &str) {
        let _ = writeln!(self.out, "{}: {} = {}", name, field.label(), value);
    }

    fn render_categories(&mut self, categories: &BTreeMap<String, String>) {
        if categories.is_empty() {
            let _ = writeln!(self.out, "No categories available.");
            return;
        }
        for (category, name) in categories {
            let _ = writeln!(self.out, "{}: {}", category, name);
        }
    }

    fn show_message(&mut self, message: &Message) {
        if message.is_error() {
            let _ = writeln!(self.err, "{}", message);
        } else {
            let _ = writeln!(self.out, "{}", message);
        }
    }

    // Nothing persists between terminal inputs.
    fn reset_form(&mut self) {}
}
