//! Catalog operations over the remote store, the local mirror, and the view.

use tracing::{debug, warn};

use crate::domain::product::{normalize_key, parse_price};
use crate::domain::{
    ActionKind, AppError, CatalogMirror, Message, MirrorTicket, NewProduct, Operation, Product,
    ProductAction, ProductForm, ProductPatch, RenderMode,
};
use crate::ports::{CatalogView, Interaction, ProductStore};

/// Shown for products that own no entry in the category mapping.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Keeps a [`CatalogMirror`] in step with a remote [`ProductStore`] and
/// reflects every change into a [`CatalogView`].
///
/// Every mutation succeeds remotely before the mirror is touched. Delete and
/// edit resolve the id with a fresh lookup by name and then act by id; the two
/// calls are not atomic, so a concurrent rename or delete on the server can slip
/// in between them.
///
/// Mutations go through [`CatalogMirror`]'s ticketed API. Operations here hold
/// `&mut self` for their whole round-trip, so a reload cannot land mid-flight
/// and the stale-ticket branch stays idle. Tickets matter to callers that drive
/// a `CatalogMirror` directly across their own requests.
pub struct CatalogService<S: ProductStore, V: CatalogView> {
    store: S,
    view: V,
    mirror: CatalogMirror,
    render_mode: RenderMode,
}

impl<S: ProductStore, V: CatalogView> CatalogService<S, V> {
    pub fn new(store: S, view: V, render_mode: RenderMode) -> Self {
        Self { store, view, mirror: CatalogMirror::new(), render_mode }
    }

    pub fn mirror(&self) -> &CatalogMirror {
        &self.mirror
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Forget all local state.
    pub fn reset(&mut self) {
        self.mirror.reset();
        self.view.render_all(self.mirror.products());
    }

    /// Render the mirror as it stands, without a request.
    pub fn show_all(&mut self) {
        self.view.render_all(self.mirror.products());
    }

    pub fn show_categories(&mut self) {
        self.view.render_categories(self.mirror.categories());
    }

    /// Show a failed operation in the message banner.
    pub fn report(&mut self, error: &AppError) {
        if !error.is_local() {
            warn!(%error, "operation failed");
        }
        self.view.show_message(&Message::from(error));
    }

    /// Replace the mirror with the full remote listing.
    ///
    /// On failure the mirror keeps whatever it held before.
    pub fn load(&mut self) -> Result<usize, AppError> {
        let products = self.store.list().map_err(|e| e.during(Operation::Load))?;
        debug!(count = products.len(), "loaded products");

        self.mirror.replace_all(products);
        self.view.render_all(self.mirror.products());
        Ok(self.mirror.len())
    }

    /// Create a product from form input.
    ///
    /// Invalid fields and names already in the mirror are rejected without a request.
    pub fn create(&mut self, form: &ProductForm) -> Result<Product, AppError> {
        let product = NewProduct::from_form(form)?;
        if self.mirror.contains_name(&product.name) {
            return Err(AppError::DuplicateProduct(product.name));
        }

        let ticket = self.mirror.ticket();
        let created = self.store.create(&product).map_err(|e| e.during(Operation::Create))?;

        if self.mirror.append(ticket, created.clone()) {
            self.view.render_all(self.mirror.products());
        } else {
            discard(Operation::Create, &created.name);
        }
        self.view.show_message(&Message::success(format!(
            "Product \"{}\" added successfully.",
            created.name
        )));
        self.view.reset_form();
        Ok(created)
    }

    /// Look a product up remotely by exact (lowercased) name.
    pub fn find_by_name(&mut self, term: &str) -> Result<Option<Product>, AppError> {
        let key = normalize_key(term);
        if key.is_empty() {
            return Err(AppError::invalid_input("Please enter a product name to search."));
        }

        let found = self
            .store
            .find_by_name(&key)
            .map_err(|e| e.during(Operation::Search))?
            .into_iter()
            .next();

        match &found {
            Some(product) => {
                let category = self.category_of(&product.name).to_string();
                self.view.render_match(product, &category, &ProductAction::all_for(&product.name))
            }
            None => self.view.render_not_found(&key),
        }
        Ok(found)
    }

    /// Delete a product after confirmation.
    ///
    /// Returns `None` when the user declines.
    pub fn delete<I: Interaction>(
        &mut self,
        name: &str,
        interaction: &mut I,
    ) -> Result<Option<Product>, AppError> {
        let key = require_name(name)?;
        if !interaction.confirm(&format!("Delete the product \"{}\"?", key))? {
            return Ok(None);
        }

        let ticket = self.mirror.ticket();
        let target = self.resolve(&key, Operation::Delete)?;
        self.store.delete(&target.id).map_err(|e| e.during(Operation::Delete))?;

        if self.mirror.remove(ticket, &key) {
            self.view.render_all(self.mirror.products());
        } else {
            discard(Operation::Delete, &key);
        }
        self.view.show_message(&Message::success("Product deleted successfully."));
        Ok(Some(target))
    }

    pub fn edit_price(&mut self, name: &str, new_price: &str) -> Result<Product, AppError> {
        let price = parse_price(new_price)?;
        self.apply_edit(name, Operation::EditPrice, ProductPatch::Price(price), "Price updated.")
    }

    pub fn edit_category(&mut self, name: &str, new_category: &str) -> Result<Product, AppError> {
        let category = normalize_key(new_category);
        if category.is_empty() {
            return Err(AppError::invalid_input("Invalid category."));
        }
        self.apply_edit(
            name,
            Operation::EditCategory,
            ProductPatch::Category(category),
            "Category updated.",
        )
    }

    /// Rename a product. The new name must not already be in the mirror.
    pub fn edit_name(&mut self, name: &str, new_name: &str) -> Result<Product, AppError> {
        let renamed = normalize_key(new_name);
        if renamed.is_empty() {
            return Err(AppError::invalid_input("Invalid name."));
        }
        if self.mirror.contains_name(&renamed) {
            return Err(AppError::DuplicateProduct(renamed));
        }
        self.apply_edit(name, Operation::EditName, ProductPatch::Name(renamed), "Name updated.")
    }

    /// Run a control attached to a rendered record, prompting for new values.
    pub fn dispatch<I: Interaction>(
        &mut self,
        action: &ProductAction,
        interaction: &mut I,
    ) -> Result<(), AppError> {
        let target = action.target.as_str();
        match action.kind {
            ActionKind::Delete => self.delete(target, interaction).map(|_| ()),
            ActionKind::EditPrice => {
                let value = ask(interaction, "Enter the new price:", "Invalid price.")?;
                self.edit_price(target, &value).map(|_| ())
            }
            ActionKind::EditCategory => {
                let value = ask(interaction, "Enter the new category:", "Invalid category.")?;
                self.edit_category(target, &value).map(|_| ())
            }
            ActionKind::EditName => {
                let value = ask(interaction, "Enter the new name:", "Invalid name.")?;
                self.edit_name(target, &value).map(|_| ())
            }
        }
    }

    /// Category the mapping associates with `name`.
    pub fn category_of(&self, name: &str) -> &str {
        self.mirror.category_of(name).unwrap_or(UNCATEGORIZED)
    }

    fn apply_edit(
        &mut self,
        name: &str,
        operation: Operation,
        patch: ProductPatch,
        success: &str,
    ) -> Result<Product, AppError> {
        let key = require_name(name)?;
        let ticket = self.mirror.ticket();
        let mut target = self.resolve(&key, operation)?;
        self.store.patch(&target.id, &patch).map_err(|e| e.during(operation))?;

        self.apply_locally(ticket, &key, operation, &patch);
        self.view.show_message(&Message::success(success));

        patch.apply_to(&mut target);
        Ok(target)
    }

    fn apply_locally(
        &mut self,
        ticket: MirrorTicket,
        key: &str,
        operation: Operation,
        patch: &ProductPatch,
    ) {
        if !self.mirror.patch(ticket, key, patch) {
            discard(operation, key);
            return;
        }
        match self.render_mode {
            RenderMode::Incremental => {
                self.view.update_field(key, patch.field(), &patch.display_value())
            }
            RenderMode::Full => self.view.render_all(self.mirror.products()),
        }
    }

    /// Fresh remote lookup of the record currently named `key`.
    fn resolve(&self, key: &str, operation: Operation) -> Result<Product, AppError> {
        self.store
            .find_by_name(key)
            .map_err(|e| e.during(operation))?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ProductNotFound(key.to_string()))
    }
}

fn require_name(name: &str) -> Result<String, AppError> {
    let key = normalize_key(name);
    if key.is_empty() {
        return Err(AppError::invalid_input("Please enter a product name."));
    }
    Ok(key)
}

fn ask<I: Interaction>(
    interaction: &mut I,
    question: &str,
    invalid: &str,
) -> Result<String, AppError> {
    interaction.prompt(question)?.ok_or_else(|| AppError::invalid_input(invalid))
}

fn discard(operation: Operation, name: &str) {
    warn!(?operation, name, "mirror reloaded while request was in flight, result discarded");
}
