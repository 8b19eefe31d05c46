//! Remote product collection port.

use crate::domain::{AppError, NewProduct, Product, ProductId, ProductPatch};

/// Port for the remote collection endpoint.
///
/// Each call is a single round-trip. Nothing here is transactional: an id
/// resolved by `find_by_name` may be stale by the time it is patched or deleted.
pub trait ProductStore {
    /// Fetch the full listing.
    fn list(&self) -> Result<Vec<Product>, AppError>;

    /// Fetch products whose name matches `name` exactly.
    fn find_by_name(&self, name: &str) -> Result<Vec<Product>, AppError>;

    /// Create a product. Returns the stored record with its assigned id.
    fn create(&self, product: &NewProduct) -> Result<Product, AppError>;

    /// Apply a partial update.
    fn patch(&self, id: &ProductId, patch: &ProductPatch) -> Result<(), AppError>;

    /// Delete a product.
    fn delete(&self, id: &ProductId) -> Result<(), AppError>;
}
