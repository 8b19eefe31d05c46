use std::sync::{Arc, Mutex};

use crate::domain::{AppError, NewProduct, Operation, Product, ProductId, ProductPatch};
use crate::ports::ProductStore;

/// A request as seen by the fake remote store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    FindByName(String),
    Create(NewProduct),
    Patch(ProductId, ProductPatch),
    Delete(ProductId),
}

#[derive(Debug, Default)]
struct FakeState {
    products: Vec<Product>,
    next_id: u64,
    calls: Vec<StoreCall>,
    unavailable: bool,
}

/// In-memory stand-in for the remote collection.
///
/// Clones share state, so a test can keep a handle after handing one to the service.
#[derive(Debug, Clone, Default)]
pub struct FakeProductStore {
    state: Arc<Mutex<FakeState>>,
}

#[allow(dead_code)]
impl FakeProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.lock().unwrap();
            state.next_id = products.len() as u64;
            state.products = products;
        }
        store
    }

    /// Make every following request fail as if the server were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().unwrap().unavailable = unavailable;
    }

    /// Change the remote collection behind the client's back.
    pub fn insert_remote(&self, product: Product) {
        self.state.lock().unwrap().products.push(product);
    }

    pub fn remove_remote(&self, name: &str) {
        self.state.lock().unwrap().products.retain(|product| product.name != name);
    }

    pub fn remote_products(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    fn record(&self, operation: Operation, call: StoreCall) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.unavailable {
            return Err(AppError::Api {
                operation,
                status: None,
                message: "HTTP request failed: connection refused".into(),
            });
        }
        Ok(())
    }
}

fn missing(operation: Operation) -> AppError {
    AppError::Api { operation, status: Some(404), message: "Not Found".into() }
}

impl ProductStore for FakeProductStore {
    fn list(&self) -> Result<Vec<Product>, AppError> {
        self.record(Operation::Load, StoreCall::List)?;
        Ok(self.remote_products())
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<Product>, AppError> {
        self.record(Operation::Search, StoreCall::FindByName(name.to_string()))?;
        let state = self.state.lock().unwrap();
        Ok(state.products.iter().filter(|product| product.name == name).cloned().collect())
    }

    fn create(&self, product: &NewProduct) -> Result<Product, AppError> {
        self.record(Operation::Create, StoreCall::Create(product.clone()))?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let created = Product {
            id: ProductId::new(state.next_id.to_string()),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
        };
        state.products.push(created.clone());
        Ok(created)
    }

    fn patch(&self, id: &ProductId, patch: &ProductPatch) -> Result<(), AppError> {
        self.record(patch.operation(), StoreCall::Patch(id.clone(), patch.clone()))?;
        let mut state = self.state.lock().unwrap();
        let product = state
            .products
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or_else(|| missing(patch.operation()))?;
        patch.apply_to(product);
        Ok(())
    }

    fn delete(&self, id: &ProductId) -> Result<(), AppError> {
        self.record(Operation::Delete, StoreCall::Delete(id.clone()))?;
        let mut state = self.state.lock().unwrap();
        let before = state.products.len();
        state.products.retain(|product| &product.id != id);
        if state.products.len() == before {
            return Err(missing(Operation::Delete));
        }
        Ok(())
    }
}
