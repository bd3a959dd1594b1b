use tracing::{debug, info, instrument};

use crate::domain::{Product, ProductCreate};
use crate::error::ProductError;
use crate::store::MemoryStore;

/// Catalog registration and lookup for products.
pub struct ProductService {
    store: MemoryStore<Product>,
}

impl ProductService {
    pub fn new(store: MemoryStore<Product>) -> Self {
        Self { store }
    }

    /// Adds a product to the catalog, returning its assigned id.
    #[instrument(skip(self))]
    pub fn register(&mut self, params: ProductCreate) -> u64 {
        let id = self.store.create(params);
        info!(product_id = id, "Product registered");
        id
    }

    #[instrument(skip(self))]
    pub fn find_product(&self, id: u64) -> Result<&Product, ProductError> {
        debug!("Looking up product");
        self.store.get(&id).ok_or(ProductError::NotFound(id))
    }
}
