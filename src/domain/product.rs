/// Represents a product in the catalog.
///
/// Prices are plain non-negative integers; there is no currency or tax
/// modeling here.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: u64,
}

/// Payload for registering a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: u64,
}

impl Product {
    /// Creates a new Product instance. The `id` is set by the store on register.
    #[allow(dead_code)]
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
        }
    }
}

impl crate::store::Entity for Product {
    type Id = u64;
    type CreateParams = ProductCreate;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn from_create_params(id: u64, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            price: params.price,
        }
    }
}
