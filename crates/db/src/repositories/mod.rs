use async_trait::async_trait;
use thiserror::Error;

use storefront_core::domain::product::{NewProduct, Product, ProductType};

pub mod memory;

pub use memory::InMemoryProductRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products of the given type in insertion order; `None` matches nothing.
    async fn find_all(&self, product_type: Option<ProductType>)
        -> Result<Vec<Product>, RepositoryError>;

    /// Stores the product and returns the store size after the write.
    async fn save(&self, product: NewProduct) -> Result<usize, RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;
}
