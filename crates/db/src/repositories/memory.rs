use tokio::sync::RwLock;
use tracing::debug;

use storefront_core::catalog::Catalog;
use storefront_core::domain::product::{NewProduct, Product, ProductType};

use super::{ProductRepository, RepositoryError};

/// Catalog held in process memory behind a single lock.
///
/// `save` keeps the write lock across reading the size and inserting, so
/// concurrent creates never compute the same key.
#[derive(Default)]
pub struct InMemoryProductRepository {
    catalog: RwLock<Catalog>,
}

impl InMemoryProductRepository {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: RwLock::new(catalog) }
    }

    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(
        &self,
        product_type: Option<ProductType>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.find_all(product_type))
    }

    async fn save(&self, product: NewProduct) -> Result<usize, RepositoryError> {
        let mut catalog = self.catalog.write().await;
        let size = catalog.save(product);
        debug!(event_name = "catalog.store.saved", size, "product written to in-memory catalog");
        Ok(size)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.len())
    }
}
