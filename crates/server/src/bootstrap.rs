use std::sync::Arc;

use storefront_core::config::AppConfig;
use storefront_db::{InMemoryProductRepository, ProductRepository};
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub repository: Arc<dyn ProductRepository>,
}

/// Builds the application from an already loaded config so logging can be
/// initialized before any bootstrap events are emitted.
pub fn bootstrap_with_config(config: AppConfig) -> Application {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");
    let repository = Arc::new(InMemoryProductRepository::seeded());
    info!(event_name = "system.bootstrap.catalog_seeded", "product catalog seeded");

    Application { config, repository }
}

#[cfg(test)]
mod tests {
    use storefront_core::config::AppConfig;
    use storefront_core::domain::product::ProductType;

    use crate::bootstrap::bootstrap_with_config;

    #[tokio::test]
    async fn bootstrap_seeds_the_catalog() {
        let app = bootstrap_with_config(AppConfig::default());

        assert_eq!(app.repository.count().await.expect("count"), 5);
        let books = app.repository.find_all(Some(ProductType::Book)).await.expect("books");
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn bootstrap_keeps_the_loaded_config() {
        let mut config = AppConfig::default();
        config.server.port = 9400;

        let app = bootstrap_with_config(config);

        assert_eq!(app.config.server.api_address(), "127.0.0.1:9400");
    }
}
