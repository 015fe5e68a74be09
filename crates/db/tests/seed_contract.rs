use storefront_core::domain::product::{Product, ProductId, ProductType};
use storefront_db::{InMemoryProductRepository, ProductRepository};

type SeedContractTestResult<T = ()> = Result<T, String>;

macro_rules! require_eq {
    ($left:expr, $right:expr) => {
        if $left != $right {
            return Err(format!(
                "assertion failed: `left == right` (`{:?}` != `{:?}`)",
                $left,
                $right
            ));
        }
    };
    ($left:expr, $right:expr, $($arg:tt)*) => {
        if $left != $right {
            return Err(format!($($arg)*));
        }
    };
}

async fn products_of(
    repo: &InMemoryProductRepository,
    product_type: ProductType,
) -> SeedContractTestResult<Vec<Product>> {
    repo.find_all(Some(product_type)).await.map_err(|error| error.to_string())
}

#[tokio::test]
async fn seed_contains_five_fixed_products() -> SeedContractTestResult {
    let repo = InMemoryProductRepository::seeded();

    let count = repo.count().await.map_err(|error| error.to_string())?;
    require_eq!(count, 5, "seeded catalog should hold five products, found {count}");

    let mut all = Vec::new();
    for product_type in ProductType::ALL {
        all.extend(products_of(&repo, product_type).await?);
    }
    all.sort_by_key(|product| product.id);

    let expected = [
        (1, "Game of Thrones", ProductType::Book, 50, 200.0),
        (2, "Milk", ProductType::Food, 100, 45.0),
        (3, "Camera", ProductType::Gadget, 10, 25_000.0),
        (4, "iPhone", ProductType::Gadget, 2, 50_000.0),
        (5, "Binoculars", ProductType::Other, 10, 12_000.0),
    ];
    require_eq!(all.len(), expected.len());

    for (product, (id, name, product_type, inventory, cost)) in all.iter().zip(expected) {
        require_eq!(product.id, ProductId(id));
        require_eq!(product.name.as_str(), name, "seed {id} should be named {name}");
        require_eq!(product.product_type, product_type);
        require_eq!(product.inventory, inventory);
        require_eq!(product.cost, Some(cost));
    }

    Ok(())
}

#[tokio::test]
async fn seed_is_invisible_without_a_type_filter() -> SeedContractTestResult {
    let repo = InMemoryProductRepository::seeded();

    let unfiltered = repo.find_all(None).await.map_err(|error| error.to_string())?;
    require_eq!(unfiltered.len(), 0, "unfiltered lookups match nothing");

    Ok(())
}

#[tokio::test]
async fn seed_gadgets_keep_insertion_order() -> SeedContractTestResult {
    let repo = InMemoryProductRepository::seeded();

    let names = products_of(&repo, ProductType::Gadget)
        .await?
        .into_iter()
        .map(|product| product.name)
        .collect::<Vec<_>>();
    require_eq!(names, vec!["Camera".to_string(), "iPhone".to_string()]);

    Ok(())
}
