use std::collections::HashSet;

use crate::domain::product::{NewProduct, Product, ProductId, ProductType};

/// In-memory product catalog keyed by integer id, iterated in insertion
/// order regardless of the key values.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    keys: HashSet<u32>,
}

impl Catalog {
    /// Later duplicates of an id are dropped, like any other occupied key.
    pub fn new(products: Vec<Product>) -> Self {
        let mut catalog = Self::default();
        for product in products {
            catalog.insert_if_vacant(product);
        }
        catalog
    }

    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose type equals `product_type`. A missing filter is
    /// compared like any other value and therefore matches nothing.
    pub fn find_all(&self, product_type: Option<ProductType>) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| Some(product.product_type) == product_type)
            .cloned()
            .collect()
    }

    /// Inserts under `len + 1` if that key is vacant and returns the catalog
    /// size afterwards, which is not necessarily the key used.
    pub fn save(&mut self, product: NewProduct) -> usize {
        let key = self.next_key();
        self.insert_if_vacant(product.with_id(ProductId(key)));
        self.products.len()
    }

    fn insert_if_vacant(&mut self, product: Product) {
        if self.keys.insert(product.id.0) {
            self.products.push(product);
        }
    }

    fn next_key(&self) -> u32 {
        u32::try_from(self.products.len()).map_or(u32::MAX, |len| len.saturating_add(1))
    }
}

pub fn seed_products() -> Vec<Product> {
    [
        (1, "Game of Thrones", ProductType::Book, 50, 200.0),
        (2, "Milk", ProductType::Food, 100, 45.0),
        (3, "Camera", ProductType::Gadget, 10, 25_000.0),
        (4, "iPhone", ProductType::Gadget, 2, 50_000.0),
        (5, "Binoculars", ProductType::Other, 10, 12_000.0),
    ]
    .into_iter()
    .map(|(id, name, product_type, inventory, cost)| Product {
        id: ProductId(id),
        name: name.to_string(),
        product_type,
        inventory,
        cost: Some(cost),
    })
    .collect()
}
