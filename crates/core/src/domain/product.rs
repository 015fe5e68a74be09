use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Book,
    Food,
    Gadget,
    Other,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [Self::Book, Self::Food, Self::Gadget, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Food => "food",
            Self::Gadget => "gadget",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = DomainError;

    // Case-sensitive: `Book` is not a product type.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value).ok_or_else(|| {
            DomainError::InvariantViolation(format!(
                "unsupported product type `{value}` (expected book|food|gadget|other)"
            ))
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub inventory: u32,
    pub cost: Option<f64>,
}

/// A create payload that has passed validation but has no id yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub product_type: ProductType,
    pub inventory: u32,
    pub cost: Option<f64>,
}

impl NewProduct {
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            product_type: self.product_type,
            inventory: self.inventory,
            cost: self.cost,
        }
    }
}
