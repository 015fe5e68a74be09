pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod validation;

pub use catalog::Catalog;
pub use domain::product::{NewProduct, Product, ProductId, ProductType};
pub use errors::{DomainError, InterfaceError};
pub use validation::{validate_product, ProductDraft, ValidationErrors, Violation};
