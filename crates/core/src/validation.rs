//! Field validation for product create payloads.
//!
//! Each field has its own check; `validate_product` runs all of them and
//! collects every violation before a `NewProduct` is built. Nothing here
//! touches the catalog, so a rejected payload never reaches the store.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::product::{NewProduct, ProductType};

pub const INVENTORY_MIN: i64 = 1;
pub const INVENTORY_MAX: i64 = 9999;

const RESERVED_NAME_PREFIXES: [&str; 3] = ["true", "false", "null"];

/// Raw create payload. Every field is optional so that missing values show
/// up as violations instead of decode failures.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductDraft {
    /// Accepted for wire compatibility; the store assigns ids.
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    pub inventory: Option<i64>,
    pub cost: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|violation| violation.field == field)
    }

    fn record(&mut self, result: Result<(), Violation>) {
        if let Err(violation) = result {
            self.violations.push(violation);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .violations
            .iter()
            .map(|violation| format!("{}: {}", violation.field, violation.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

fn letters_only() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z]+$").expect("valid name pattern"))
}

/// Name must be non-empty ASCII letters and must not start with a reserved
/// JSON literal. The reserved check is a case-sensitive prefix match, so
/// `nullable` is rejected while `Null` is accepted.
pub fn validate_name(name: Option<&str>) -> Result<(), Violation> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(Violation::new("name", "Name cannot be empty")),
    };

    let reserved = RESERVED_NAME_PREFIXES.iter().any(|prefix| name.starts_with(prefix));
    if reserved || !letters_only().is_match(name) {
        return Err(Violation::new("name", "should be a string"));
    }

    Ok(())
}

pub fn validate_inventory(inventory: Option<i64>) -> Result<(), Violation> {
    match inventory {
        None => Err(Violation::new("inventory", "must not be null")),
        Some(value) if value < INVENTORY_MIN => Err(Violation::new(
            "inventory",
            format!("must be greater than or equal to {INVENTORY_MIN}"),
        )),
        Some(value) if value > INVENTORY_MAX => Err(Violation::new(
            "inventory",
            format!("must be less than or equal to {INVENTORY_MAX}"),
        )),
        Some(_) => Ok(()),
    }
}

pub fn validate_type(product_type: Option<ProductType>) -> Result<(), Violation> {
    product_type.map(|_| ()).ok_or_else(|| Violation::new("type", "must not be null"))
}

pub fn validate_product(draft: ProductDraft) -> Result<NewProduct, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.record(validate_name(draft.name.as_deref()));
    errors.record(validate_type(draft.product_type));
    errors.record(validate_inventory(draft.inventory));

    match (draft.name, draft.product_type, draft.inventory) {
        (Some(name), Some(product_type), Some(inventory)) if errors.is_empty() => {
            let inventory = u32::try_from(inventory).map_err(|_| ValidationErrors {
                violations: vec![Violation::new("inventory", "out of range")],
            })?;
            Ok(NewProduct { name, product_type, inventory, cost: draft.cost })
        }
        _ => Err(errors),
    }
}
