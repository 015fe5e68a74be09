//! Product catalog routes.
//!
//! - `GET  /products?type={book|food|gadget|other}`  list products of one type
//! - `POST /products`                                create a product, returns `{"id": n}`
//!
//! Payloads are validated before the store is touched. Every client error
//! answers with the same body shape and never carries field-level detail:
//! rule violations are labelled `Validation failed`, bodies that cannot be
//! decoded at all are labelled `Bad Request`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use storefront_core::{
    domain::product::{Product, ProductType},
    errors::{DomainError, InterfaceError},
    validation::{validate_product, ProductDraft},
};
use storefront_db::{ProductRepository, RepositoryError};
use tracing::{debug, error, info, warn};

pub const PRODUCTS_PATH: &str = "/products";

#[derive(Clone)]
pub struct ProductsState {
    repository: Arc<dyn ProductRepository>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CreatedProduct {
    pub id: usize,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub path: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub fn router(repository: Arc<dyn ProductRepository>) -> Router {
    Router::new()
        .route(PRODUCTS_PATH, get(list_products).post(create_product))
        .with_state(ProductsState { repository })
}

pub async fn list_products(
    State(state): State<ProductsState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        warn!(
            event_name = "catalog.products.query_rejected",
            error = %rejection,
            "product list query could not be decoded"
        );
        error_response(StatusCode::BAD_REQUEST, "Bad Request")
    })?;

    let product_type = parse_type_filter(query.product_type.as_deref())?;
    let products = state.repository.find_all(product_type).await.map_err(repository_error)?;

    info!(
        event_name = "catalog.products.listed",
        product_type = product_type.map(ProductType::as_str).unwrap_or("none"),
        count = products.len(),
        "listed products"
    );
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<ProductsState>,
    payload: Result<Json<ProductDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedProduct>), ApiError> {
    let Json(draft) = payload.map_err(|rejection| {
        warn!(
            event_name = "catalog.products.payload_rejected",
            error = %rejection,
            "product payload could not be decoded"
        );
        error_response(StatusCode::BAD_REQUEST, "Bad Request")
    })?;

    let product = validate_product(draft).map_err(|errors| {
        debug!(
            event_name = "catalog.products.violations",
            violations = %errors,
            "product payload failed validation"
        );
        warn!(
            event_name = "catalog.products.validation_failed",
            violation_count = errors.violations().len(),
            "rejected product payload"
        );
        interface_error(DomainError::from(errors).into_interface(PRODUCTS_PATH))
    })?;

    let product_type = product.product_type;
    let size = state.repository.save(product).await.map_err(repository_error)?;

    info!(
        event_name = "catalog.products.created",
        product_type = product_type.as_str(),
        size,
        "product created"
    );
    Ok((StatusCode::CREATED, Json(CreatedProduct { id: size })))
}

/// An absent or empty `type` parameter leaves the filter unset.
fn parse_type_filter(raw: Option<&str>) -> Result<Option<ProductType>, ApiError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<ProductType>().map(Some).map_err(|error| {
            warn!(
                event_name = "catalog.products.unknown_type",
                error = %error,
                "product list filter is not a known type"
            );
            error_response(StatusCode::BAD_REQUEST, "Bad Request")
        }),
    }
}

fn interface_error(error: InterfaceError) -> ApiError {
    let status = match error {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(error_body(status, error.user_message(), error.path())))
}

fn repository_error(error: RepositoryError) -> ApiError {
    error!(
        event_name = "catalog.products.repository_error",
        error = %error,
        "product repository call failed"
    );
    interface_error(InterfaceError::Internal {
        message: error.to_string(),
        path: PRODUCTS_PATH.to_string(),
    })
}

fn error_response(status: StatusCode, label: &str) -> ApiError {
    (status, Json(error_body(status, label, PRODUCTS_PATH)))
}

fn error_body(status: StatusCode, label: &str, path: &str) -> ErrorBody {
    ErrorBody {
        timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
        status: status.as_u16(),
        error: label.to_string(),
        path: path.to_string(),
    }
}
