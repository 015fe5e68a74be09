use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("product validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

impl From<ValidationErrors> for DomainError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request on {path}: {message}")]
    BadRequest { message: String, path: String },
    #[error("internal error on {path}: {message}")]
    Internal { message: String, path: String },
}

impl InterfaceError {
    /// Label safe to show to clients. Field-level detail stays in `message`.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Validation failed",
            Self::Internal { .. } => "Internal Server Error",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::BadRequest { path, .. } | Self::Internal { path, .. } => path,
        }
    }
}

impl DomainError {
    pub fn into_interface(self, path: impl Into<String>) -> InterfaceError {
        let path = path.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { path: target, .. }
            | InterfaceError::Internal { path: target, .. } => *target = path,
        }
        mapped
    }
}

impl From<DomainError> for InterfaceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(errors) => {
                Self::BadRequest { message: errors.to_string(), path: "unassigned".to_owned() }
            }
            DomainError::InvariantViolation(message) => {
                Self::BadRequest { message, path: "unassigned".to_owned() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{DomainError, InterfaceError};
    use crate::validation::{validate_product, ProductDraft};

    #[test]
    fn validation_error_maps_to_bad_request_with_path() {
        let errors = validate_product(ProductDraft::default()).expect_err("empty draft");
        let interface = DomainError::from(errors).into_interface("/products");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest { ref path, .. } if path == "/products"
        ));
        assert_eq!(interface.path(), "/products");
    }

    #[test]
    fn bad_request_keeps_detail_out_of_user_message() {
        let errors = validate_product(ProductDraft::default()).expect_err("empty draft");
        let interface = DomainError::from(errors).into_interface("/products");

        assert_eq!(interface.user_message(), "Validation failed");
        assert!(interface.to_string().contains("inventory"));
    }

    #[test]
    fn invariant_violation_maps_to_bad_request() {
        let interface = DomainError::InvariantViolation("unsupported product type".to_owned())
            .into_interface("/products");

        assert!(matches!(interface, InterfaceError::BadRequest { .. }));
    }
}
