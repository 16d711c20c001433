use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// A single rejected input field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    #[schema(example = "studentName")]
    pub field: &'static str,
    #[schema(example = "Full name is required")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("A registration already exists for this student. Each student can only register once.")]
    Duplicate,

    #[error("Registration {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Storage(#[from] StoreError),
}
