use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by a registration or user store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Storage backend error: {0}")]
    Backend(String),
}
