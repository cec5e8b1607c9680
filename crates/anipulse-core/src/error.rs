//! Domain-level error types.

use thiserror::Error;

/// Content store errors - every port operation resolves to one of these.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl StoreError {
    /// Shorthand for a missing entity looked up by some key.
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }
}
