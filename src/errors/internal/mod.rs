use thiserror::Error;

pub mod credential;
pub mod report;
pub mod validation;

pub use credential::CredentialError;
pub use report::ReportError;
pub use validation::{FieldError, FieldErrors, ValidationError};

use crate::storage::{Collection, StoreError};

/// Internal error type for store and service operations
///
/// Not exposed over the API - endpoints convert to `ApiError` or
/// `AuthError` at the boundary.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("record {id} not found in {collection}")]
    NotFound { collection: Collection, id: String },

    #[error("session token error: {0}")]
    Token(String),

    #[error("failed to decode {collection} record: {message}")]
    Decode {
        collection: Collection,
        message: String,
    },
}

impl InternalError {
    pub fn not_found(collection: Collection, id: &str) -> Self {
        InternalError::NotFound {
            collection,
            id: id.to_string(),
        }
    }

    pub fn decode(collection: Collection, source: serde_json::Error) -> Self {
        InternalError::Decode {
            collection,
            message: source.to_string(),
        }
    }
}
