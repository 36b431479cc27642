// Errors layer - internal error types and their API-facing conversions

pub mod api;
pub mod internal;

pub use api::{ApiError, AuthError};
pub use internal::{CredentialError, InternalError, ValidationError};
