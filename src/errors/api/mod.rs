use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

use crate::errors::internal::{CredentialError, InternalError, ReportError, ValidationError};

/// Standardized error body returned by every failing endpoint
#[derive(Object, Debug)]
pub struct ErrorBody {
    /// Error code identifier
    pub error: String,

    /// Human-readable message, in the application's language
    pub message: String,
}

/// One field-level validation message
#[derive(Object, Debug)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

/// Error body for rejected form submissions
#[derive(Object, Debug)]
pub struct ValidationErrorBody {
    pub error: String,
    pub message: String,
    pub fields: Vec<FieldErrorBody>,
}

/// Login endpoint failures
///
/// The user path distinguishes unknown-username from wrong-password; the
/// admin path reports one generic message and fails closed when no
/// credentials record exists.
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Username not present in the user repository
    #[oai(status = 401)]
    UserNotFound(Json<ErrorBody>),

    /// Username found but the password does not match
    #[oai(status = 401)]
    WrongPassword(Json<ErrorBody>),

    /// Generic admin login failure
    #[oai(status = 401)]
    AdminLoginFailed(Json<ErrorBody>),

    /// Login could not be attempted
    #[oai(status = 500)]
    Internal(Json<ErrorBody>),
}

impl AuthError {
    pub fn user_not_found() -> Self {
        AuthError::UserNotFound(Json(ErrorBody {
            error: "user_not_found".to_string(),
            message: "Username pengguna tidak ditemukan.".to_string(),
        }))
    }

    pub fn wrong_password() -> Self {
        AuthError::WrongPassword(Json(ErrorBody {
            error: "wrong_password".to_string(),
            message: "Password pengguna salah.".to_string(),
        }))
    }

    pub fn admin_login_failed() -> Self {
        AuthError::AdminLoginFailed(Json(ErrorBody {
            error: "admin_login_failed".to_string(),
            message: "Username atau password admin salah.".to_string(),
        }))
    }

    pub fn internal() -> Self {
        AuthError::Internal(Json(ErrorBody {
            error: "internal_error".to_string(),
            message: "Gagal melakukan login. Silakan coba lagi.".to_string(),
        }))
    }
}

impl From<InternalError> for AuthError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Credential(CredentialError::UserNotFound(_)) => {
                AuthError::user_not_found()
            }
            InternalError::Credential(CredentialError::WrongPassword) => {
                AuthError::wrong_password()
            }
            InternalError::Credential(CredentialError::AdminLoginFailed) => {
                AuthError::admin_login_failed()
            }
            other => {
                tracing::error!(error = %other, "login failed internally");
                AuthError::internal()
            }
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match self {
            AuthError::UserNotFound(json)
            | AuthError::WrongPassword(json)
            | AuthError::AdminLoginFailed(json)
            | AuthError::Internal(json) => &json.0,
        };
        write!(f, "{}", body.message)
    }
}

/// Failures of the protected CRUD endpoints
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Session token missing, invalid, or expired
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// Session valid but the role may not perform this action
    #[oai(status = 403)]
    Forbidden(Json<ErrorBody>),

    /// Addressed record does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// Write conflicts with an existing record
    #[oai(status = 409)]
    Conflict(Json<ErrorBody>),

    /// Submitted form failed validation; no store interaction happened
    #[oai(status = 422)]
    Unprocessable(Json<ValidationErrorBody>),

    /// Persistent store unreachable; the caller keeps its current state
    #[oai(status = 503)]
    StoreUnavailable(Json<ErrorBody>),

    /// Unexpected server failure
    #[oai(status = 500)]
    Internal(Json<ErrorBody>),
}

impl ApiError {
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(Json(ErrorBody {
            error: "unauthorized".to_string(),
            message: "Sesi tidak valid. Silakan login kembali.".to_string(),
        }))
    }

    pub fn forbidden() -> Self {
        ApiError::Forbidden(Json(ErrorBody {
            error: "forbidden".to_string(),
            message: "Anda tidak memiliki akses untuk tindakan ini.".to_string(),
        }))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(Json(ErrorBody {
            error: "not_found".to_string(),
            message: message.into(),
        }))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(Json(ErrorBody {
            error: "conflict".to_string(),
            message: message.into(),
        }))
    }

    pub fn store_unavailable() -> Self {
        ApiError::StoreUnavailable(Json(ErrorBody {
            error: "store_unavailable".to_string(),
            message: "Terjadi kesalahan saat mengakses penyimpanan data.".to_string(),
        }))
    }

    pub fn internal() -> Self {
        ApiError::Internal(Json(ErrorBody {
            error: "internal_error".to_string(),
            message: "Terjadi kesalahan pada server.".to_string(),
        }))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Unprocessable(Json(ValidationErrorBody {
            error: "validation_failed".to_string(),
            message: "Periksa kembali isian formulir Anda.".to_string(),
            fields: err
                .fields
                .into_iter()
                .map(|f| FieldErrorBody {
                    field: f.field.to_string(),
                    message: f.message,
                })
                .collect(),
        }))
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Store(store_err) => {
                tracing::error!(error = %store_err, "store operation failed");
                ApiError::store_unavailable()
            }
            InternalError::NotFound { .. } => ApiError::not_found("Data tidak ditemukan."),
            InternalError::Credential(CredentialError::DuplicateUsername(_)) => {
                ApiError::conflict("Username sudah digunakan.")
            }
            InternalError::Credential(CredentialError::CurrentCredentialsMismatch) => {
                ApiError::Unauthorized(Json(ErrorBody {
                    error: "current_credentials_mismatch".to_string(),
                    message: "Username atau password saat ini salah.".to_string(),
                }))
            }
            InternalError::Credential(other) => {
                tracing::error!(error = %other, "credential operation failed");
                ApiError::unauthorized()
            }
            InternalError::Report(ReportError::NotOwner(_)) => ApiError::forbidden(),
            InternalError::Report(ReportError::NotEditable(_)) => {
                ApiError::conflict("Laporan ini sudah ditinjau dan tidak dapat diubah lagi.")
            }
            InternalError::Token(message) => {
                tracing::error!(error = %message, "session token operation failed");
                ApiError::internal()
            }
            InternalError::Decode { .. } => {
                tracing::error!(error = %err, "stored record could not be decoded");
                ApiError::internal()
            }
        }
    }
}
