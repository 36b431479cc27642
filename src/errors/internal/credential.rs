use thiserror::Error;

/// Login and credential management failures
///
/// The user login path distinguishes an unknown username from a wrong
/// password; the admin path deliberately reports one generic failure.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("username not found: {0}")]
    UserNotFound(String),

    #[error("wrong password for user")]
    WrongPassword,

    #[error("admin login failed")]
    AdminLoginFailed,

    #[error("current admin credentials do not match")]
    CurrentCredentialsMismatch,

    #[error("username already in use: {0}")]
    DuplicateUsername(String),

    #[error("password hashing failed: {0}")]
    HashingFailed(String),
}
