use serde::{Deserialize, Serialize};

/// Key of the singleton credentials document in the `config` collection
pub const ADMIN_CREDENTIALS_KEY: &str = "admin_credentials";

/// Singleton admin login record
///
/// Seeded at first boot if absent and only replaced through the settings
/// flow after the current credentials have been verified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
    /// RFC3339 of the last change
    pub updated_at: String,
}
