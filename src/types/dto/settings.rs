use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for changing the admin credentials
///
/// The current username and password must match the stored record before
/// any change is applied. An absent or empty new password keeps the stored
/// one; when present it must match its confirmation.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsForm {
    pub current_username: String,
    pub current_password: String,
    pub username: String,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Response model for the settings screen prefill
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CredentialsView {
    pub username: String,
    pub updated_at: String,
}
