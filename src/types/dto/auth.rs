use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::domain::{Role, SessionUser};

/// Request model for both login paths
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Snapshot of the logged-in official as returned to the client
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SessionUserView {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub position: String,
    pub rt: String,
    pub rw: String,
}

impl From<SessionUser> for SessionUserView {
    fn from(user: SessionUser) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            username: user.username,
            position: user.position.as_str().to_string(),
            rt: user.rt,
            rw: user.rw,
        }
    }
}

/// Response model for a successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token carrying the session record
    pub token: String,
    pub role: Role,
    /// Present for user sessions only
    pub user: Option<SessionUserView>,
    /// Seconds until the session expires
    pub expires_in: i64,
}

/// Response model for the session (whoami) endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub role: Role,
    pub user: Option<SessionUserView>,
    /// Expiration (unix seconds)
    pub expires_at: i64,
}
