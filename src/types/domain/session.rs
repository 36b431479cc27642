use poem_openapi::Enum;
use serde::{Deserialize, Serialize};

use crate::types::domain::{Position, User};

/// Role carried by a session token
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[oai(rename = "admin")]
    #[serde(rename = "admin")]
    Admin,

    #[oai(rename = "user")]
    #[serde(rename = "user")]
    User,
}

/// Snapshot of the logged-in official embedded in the session
///
/// This is what report submission pre-fills from; it deliberately excludes
/// the password hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub position: Position,
    pub rt: String,
    pub rw: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            full_name: user.full_name.clone(),
            username: user.username.clone(),
            position: user.position,
            rt: user.rt.clone(),
            rw: user.rw.clone(),
        }
    }
}

/// JWT claims forming the minimal session record: role plus user snapshot
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, or the admin username for admin sessions
    pub sub: String,
    pub role: Role,
    /// Present for user sessions only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiration (unix seconds)
    pub exp: i64,
    /// Token id
    pub jti: String,
}
