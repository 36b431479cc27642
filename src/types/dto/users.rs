use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::domain::{Position, User};

/// Submitted user form, for both create and edit
///
/// On edit, an absent or empty password keeps the stored one.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct UserForm {
    pub full_name: String,
    pub username: String,
    pub password: Option<String>,
    pub position: Position,
    pub rt: String,
    pub rw: String,
}

/// User record as shown in the manage-users table; never carries the hash
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserView {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub position: Position,
    pub rt: String,
    pub rw: String,
    pub created_at: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            username: user.username,
            position: user.position,
            rt: user.rt,
            rw: user.rw,
            created_at: user.created_at,
        }
    }
}

/// Response model for user list
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserView>,
}
