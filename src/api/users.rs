use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::api::{require_admin, SessionAuth};
use crate::errors::ApiError;
use crate::services::{TokenService, UserService};
use crate::types::dto::common::MessageResponse;
use crate::types::dto::users::{UserForm, UserListResponse, UserView};
use crate::validation::{validate_user, UserFormMode};

/// Manage-users API, admin only
pub struct UsersApi {
    user_service: Arc<UserService>,
    token_service: Arc<TokenService>,
}

impl UsersApi {
    pub fn new(user_service: Arc<UserService>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_service,
            token_service,
        }
    }
}

#[derive(Tags)]
enum UserTags {
    /// User management endpoints
    Users,
}

#[OpenApi]
impl UsersApi {
    /// List every official account
    #[oai(path = "/users", method = "get", tag = "UserTags::Users")]
    async fn list(&self, auth: SessionAuth) -> Result<Json<UserListResponse>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let users = self.user_service.list().await?;
        Ok(Json(UserListResponse {
            users: users.into_iter().map(UserView::from).collect(),
        }))
    }

    /// Create an account
    #[oai(path = "/users", method = "post", tag = "UserTags::Users")]
    async fn create(
        &self,
        auth: SessionAuth,
        body: Json<UserForm>,
    ) -> Result<Json<UserView>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let validated = validate_user(&body.0, UserFormMode::Create)?;
        let user = self.user_service.create(validated).await?;
        Ok(Json(UserView::from(user)))
    }

    /// Edit an account; an empty password keeps the stored one
    #[oai(path = "/users/:id", method = "put", tag = "UserTags::Users")]
    async fn update(
        &self,
        auth: SessionAuth,
        id: Path<String>,
        body: Json<UserForm>,
    ) -> Result<Json<UserView>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let validated = validate_user(&body.0, UserFormMode::Edit)?;
        let user = self.user_service.update(&id.0, validated).await?;
        Ok(Json(UserView::from(user)))
    }

    /// Delete an account
    ///
    /// Idempotent; reports the account submitted stay readable.
    #[oai(path = "/users/:id", method = "delete", tag = "UserTags::Users")]
    async fn delete(
        &self,
        auth: SessionAuth,
        id: Path<String>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        self.user_service.delete(&id.0).await?;
        Ok(Json(MessageResponse {
            message: "Pengguna telah berhasil dihapus.".to_string(),
        }))
    }
}
