use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::{require_session, SessionAuth};
use crate::errors::{ApiError, AuthError};
use crate::services::{AuthService, TokenService};
use crate::types::dto::auth::{LoginRequest, LoginResponse, SessionResponse};
use crate::types::dto::common::MessageResponse;

/// Authentication API: both login paths plus session introspection
pub struct AuthApi {
    auth_service: Arc<AuthService>,
    token_service: Arc<TokenService>,
}

impl AuthApi {
    pub fn new(auth_service: Arc<AuthService>, token_service: Arc<TokenService>) -> Self {
        Self {
            auth_service,
            token_service,
        }
    }
}

#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Log in as an RT/RW official
    ///
    /// An unknown username and a wrong password fail with distinct
    /// messages. When duplicate usernames exist in older data, the first
    /// account whose password matches wins.
    #[oai(path = "/login/user", method = "post", tag = "AuthTags::Authentication")]
    async fn login_user(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
        let outcome = self
            .auth_service
            .login_user(&body.username, &body.password)
            .await?;

        Ok(Json(LoginResponse {
            token: outcome.token,
            role: outcome.role,
            user: outcome.user.map(Into::into),
            expires_in: outcome.expires_in,
        }))
    }

    /// Log in as the admin
    ///
    /// Fails with one generic message whether the username or the password
    /// is wrong, and fails closed when no credentials record exists.
    #[oai(path = "/login/admin", method = "post", tag = "AuthTags::Authentication")]
    async fn login_admin(
        &self,
        body: Json<LoginRequest>,
    ) -> Result<Json<LoginResponse>, AuthError> {
        let outcome = self
            .auth_service
            .login_admin(&body.username, &body.password)
            .await?;

        Ok(Json(LoginResponse {
            token: outcome.token,
            role: outcome.role,
            user: outcome.user.map(Into::into),
            expires_in: outcome.expires_in,
        }))
    }

    /// The session record behind the presented token
    #[oai(path = "/session", method = "get", tag = "AuthTags::Authentication")]
    async fn session(&self, auth: SessionAuth) -> Result<Json<SessionResponse>, ApiError> {
        let claims = require_session(&self.token_service, &auth)?;
        Ok(Json(SessionResponse {
            role: claims.role,
            user: claims.user.map(Into::into),
            expires_at: claims.exp,
        }))
    }

    /// End the session
    ///
    /// Tokens are stateless; a logout acknowledges the request and the
    /// client discards its session record.
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(&self, auth: SessionAuth) -> Result<Json<MessageResponse>, ApiError> {
        require_session(&self.token_service, &auth)?;
        Ok(Json(MessageResponse {
            message: "Berhasil keluar.".to_string(),
        }))
    }
}
