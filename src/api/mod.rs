// API layer - HTTP endpoints
//
// Endpoints run the same sequence per screen: session gate, validation,
// service/store call, DTO conversion. Role checks happen here; everything
// below the gate assumes an already-authorized caller.

pub mod announcements;
pub mod auth;
pub mod health;
pub mod reports;
pub mod settings;
pub mod users;

pub use announcements::AnnouncementsApi;
pub use auth::AuthApi;
pub use health::HealthApi;
pub use reports::ReportsApi;
pub use settings::SettingsApi;
pub use users::UsersApi;

use poem_openapi::{auth::Bearer, SecurityScheme};

use crate::errors::ApiError;
use crate::services::TokenService;
use crate::types::domain::{Claims, Role, SessionUser};

/// Bearer token authentication carrying the session record
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct SessionAuth(pub Bearer);

/// Session gate: any valid session
pub(crate) fn require_session(
    token_service: &TokenService,
    auth: &SessionAuth,
) -> Result<Claims, ApiError> {
    token_service
        .validate(&auth.0.token)
        .ok_or_else(ApiError::unauthorized)
}

/// Session gate: admin sessions only
pub(crate) fn require_admin(
    token_service: &TokenService,
    auth: &SessionAuth,
) -> Result<Claims, ApiError> {
    let claims = require_session(token_service, auth)?;
    if claims.role != Role::Admin {
        return Err(ApiError::forbidden());
    }
    Ok(claims)
}

/// Session gate: user sessions only, yielding the official's snapshot
pub(crate) fn require_user(
    token_service: &TokenService,
    auth: &SessionAuth,
) -> Result<SessionUser, ApiError> {
    let claims = require_session(token_service, auth)?;
    if claims.role != Role::User {
        return Err(ApiError::forbidden());
    }
    claims.user.ok_or_else(ApiError::unauthorized)
}
