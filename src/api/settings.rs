use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::{require_admin, SessionAuth};
use crate::errors::ApiError;
use crate::services::{SettingsService, TokenService};
use crate::types::dto::common::MessageResponse;
use crate::types::dto::settings::{CredentialsForm, CredentialsView};
use crate::validation::validate_credentials;

/// Admin settings API
pub struct SettingsApi {
    settings_service: Arc<SettingsService>,
    token_service: Arc<TokenService>,
}

impl SettingsApi {
    pub fn new(settings_service: Arc<SettingsService>, token_service: Arc<TokenService>) -> Self {
        Self {
            settings_service,
            token_service,
        }
    }
}

#[derive(Tags)]
enum SettingsTags {
    /// Admin settings endpoints
    Settings,
}

#[OpenApi(prefix_path = "/settings")]
impl SettingsApi {
    /// The stored admin username, for the settings form prefill
    #[oai(path = "/credentials", method = "get", tag = "SettingsTags::Settings")]
    async fn current(&self, auth: SessionAuth) -> Result<Json<CredentialsView>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let creds = self.settings_service.current().await?;
        Ok(Json(CredentialsView {
            username: creds.username,
            updated_at: creds.updated_at,
        }))
    }

    /// Change the admin credentials
    ///
    /// The submitted current username/password must match the stored record
    /// before anything changes; an empty new password keeps the stored one.
    #[oai(path = "/credentials", method = "put", tag = "SettingsTags::Settings")]
    async fn change(
        &self,
        auth: SessionAuth,
        body: Json<CredentialsForm>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let validated = validate_credentials(&body.0)?;
        self.settings_service.change_credentials(validated).await?;
        Ok(Json(MessageResponse {
            message: "Username dan password admin berhasil diperbarui.".to_string(),
        }))
    }
}
