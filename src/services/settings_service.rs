use std::sync::Arc;

use chrono::Utc;

use crate::errors::internal::{CredentialError, InternalError};
use crate::services::crypto;
use crate::stores::CredentialStore;
use crate::types::domain::AdminCredentials;
use crate::validation::ValidatedCredentials;

/// Admin settings: changing the singleton login credentials
pub struct SettingsService {
    credential_store: Arc<CredentialStore>,
}

impl SettingsService {
    pub fn new(credential_store: Arc<CredentialStore>) -> Self {
        Self { credential_store }
    }

    /// The stored credentials for the settings screen prefill
    pub async fn current(&self) -> Result<AdminCredentials, InternalError> {
        self.credential_store
            .get()
            .await?
            .ok_or_else(|| CredentialError::CurrentCredentialsMismatch.into())
    }

    /// Replace the admin credentials
    ///
    /// The submitted current username/password must verify against the
    /// stored record before anything is written. A validated form without a
    /// new password keeps the stored hash.
    pub async fn change_credentials(
        &self,
        validated: ValidatedCredentials,
    ) -> Result<AdminCredentials, InternalError> {
        let stored = self.current().await?;

        let current_ok = validated.current_username == stored.username
            && crypto::verify_password(&validated.current_password, &stored.password_hash);
        if !current_ok {
            return Err(CredentialError::CurrentCredentialsMismatch.into());
        }

        let password_hash = match &validated.password {
            Some(password) => crypto::hash_password(password)?,
            None => stored.password_hash,
        };

        let creds = AdminCredentials {
            username: validated.username,
            password_hash,
            updated_at: Utc::now().to_rfc3339(),
        };
        self.credential_store.put(&creds).await?;
        tracing::info!("admin credentials updated");
        Ok(creds)
    }
}
