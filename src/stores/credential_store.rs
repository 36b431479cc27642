use std::sync::Arc;

use chrono::Utc;

use crate::errors::internal::{CredentialError, InternalError};
use crate::storage::{Collection, StoreAdapter};
use crate::types::domain::credentials::{AdminCredentials, ADMIN_CREDENTIALS_KEY};

/// CredentialStore manages the singleton admin login record
///
/// The record lives in the `config` collection and always exists after the
/// first boot: `ensure_seeded` writes the configured defaults if nothing is
/// stored yet.
pub struct CredentialStore {
    adapter: Arc<dyn StoreAdapter>,
}

impl CredentialStore {
    pub fn new(adapter: Arc<dyn StoreAdapter>) -> Self {
        Self { adapter }
    }

    /// The stored credentials, or `None` before the first seed
    pub async fn get(&self) -> Result<Option<AdminCredentials>, InternalError> {
        let doc = self
            .adapter
            .get(Collection::Config, ADMIN_CREDENTIALS_KEY)
            .await?;
        match doc {
            Some(doc) => {
                let creds: AdminCredentials = serde_json::from_value(doc.value)
                    .map_err(|e| InternalError::decode(Collection::Config, e))?;
                Ok(Some(creds))
            }
            None => Ok(None),
        }
    }

    /// Seed the record with the given hash if it does not exist yet
    ///
    /// Returns true when a seed write happened.
    pub async fn ensure_seeded(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, InternalError> {
        if self.get().await?.is_some() {
            return Ok(false);
        }
        let creds = AdminCredentials {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            updated_at: Utc::now().to_rfc3339(),
        };
        self.put(&creds).await?;
        tracing::info!("seeded admin credentials");
        Ok(true)
    }

    /// Replace the singleton record
    pub async fn put(&self, creds: &AdminCredentials) -> Result<(), InternalError> {
        let value = serde_json::to_value(creds)
            .map_err(|e| InternalError::decode(Collection::Config, e))?;
        self.adapter
            .put(Collection::Config, ADMIN_CREDENTIALS_KEY, value)
            .await?;
        Ok(())
    }

    /// The stored credentials, failing closed when unset
    ///
    /// Admin login uses this: no record means no admin session, reported
    /// with the same generic failure as a bad password.
    pub async fn require(&self) -> Result<AdminCredentials, InternalError> {
        self.get()
            .await?
            .ok_or_else(|| CredentialError::AdminLoginFailed.into())
    }
}
