use std::sync::Arc;

use crate::errors::internal::{CredentialError, InternalError};
use crate::services::crypto;
use crate::stores::UserStore;
use crate::types::domain::User;
use crate::validation::ValidatedUser;

/// Admin-facing account management
pub struct UserService {
    user_store: Arc<UserStore>,
}

impl UserService {
    pub fn new(user_store: Arc<UserStore>) -> Self {
        Self { user_store }
    }

    pub async fn list(&self) -> Result<Vec<User>, InternalError> {
        self.user_store.list().await
    }

    pub async fn create(&self, validated: ValidatedUser) -> Result<User, InternalError> {
        // Validation guarantees a password in create mode
        let Some(password) = validated.password.clone() else {
            return Err(
                CredentialError::HashingFailed("password missing after validation".into()).into(),
            );
        };
        let password_hash = crypto::hash_password(&password)?;
        self.user_store.create(validated, password_hash).await
    }

    pub async fn update(&self, id: &str, validated: ValidatedUser) -> Result<User, InternalError> {
        let password_hash = match &validated.password {
            Some(password) => Some(crypto::hash_password(password)?),
            None => None,
        };
        self.user_store.update(id, validated, password_hash).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        self.user_store.delete(id).await
    }
}
