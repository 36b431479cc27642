use std::sync::Arc;

use chrono::Utc;

use crate::errors::internal::{CredentialError, InternalError};
use crate::storage::{Collection, Document, StoreAdapter};
use crate::types::domain::User;
use crate::validation::ValidatedUser;

/// UserStore manages the official accounts an admin can administer
pub struct UserStore {
    adapter: Arc<dyn StoreAdapter>,
}

impl UserStore {
    pub fn new(adapter: Arc<dyn StoreAdapter>) -> Self {
        Self { adapter }
    }

    fn decode(doc: Document) -> Result<User, InternalError> {
        let id = doc.id;
        let mut user: User = serde_json::from_value(doc.value)
            .map_err(|e| InternalError::decode(Collection::Users, e))?;
        if user.id.is_empty() {
            user.id = id;
        }
        Ok(user)
    }

    /// All accounts, most recently created first
    pub async fn list(&self) -> Result<Vec<User>, InternalError> {
        let docs = self.adapter.get_all(Collection::Users).await?;
        let mut users = docs
            .into_iter()
            .map(Self::decode)
            .collect::<Result<Vec<_>, _>>()?;
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    pub async fn get(&self, id: &str) -> Result<Option<User>, InternalError> {
        let doc = self.adapter.get(Collection::Users, id).await?;
        doc.map(Self::decode).transpose()
    }

    /// Every account carrying this username, in store order
    ///
    /// Login iterates the matches and takes the first password hit, which
    /// keeps pre-existing duplicate data authenticating even though new
    /// duplicates are refused at write time.
    pub async fn find_by_username(&self, username: &str) -> Result<Vec<User>, InternalError> {
        let users = self.list().await?;
        Ok(users
            .into_iter()
            .filter(|u| u.username == username)
            .collect())
    }

    async fn username_in_use(
        &self,
        username: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, InternalError> {
        let users = self.list().await?;
        Ok(users
            .iter()
            .any(|u| u.username == username && Some(u.id.as_str()) != exclude_id))
    }

    /// Create an account from a validated form and a pre-hashed password
    pub async fn create(
        &self,
        validated: ValidatedUser,
        password_hash: String,
    ) -> Result<User, InternalError> {
        if self.username_in_use(&validated.username, None).await? {
            return Err(CredentialError::DuplicateUsername(validated.username).into());
        }

        let user = User {
            id: String::new(),
            full_name: validated.full_name,
            username: validated.username,
            password_hash,
            position: validated.position,
            rt: validated.rt,
            rw: validated.rw,
            created_at: Utc::now().to_rfc3339(),
        };
        let value =
            serde_json::to_value(&user).map_err(|e| InternalError::decode(Collection::Users, e))?;
        let doc = self.adapter.create(Collection::Users, value).await?;
        Self::decode(doc)
    }

    /// Replace an account from a validated form
    ///
    /// `password_hash` of `None` keeps the stored hash (the blank-password
    /// edit path).
    pub async fn update(
        &self,
        id: &str,
        validated: ValidatedUser,
        password_hash: Option<String>,
    ) -> Result<User, InternalError> {
        let existing = self
            .get(id)
            .await?
            .ok_or_else(|| InternalError::not_found(Collection::Users, id))?;

        if self.username_in_use(&validated.username, Some(id)).await? {
            return Err(CredentialError::DuplicateUsername(validated.username).into());
        }

        let user = User {
            id: existing.id.clone(),
            full_name: validated.full_name,
            username: validated.username,
            password_hash: password_hash.unwrap_or(existing.password_hash),
            position: validated.position,
            rt: validated.rt,
            rw: validated.rw,
            created_at: existing.created_at,
        };
        let value =
            serde_json::to_value(&user).map_err(|e| InternalError::decode(Collection::Users, e))?;
        let doc = self.adapter.put(Collection::Users, id, value).await?;
        Self::decode(doc)
    }

    /// Idempotent delete; reports submitted by the account are untouched
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        self.adapter.remove(Collection::Users, id).await?;
        Ok(())
    }
}
