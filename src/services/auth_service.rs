use std::sync::Arc;

use crate::errors::internal::{CredentialError, InternalError};
use crate::services::{crypto, TokenService};
use crate::stores::{CredentialStore, UserStore};
use crate::types::domain::{Role, SessionUser};

/// Result of a successful login: the bearer token plus what it encodes
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub role: Role,
    pub user: Option<SessionUser>,
    pub expires_in: i64,
}

/// Authentication service covering both login paths
///
/// The user path looks the username up first, so an unknown username and a
/// wrong password produce distinct failures. The admin path checks against
/// the singleton credentials record and reports one generic failure,
/// failing closed when the record is unset.
pub struct AuthService {
    user_store: Arc<UserStore>,
    credential_store: Arc<CredentialStore>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        user_store: Arc<UserStore>,
        credential_store: Arc<CredentialStore>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_store,
            credential_store,
            token_service,
        }
    }

    /// Log an official in by username and password
    ///
    /// Matches are iterated in store order and the first password hit wins,
    /// so accounts predating write-time uniqueness enforcement still log in.
    pub async fn login_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, InternalError> {
        let matches = self.user_store.find_by_username(username).await?;
        if matches.is_empty() {
            return Err(CredentialError::UserNotFound(username.to_string()).into());
        }

        for user in &matches {
            if crypto::verify_password(password, &user.password_hash) {
                let snapshot = SessionUser::from(user);
                let token =
                    self.token_service
                        .issue(Role::User, &user.id, Some(snapshot.clone()))?;
                tracing::info!(user_id = %user.id, "user logged in");
                return Ok(LoginOutcome {
                    token,
                    role: Role::User,
                    user: Some(snapshot),
                    expires_in: self.token_service.expires_in_seconds(),
                });
            }
        }

        Err(CredentialError::WrongPassword.into())
    }

    /// Log the admin in against the singleton credentials record
    pub async fn login_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, InternalError> {
        let creds = self.credential_store.require().await?;

        if username != creds.username || !crypto::verify_password(password, &creds.password_hash) {
            return Err(CredentialError::AdminLoginFailed.into());
        }

        let token = self.token_service.issue(Role::Admin, &creds.username, None)?;
        tracing::info!("admin logged in");
        Ok(LoginOutcome {
            token,
            role: Role::Admin,
            user: None,
            expires_in: self.token_service.expires_in_seconds(),
        })
    }
}
