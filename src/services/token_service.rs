use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::errors::internal::InternalError;
use crate::types::domain::{Claims, Role, SessionUser};

/// Issues and validates the bearer tokens carrying the session record
pub struct TokenService {
    secret: String,
    expiration_minutes: i64,
}

impl TokenService {
    pub fn new(secret: String, expiration_minutes: i64) -> Self {
        Self {
            secret,
            expiration_minutes,
        }
    }

    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_minutes * 60
    }

    /// Issue a session token for the given role and user snapshot
    ///
    /// `sub` is the user id for user sessions and the admin username for
    /// admin sessions.
    pub fn issue(
        &self,
        role: Role,
        sub: &str,
        user: Option<SessionUser>,
    ) -> Result<String, InternalError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            role,
            user,
            iat: now,
            exp: now + self.expires_in_seconds(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| InternalError::Token(format!("failed to issue session token: {e}")))
    }

    /// Validate a session token and return its claims
    ///
    /// Expired or malformed tokens come back as `None`; the caller turns
    /// that into its own unauthorized response.
    pub fn validate(&self, token: &str) -> Option<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .ok()
    }
}
