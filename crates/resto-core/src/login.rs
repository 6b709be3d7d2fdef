use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::models::{Credentials, User};
use crate::token::JwtKeys;
use crate::traits::UserStore;

/// Message returned for unknown users and wrong passwords alike.
pub const USER_NOT_FOUND: &str = "User not found";

/// Checks credentials against the user store and issues login tokens.
#[derive(Clone)]
pub struct LoginService<U: UserStore> {
    users: U,
    keys: JwtKeys,
}

impl<U: UserStore> LoginService<U> {
    pub fn new(users: U, keys: JwtKeys) -> Self {
        Self { users, keys }
    }

    /// Authenticate and return a signed token.
    ///
    /// The username matches case-insensitively, the password exactly.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AppError> {
        let Some(user) = self.authenticate(credentials).await? else {
            tracing::warn!(username = %credentials.username, "Login rejected");
            return Err(AppError::NotFound(USER_NOT_FOUND.into()));
        };

        let token = self.keys.issue(&user)?;
        tracing::info!(
            username = %user.username,
            expires_in_secs = self.keys.ttl().num_seconds(),
            "Token issued"
        );
        Ok(token)
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<Option<User>, AppError> {
        let user = self.users.find_by_username(&credentials.username).await?;

        Ok(user.filter(|u| {
            bool::from(u.password.as_bytes().ct_eq(credentials.password.as_bytes()))
        }))
    }
}
