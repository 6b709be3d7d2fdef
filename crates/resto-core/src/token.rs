use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::AppError;
use crate::models::User;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by a login token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Username (name identifier).
    pub sub: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies login tokens with a symmetric key.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    ttl: TimeDelta,
}

impl JwtKeys {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.key.as_bytes()),
            decoding: DecodingKey::from_secret(config.key.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl: TimeDelta::try_minutes(config.ttl_minutes).unwrap_or(TimeDelta::MAX),
        }
    }

    /// How long an issued token stays valid.
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Issue a token for `user`, valid from now.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, AppError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::TokenError("token expiry is out of range".into()))?;

        let claims = Claims {
            sub: user.username.clone(),
            email: user.email_address.clone(),
            given_name: user.given_name.clone(),
            family_name: user.surname.clone(),
            role: user.role.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding)
            .map_err(|e| AppError::TokenError(e.to_string()))
    }

    /// Check signature, issuer, audience, and lifetime, then return the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(ALGORITHM);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {e}")))
    }
}
