use crate::error::AppError;

/// Minimum HS256 key length, in bytes.
pub const MIN_JWT_KEY_LEN: usize = 32;

/// Longest accepted token lifetime: one year.
pub const MAX_JWT_TTL_MINUTES: i64 = 365 * 24 * 60;

/// Signing configuration for login tokens.
#[derive(Clone)]
pub struct JwtConfig {
    pub key: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

impl JwtConfig {
    /// Read configuration from environment variables.
    ///
    /// - `RESTO_JWT_KEY` (required, at least 32 bytes)
    /// - `RESTO_JWT_ISSUER` (optional, defaults to `resto-api`)
    /// - `RESTO_JWT_AUDIENCE` (optional, defaults to `resto-clients`)
    /// - `RESTO_JWT_TTL_MINUTES` (optional, defaults to 15)
    pub fn from_env() -> Result<Self, AppError> {
        let key = std::env::var("RESTO_JWT_KEY").map_err(|_| {
            AppError::ConfigError("RESTO_JWT_KEY not set. Required to sign login tokens.".into())
        })?;

        let ttl_minutes = match std::env::var("RESTO_JWT_TTL_MINUTES") {
            Err(_) => 15,
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid RESTO_JWT_TTL_MINUTES '{raw}': must be a positive integer"
                ))
            })?,
        };

        let config = Self {
            key,
            issuer: std::env::var("RESTO_JWT_ISSUER").unwrap_or_else(|_| "resto-api".into()),
            audience: std::env::var("RESTO_JWT_AUDIENCE")
                .unwrap_or_else(|_| "resto-clients".into()),
            ttl_minutes,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.key.len() < MIN_JWT_KEY_LEN {
            return Err(AppError::ConfigError(format!(
                "RESTO_JWT_KEY must be at least {MIN_JWT_KEY_LEN} bytes"
            )));
        }
        if !(1..=MAX_JWT_TTL_MINUTES).contains(&self.ttl_minutes) {
            return Err(AppError::ConfigError(format!(
                "RESTO_JWT_TTL_MINUTES must be between 1 and {MAX_JWT_TTL_MINUTES}"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish_non_exhaustive()
    }
}
