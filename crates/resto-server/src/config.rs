use resto_core::{AppError, JwtConfig};

const DEFAULT_PORT: u16 = 3000;

/// Server settings read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read `RESTO_SERVER_PORT` (defaults to 3000) and the JWT settings.
    pub fn from_env() -> Result<Self, AppError> {
        let port = parse_port(std::env::var("RESTO_SERVER_PORT").ok().as_deref())?;
        Ok(Self {
            port,
            jwt: JwtConfig::from_env()?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, AppError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse().map_err(|_| {
            AppError::ConfigError(format!("Invalid RESTO_SERVER_PORT '{raw}'"))
        }),
    }
}
