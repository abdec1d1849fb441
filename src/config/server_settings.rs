use std::fmt;
use std::net::IpAddr;

use crate::config::errors::ApplicationError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://trails.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "6000";
pub const DEFAULT_JWT_EXPIRATION_SECONDS: &str = "3600000";

/// Infrastructure settings needed before the server can start
pub struct ServerSettings {
    database_url: String,
    server_host: IpAddr,
    server_port: u16,
    jwt_expiration_seconds: i64,
}

impl ServerSettings {
    /// Load settings from the given environment, applying defaults for unset values
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ApplicationError> {
        let database_url = env.get_var_or("DATABASE_URL", DEFAULT_DATABASE_URL);
        if database_url.trim().is_empty() {
            return Err(ApplicationError::InvalidSetting {
                setting_name: "DATABASE_URL".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let server_host = parse_host(&env.get_var_or("HOST", DEFAULT_HOST), "HOST")?;
        let server_port = parse_port(&env.get_var_or("PORT", DEFAULT_PORT), "PORT")?;
        let jwt_expiration_seconds = parse_positive_seconds(
            &env.get_var_or("JWT_EXPIRATION_SECONDS", DEFAULT_JWT_EXPIRATION_SECONDS),
            "JWT_EXPIRATION_SECONDS",
        )?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            jwt_expiration_seconds,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(&SystemEnvironment)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> IpAddr {
        self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn jwt_expiration_seconds(&self) -> i64 {
        self.jwt_expiration_seconds
    }

    pub fn server_address(&self) -> String {
        match self.server_host {
            IpAddr::V4(host) => format!("{}:{}", host, self.server_port),
            IpAddr::V6(host) => format!("[{}]:{}", host, self.server_port),
        }
    }
}

fn parse_host(value: &str, setting_name: &str) -> Result<IpAddr, ApplicationError> {
    value
        .trim()
        .parse::<IpAddr>()
        .map_err(|e| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("Expected IP address, got '{}': {}", value, e),
        })
}

fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
    let port = value
        .trim()
        .parse::<u16>()
        .map_err(|e| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("Expected port number (1-65535), got '{}': {}", value, e),
        })?;

    if port == 0 {
        return Err(ApplicationError::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: "Port number must be between 1 and 65535".to_string(),
        });
    }

    Ok(port)
}

fn parse_positive_seconds(value: &str, setting_name: &str) -> Result<i64, ApplicationError> {
    let seconds = value
        .trim()
        .parse::<i64>()
        .map_err(|e| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("Expected number of seconds, got '{}': {}", value, e),
        })?;

    if seconds <= 0 {
        return Err(ApplicationError::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: "must be a positive number of seconds".to_string(),
        });
    }

    Ok(seconds)
}

impl fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("jwt_expiration_seconds", &self.jwt_expiration_seconds)
            .finish()
    }
}
