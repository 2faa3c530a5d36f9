//! Process configuration.
//!
//! The only required setting is the bot access token, taken from the
//! environment. A missing token is a fatal startup error; the binary logs it
//! and exits nonzero before serving any traffic.

use thiserror::Error;

/// Environment variable holding the bot access token.
pub const TOKEN_ENV: &str = "TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bot token is not set; export the {TOKEN_ENV} environment variable")]
    MissingToken,
}

/// Startup configuration for the bot process.
#[derive(Clone, Debug)]
pub struct BotConfig {
    token: String,
}

impl BotConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => Ok(Self { token }),
            _ => Err(ConfigError::MissingToken),
        }
    }

    /// The access token handed to the platform transport.
    pub fn token(&self) -> &str {
        &self.token
    }
}
