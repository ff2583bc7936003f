//! Server configuration.
//!
//! [`ServerConfig`] is read once at startup from environment variables. Every
//! field has a default so the server runs with no configuration at all.
//!
//! | Variable                    | Default   |
//! |-----------------------------|-----------|
//! | `HOST`                      | `0.0.0.0` |
//! | `PORT`                      | `3000`    |
//! | `ROVER_STRICT_INSTRUCTIONS` | `false`   |
//! | `ROVER_MAX_BODY_BYTES`      | `65536`   |

use thiserror::Error;

use crate::rover::InstructionPolicy;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Handling of instruction characters other than `L`, `R` and `M`.
    pub instruction_policy: InstructionPolicy,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            instruction_policy: InstructionPolicy::Ignore,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_value("PORT", &port)?;
        }
        if let Some(strict) = lookup("ROVER_STRICT_INSTRUCTIONS") {
            config.instruction_policy = if parse_flag("ROVER_STRICT_INSTRUCTIONS", &strict)? {
                InstructionPolicy::Reject
            } else {
                InstructionPolicy::Ignore
            };
        }
        if let Some(limit) = lookup("ROVER_MAX_BODY_BYTES") {
            config.max_body_bytes = parse_value("ROVER_MAX_BODY_BYTES", &limit)?;
        }

        Ok(config)
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
