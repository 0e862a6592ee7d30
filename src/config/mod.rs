use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::fetch::{FETCH_TIMEOUT, USER_AGENT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// `false` when `APP_ENV=production`.
    pub is_dev: bool,
    pub fetch_timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let fetch_timeout_secs: u64 = parse_var("FETCH_TIMEOUT_SECS", FETCH_TIMEOUT.as_secs())?;
        if fetch_timeout_secs == 0 {
            return Err(ConfigError::Zero {
                var: "FETCH_TIMEOUT_SECS",
            });
        }

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: parse_var("SERVER_PORT", 8080)?,
            is_dev: env::var("APP_ENV").as_deref() != Ok("production"),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            user_agent: env::var("FETCH_USER_AGENT").unwrap_or_else(|_| USER_AGENT.to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}
