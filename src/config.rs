//! Runtime configuration for the task server.
//!
//! Settings come from environment variables:
//!
//! - `TASKS_BIND_ADDR`: socket address to listen on (default `0.0.0.0:8080`)
//! - `DATABASE_URL`: `PostgreSQL` connection string; when unset the server
//!   keeps tasks in memory
//! - `TASKS_DB_POOL_SIZE`: maximum pooled connections (default 8)

use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;
use thiserror::Error;

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "TASKS_BIND_ADDR";
/// Environment variable naming the database connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable naming the connection pool size.
pub const POOL_SIZE_VAR: &str = "TASKS_DB_POOL_SIZE";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while reading server configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The listen address could not be parsed.
    #[error("invalid TASKS_BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        /// Raw configured value.
        value: String,
        /// Parse failure.
        source: AddrParseError,
    },

    /// The pool size is not a positive integer.
    #[error("invalid TASKS_DB_POOL_SIZE '{value}', expected a positive integer")]
    InvalidPoolSize {
        /// Raw configured value.
        value: String,
        /// Parse failure, absent when the value parsed as zero.
        source: Option<ParseIntError>,
    },
}

/// Task server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// `PostgreSQL` connection string, if persistence is configured.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unparseable
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unparseable
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let raw_addr = read(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let pool_size = read(POOL_SIZE_VAR)
            .map_or(Ok(DEFAULT_POOL_SIZE), |raw| parse_pool_size(&raw))?;

        Ok(Self {
            bind_addr,
            database_url: read(DATABASE_URL_VAR),
            pool_size,
        })
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.parse::<u32>() {
        Ok(0) => Err(ConfigError::InvalidPoolSize {
            value: raw.to_owned(),
            source: None,
        }),
        Ok(size) => Ok(size),
        Err(err) => Err(ConfigError::InvalidPoolSize {
            value: raw.to_owned(),
            source: Some(err),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{BIND_ADDR_VAR, ConfigError, DATABASE_URL_VAR, POOL_SIZE_VAR, ServerConfig};
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() -> eyre::Result<()> {
        let config = config_from(&[])?;
        eyre::ensure!(config.bind_addr.to_string() == "0.0.0.0:8080", "bind addr");
        eyre::ensure!(config.database_url.is_none(), "database url");
        eyre::ensure!(config.pool_size == 8, "pool size");
        Ok(())
    }

    #[test]
    fn explicit_values_override_defaults() -> eyre::Result<()> {
        let config = config_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:3000"),
            (DATABASE_URL_VAR, "postgres://tasks@localhost/tasks"),
            (POOL_SIZE_VAR, "2"),
        ])?;
        eyre::ensure!(config.bind_addr.to_string() == "127.0.0.1:3000", "bind addr");
        eyre::ensure!(
            config.database_url.as_deref() == Some("postgres://tasks@localhost/tasks"),
            "database url"
        );
        eyre::ensure!(config.pool_size == 2, "pool size");
        Ok(())
    }

    #[test]
    fn blank_database_url_means_in_memory() -> eyre::Result<()> {
        let config = config_from(&[(DATABASE_URL_VAR, "   ")])?;
        eyre::ensure!(config.database_url.is_none(), "blank url should be ignored");
        Ok(())
    }

    #[test]
    fn unparseable_bind_addr_is_rejected() {
        let result = config_from(&[(BIND_ADDR_VAR, "localhost")]);
        assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("many")]
    fn invalid_pool_sizes_are_rejected(#[case] raw: &str) {
        let result = config_from(&[(POOL_SIZE_VAR, raw)]);
        assert!(matches!(result, Err(ConfigError::InvalidPoolSize { .. })));
    }
}
