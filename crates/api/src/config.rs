//! Server configuration from the environment.
//!
//! - `MERENDA_BIND_ADDR` - listen address (default: 0.0.0.0:8080)
//! - `MERENDA_ADMIN_USER` / `MERENDA_ADMIN_PASSWORD` - dashboard login
//!
//! Storage and AI settings are documented on [`StoreConfig`] and [`AiConfig`].

use std::net::SocketAddr;

use tracing::warn;

use merenda_infra::config::{ConfigError, lookup_var};
use merenda_infra::{AiConfig, StoreConfig};

use crate::session::AdminCredentials;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEV_ADMIN_USER: &str = "admin";
const DEV_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub admin: AdminCredentials,
    pub store: StoreConfig,
    pub ai: AiConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr =
            lookup_var(&lookup, "MERENDA_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse().map_err(|e| {
            ConfigError::InvalidEnvVar("MERENDA_BIND_ADDR".to_string(), format!("{raw_addr}: {e}"))
        })?;

        let username = lookup_var(&lookup, "MERENDA_ADMIN_USER").unwrap_or_else(|| {
            warn!("MERENDA_ADMIN_USER not set; using dev default");
            DEV_ADMIN_USER.to_string()
        });
        let password = lookup_var(&lookup, "MERENDA_ADMIN_PASSWORD").unwrap_or_else(|| {
            warn!("MERENDA_ADMIN_PASSWORD not set; using insecure dev default");
            DEV_ADMIN_PASSWORD.to_string()
        });

        Ok(Self {
            bind_addr,
            admin: AdminCredentials::new(username, password),
            store: StoreConfig::from_lookup(&lookup)?,
            ai: AiConfig::from_lookup(&lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.admin.matches("admin", "admin123"));
        assert_eq!(config.store.database_url, None);
        assert!(!config.ai.is_enabled());
    }

    #[test]
    fn bad_bind_addr_is_reported() {
        let err = ApiConfig::from_lookup(|name| {
            (name == "MERENDA_BIND_ADDR").then(|| "localhost".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("MERENDA_BIND_ADDR"));
    }
}
