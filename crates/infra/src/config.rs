//! Configuration loaded from environment variables.
//!
//! - `MERENDA_DATABASE_URL` - SQLite URL; unset keeps data in memory
//! - `GEMINI_API_KEY` (or `GOOGLE_API_KEY`) - Gemini API key; unset disables AI
//! - `MERENDA_AI_MODEL` - model id (default: gemini-1.5-flash-latest)

use secrecy::SecretString;
use thiserror::Error;

pub const DEFAULT_AI_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Read a variable, treating blank values as unset.
pub fn lookup_var<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_url: Option<String>,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup_var(&lookup, "MERENDA_DATABASE_URL");
        if let Some(url) = &database_url {
            if !url.starts_with("sqlite:") {
                return Err(ConfigError::InvalidEnvVar(
                    "MERENDA_DATABASE_URL".to_string(),
                    "expected a sqlite: URL".to_string(),
                ));
            }
        }
        Ok(Self { database_url })
    }
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    /// `None` disables the AI routes.
    pub api_key: Option<SecretString>,
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_AI_MODEL.to_string(),
        }
    }
}

impl AiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup_var(&lookup, "GEMINI_API_KEY")
            .or_else(|| lookup_var(&lookup, "GOOGLE_API_KEY"))
            .map(SecretString::from);

        let model = lookup_var(&lookup, "MERENDA_AI_MODEL")
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string());
        if model.contains('/') || model.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidEnvVar(
                "MERENDA_AI_MODEL".to_string(),
                format!("not a model id: {model}"),
            ));
        }

        Ok(Self { api_key, model })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}
