//! API key lookup.

use hr_api::ClientConfig;

use crate::error::{AppError, AppResult};

pub const API_KEY_VAR: &str = "SIMSCALE_API_KEY";

#[derive(Clone)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    /// Read the key from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the key through `lookup`; an empty value counts as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        match lookup(API_KEY_VAR) {
            Some(api_key) if !api_key.is_empty() => Ok(Self { api_key }),
            _ => Err(AppError::MissingApiKey { var: API_KEY_VAR }),
        }
    }

    pub fn client_config(&self, base_url: Option<&str>) -> ClientConfig {
        let config = ClientConfig::new(self.api_key.clone());
        match base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
