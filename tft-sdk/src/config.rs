use std::time::Duration;

use crate::{Error, Result};

pub const API_KEY_VAR: &str = "TFT_RIOT_API_KEY";
pub const TIMEOUT_VAR: &str = "TFT_RIOT_TIMEOUT_SECS";

/// Settings for the default HTTP transport.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    /// Whole-request timeout applied by the HTTP client. `None` disables it.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            timeout: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads `TFT_RIOT_API_KEY` (required) and `TFT_RIOT_TIMEOUT_SECS` (optional).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{API_KEY_VAR} not set")))?;

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(secs) => {
                let secs: u64 = secs.trim().parse().map_err(|_| {
                    Error::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds"))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key: api_key.trim().to_string(),
            timeout,
        })
    }
}
