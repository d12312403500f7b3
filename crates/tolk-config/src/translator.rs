use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, env_var};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// M2M100 served behind an HTTP inference endpoint
    M2m100,
    /// No model: answers with a formatted echo of the request
    Echo,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::M2m100 => f.write_str("m2m100"),
            Provider::Echo => f.write_str("echo"),
        }
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m2m100" => Ok(Provider::M2m100),
            "echo" => Ok(Provider::Echo),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

fn default_provider() -> Provider {
    Provider::M2m100
}

fn default_model() -> String {
    "facebook/m2m100_418M".to_string()
}

fn default_api_url() -> String {
    format!("https://api-inference.huggingface.co/models/{}", default_model())
}

fn default_max_length() -> u32 {
    512
}

fn default_timeout_seconds() -> u64 {
    60
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_provider")]
    pub provider: Provider,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Upper bound on generated tokens per translation
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl TranslatorConfig {
    /// Defaults with `TOLK_PROVIDER`, `TOLK_API_URL` and `TOLK_API_KEY` applied.
    ///
    /// An unknown provider name is an error, the same as for `--provider`.
    pub fn new() -> Result<Self, ConfigError> {
        let provider = env_var("TOLK_PROVIDER")?.unwrap_or_else(default_provider);
        let api_url = env::var("TOLK_API_URL").unwrap_or_else(|_| default_api_url());
        let api_key = env::var("TOLK_API_KEY").unwrap_or_default();

        Ok(Self {
            provider,
            api_url,
            api_key,
            ..Self::default()
        })
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_url: default_api_url(),
            api_key: String::new(),
            max_length: default_max_length(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
