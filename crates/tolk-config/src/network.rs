use std::env;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, env_var};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_open_browser() -> bool {
    true
}

/// Where the browser front-end listens
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Open the page in the default browser once the server is bound
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

impl NetworkConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let host = env::var("TOLK_HOST").unwrap_or_else(|_| default_host());
        let port = env_var("TOLK_PORT")?.unwrap_or_else(default_port);

        Ok(Self {
            host,
            port,
            open_browser: default_open_browser(),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open_browser: default_open_browser(),
        }
    }
}
