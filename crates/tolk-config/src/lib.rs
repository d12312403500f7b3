use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tolk_core::{CatalogError, ExampleSet, LanguageCatalog};

use self::network::NetworkConfig;
use self::session::SessionConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod network;
pub mod session;
pub mod translator;
pub mod ui;

pub use translator::Provider;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Default {which} language '{code}' is not in the language list")]
    UnknownDefault { which: &'static str, code: String },

    #[error("Unknown translator provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

fn default_quiet() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub ui: UiConfig,
    pub translator: TranslatorConfig,
    pub session: SessionConfig,

    /// Keep startup logging to warnings and errors
    #[serde(default = "default_quiet")]
    pub quiet: bool,
}

impl Config {
    /// Defaults with environment overrides
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Config {
            network: NetworkConfig::new()?,
            ui: UiConfig::default(),
            translator: TranslatorConfig::new()?,
            session: SessionConfig::default(),
            quiet: env_var("TOLK_QUIET")?.unwrap_or_else(default_quiet),
        })
    }

    /// Load a JSON config file on top of `Config::new()`; fields the file
    /// leaves out keep their environment value
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let overrides: Value = serde_json::from_reader(reader)?;
        Self::layered(Self::new()?, overrides)
    }

    /// Apply a (possibly partial) JSON document over `base`
    pub fn layered(base: Config, overrides: Value) -> Result<Self, ConfigError> {
        let mut merged = serde_json::to_value(base)?;
        merge(&mut merged, overrides);
        Ok(serde_json::from_value(merged)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let catalog = self.catalog()?;
        self.examples()?;

        for (which, code) in [
            ("source", &self.ui.default_source),
            ("target", &self.ui.default_target),
        ] {
            if !catalog.contains(code) {
                return Err(ConfigError::UnknownDefault {
                    which,
                    code: code.to_string(),
                });
            }
        }

        if self.translator.max_length == 0 {
            return Err(ConfigError::Zero("translator.max_length"));
        }
        if self.session.max_sessions == 0 {
            return Err(ConfigError::Zero("session.max_sessions"));
        }
        if self.session.channel_capacity == 0 {
            return Err(ConfigError::Zero("session.channel_capacity"));
        }
        if self.session.idle_timeout_seconds == 0 {
            return Err(ConfigError::Zero("session.idle_timeout_seconds"));
        }

        Ok(())
    }

    pub fn catalog(&self) -> Result<LanguageCatalog, ConfigError> {
        Ok(LanguageCatalog::new(self.ui.languages.clone())?)
    }

    pub fn examples(&self) -> Result<ExampleSet, ConfigError> {
        Ok(ExampleSet::new(self.ui.examples.clone())?)
    }
}

/// Read and parse an environment variable; unset means `None`
pub(crate) fn env_var<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
        Err(_) => Ok(None),
    }
}

/// Recursive object merge; anything that is not an object on both sides is replaced
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            network: NetworkConfig::default(),
            ui: UiConfig::default(),
            translator: TranslatorConfig::default(),
            session: SessionConfig::default(),
            quiet: default_quiet(),
        }
    }
}
