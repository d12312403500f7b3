use serde::{Deserialize, Serialize};
use tolk_core::Example;
use tolk_core::catalog::builtin_options;
use tolk_core::examples::builtin_examples;
use tolk_types::{LanguageCode, LanguageOption};

fn default_title() -> String {
    "🌍 AI Translator".to_string()
}

fn default_source() -> LanguageCode {
    LanguageCode::from("en")
}

fn default_target() -> LanguageCode {
    LanguageCode::from("hi")
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Initial source selection of a new session
    #[serde(default = "default_source")]
    pub default_source: LanguageCode,
    /// Initial target selection of a new session
    #[serde(default = "default_target")]
    pub default_target: LanguageCode,
    #[serde(default = "builtin_options")]
    pub languages: Vec<LanguageOption>,
    #[serde(default = "builtin_examples")]
    pub examples: Vec<Example>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            default_source: default_source(),
            default_target: default_target(),
            languages: builtin_options(),
            examples: builtin_examples(),
        }
    }
}
