use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Quick example button: `key` is the button label, `text` the sentence it fills in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub key: String,
    pub text: String,
}

impl Example {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

pub fn builtin_examples() -> Vec<Example> {
    vec![
        Example::new("👋 Hello World", "Hello World"),
        Example::new("🌟 Good Morning", "Good morning! How are you today?"),
        Example::new("❤️ Thank You", "Thank you very much for your help!"),
        Example::new(
            "🌍 How are you?",
            "How are you? I hope you're having a great day!",
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct ExampleSet {
    entries: Vec<Example>,
}

impl ExampleSet {
    pub fn new(entries: Vec<Example>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.key.is_empty() {
                return Err(CatalogError::EmptyExampleKey);
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateExample(entry.key.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn builtin() -> Self {
        Self {
            entries: builtin_examples(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Sentence for `key`, or `key` itself when there is no such example
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.text.as_str())
            .unwrap_or(key)
    }
}

impl Default for ExampleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
