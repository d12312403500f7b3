use std::collections::HashSet;

use tolk_types::{LanguageCode, LanguageOption};

use crate::error::CatalogError;

/// Languages offered by the default M2M100 setup, in dropdown order
pub fn builtin_options() -> Vec<LanguageOption> {
    vec![
        LanguageOption::new("🇺🇸 English", "en"),
        LanguageOption::new("🇮🇳 Hindi", "hi"),
        LanguageOption::new("🇫🇷 French", "fr"),
        LanguageOption::new("🇩🇪 German", "de"),
        LanguageOption::new("🇪🇸 Spanish", "es"),
        LanguageOption::new("🇨🇳 Chinese", "zh"),
        LanguageOption::new("🇯🇵 Japanese", "ja"),
        LanguageOption::new("🇰🇷 Korean", "ko"),
    ]
}

/// Fixed, ordered list of selectable languages.
///
/// Built once at startup and shared read-only between sessions.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    options: Vec<LanguageOption>,
}

impl LanguageCatalog {
    pub fn new(options: Vec<LanguageOption>) -> Result<Self, CatalogError> {
        if options.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.code.as_str()) {
                return Err(CatalogError::DuplicateCode(option.code.to_string()));
            }
        }

        Ok(Self { options })
    }

    pub fn builtin() -> Self {
        Self {
            options: builtin_options(),
        }
    }

    pub fn options(&self) -> &[LanguageOption] {
        &self.options
    }

    pub fn contains(&self, code: &LanguageCode) -> bool {
        self.options.iter().any(|option| &option.code == code)
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
