use std::sync::Arc;

use tolk_types::{TranslationOutcome, TranslationRequest, Warning};

use crate::{GenerationOptions, ProviderMetadata, Translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayOptions {
    pub max_length: u32,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self { max_length: 512 }
    }
}

/// Validation and error boundary in front of a translation provider.
///
/// Stateless: one instance is built at startup and shared by every session.
#[derive(Clone)]
pub struct Gateway {
    translator: Arc<dyn Translator>,
    options: GatewayOptions,
}

impl Gateway {
    pub fn new(translator: Arc<dyn Translator>, options: GatewayOptions) -> Self {
        Self {
            translator,
            options,
        }
    }

    pub fn metadata(&self) -> ProviderMetadata {
        self.translator.metadata()
    }

    /// Never fails: warnings and provider errors come back as outcomes
    pub async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome {
        if request.text.trim().is_empty() {
            tracing::debug!("Rejected empty input");
            return TranslationOutcome::Warning(Warning::EmptyText);
        }

        if request.source == request.target {
            tracing::debug!("Rejected identical languages: {}", request.source);
            return TranslationOutcome::Warning(Warning::SameLanguage);
        }

        let options = GenerationOptions {
            max_length: self.options.max_length,
        };

        tracing::debug!(
            "Translating {} chars: {} -> {}",
            request.text.chars().count(),
            request.source,
            request.target
        );

        match self
            .translator
            .translate(&request.text, &request.source, &request.target, &options)
            .await
        {
            Ok(translation) => TranslationOutcome::Translated(translation.text),
            Err(e) => {
                tracing::warn!(
                    "Translation {} -> {} failed: {}",
                    request.source,
                    request.target,
                    e
                );
                TranslationOutcome::Error(e.to_string())
            }
        }
    }
}
