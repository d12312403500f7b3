use std::sync::Arc;
use std::time::Duration;

use tolk_config::Provider;
use tolk_config::translator::TranslatorConfig;
use tolk_m2m100::M2m100Translator;
use tolk_translator::{EchoTranslator, Translator};

/// Pick the translation provider named in the config
pub fn build_translator(config: &TranslatorConfig) -> anyhow::Result<Arc<dyn Translator>> {
    let translator: Arc<dyn Translator> = match config.provider {
        Provider::M2m100 => {
            tracing::info!("Using {} at {}", config.model, config.api_url);
            Arc::new(M2m100Translator::new(
                config.api_key.clone(),
                config.api_url.clone(),
                config.model.clone(),
                Duration::from_secs(config.timeout_seconds),
            )?)
        }
        Provider::Echo => {
            tracing::warn!("Echo provider selected, no model will be used");
            Arc::new(EchoTranslator)
        }
    };

    if translator.metadata().requires_api_key && config.api_key.is_empty() {
        tracing::warn!("No API key set (TOLK_API_KEY); requests may be rejected");
    }

    Ok(translator)
}
