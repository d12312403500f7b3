use std::sync::Arc;

use tolk_config::Config;
use tolk_core::SessionContext;
use tolk_translator::{Gateway, GatewayOptions, Translator};
use tolk_types::SessionState;

use crate::backend::build_translator;

/// Everything shared read-only between sessions, built once at startup
pub struct AppState {
    pub config: Config,
    pub gateway: Gateway,
    pub context: SessionContext,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = build_translator(&config.translator)?;
        Self::with_translator(config, translator)
    }

    pub fn with_translator(
        config: Config,
        translator: Arc<dyn Translator>,
    ) -> anyhow::Result<Self> {
        let context = SessionContext::new(config.catalog()?, config.examples()?);
        let gateway = Gateway::new(
            translator,
            GatewayOptions {
                max_length: config.translator.max_length,
            },
        );

        Ok(Self {
            config,
            gateway,
            context,
        })
    }

    pub fn new_session_state(&self) -> SessionState {
        SessionState::new(
            self.config.ui.default_source.clone(),
            self.config.ui.default_target.clone(),
        )
    }
}
