pub mod echo;
pub mod gateway;

pub use echo::EchoTranslator;
pub use gateway::{Gateway, GatewayOptions};
pub use tolk_types::LanguageCode;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: &LanguageCode,
        to: &LanguageCode,
        options: &GenerationOptions,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Per-call generation limits handed to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub max_length: u32,
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: Option<String>,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Model is loading, retry in about {0:.0}s")]
    ModelLoading(f64),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
