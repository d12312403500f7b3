use async_trait::async_trait;

use crate::{
    GenerationOptions, LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
};

/// Provider that runs no model and describes the request instead
#[derive(Debug, Clone, Default)]
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &LanguageCode,
        to: &LanguageCode,
        _options: &GenerationOptions,
    ) -> Result<Translation, TranslateError> {
        Ok(Translation {
            text: format!("Translated '{text}' to {to}"),
            from: from.clone(),
            to: to.clone(),
            provider: "echo".to_string(),
            alternatives: vec![],
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Echo".to_string(),
            model: None,
            requires_api_key: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echo_describes_the_request() {
        let translation = EchoTranslator
            .translate(
                "Hello",
                &"en".into(),
                &"fr".into(),
                &GenerationOptions { max_length: 512 },
            )
            .await
            .unwrap();

        assert_eq!(translation.text, "Translated 'Hello' to fr");
        assert_eq!(translation.provider, "echo");
    }
}
