use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tolk_translator::{
    GenerationOptions, LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
};

use crate::wire::{ErrorBody, InferenceRequest, InferenceResponse};

/// M2M100 many-to-many model behind an HTTP inference endpoint
#[derive(Clone)]
pub struct M2m100Translator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl M2m100Translator {
    pub fn new(
        api_key: String,
        api_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            api_url,
            model,
        })
    }
}

#[async_trait]
impl Translator for M2m100Translator {
    async fn translate(
        &self,
        text: &str,
        from: &LanguageCode,
        to: &LanguageCode,
        options: &GenerationOptions,
    ) -> Result<Translation, TranslateError> {
        let body = InferenceRequest::new(text, from.as_str(), to.as_str(), options.max_length);

        let mut request = self.client.post(&self.api_url).json(&body);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TranslateError::AuthenticationError);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let parsed = serde_json::from_str::<ErrorBody>(&raw).ok();

            if status == StatusCode::SERVICE_UNAVAILABLE {
                if let Some(seconds) = parsed.as_ref().and_then(|b| b.estimated_time) {
                    return Err(TranslateError::ModelLoading(seconds));
                }
            }

            let detail = parsed.map(|b| b.message()).unwrap_or(raw);
            tracing::debug!("Inference endpoint returned {}: {}", status, detail);

            return Err(TranslateError::ApiError(if detail.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {detail}")
            }));
        }

        let parsed: InferenceResponse = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let mut candidates = parsed.into_candidates().into_iter();
        let text = candidates
            .next()
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

        Ok(Translation {
            text,
            from: from.clone(),
            to: to.clone(),
            provider: "m2m100".to_string(),
            alternatives: candidates.collect(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "M2M100".to_string(),
            model: Some(self.model.clone()),
            requires_api_key: true,
        }
    }
}
