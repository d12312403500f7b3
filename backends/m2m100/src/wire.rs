//! JSON bodies of the inference endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: Parameters<'a>,
}

#[derive(Debug, Serialize)]
pub struct Parameters<'a> {
    /// Tokenizer input language
    pub src_lang: &'a str,
    /// Language forced as the first generated token
    pub tgt_lang: &'a str,
    pub generate_parameters: GenerateParameters,
}

#[derive(Debug, Serialize)]
pub struct GenerateParameters {
    pub max_length: u32,
}

impl<'a> InferenceRequest<'a> {
    pub fn new(text: &'a str, src_lang: &'a str, tgt_lang: &'a str, max_length: u32) -> Self {
        Self {
            inputs: text,
            parameters: Parameters {
                src_lang,
                tgt_lang,
                generate_parameters: GenerateParameters { max_length },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub translation_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InferenceResponse {
    Batch(Vec<Candidate>),
    Single(Candidate),
}

impl InferenceResponse {
    pub fn into_candidates(self) -> Vec<String> {
        match self {
            InferenceResponse::Batch(candidates) => candidates
                .into_iter()
                .map(|c| c.translation_text)
                .collect(),
            InferenceResponse::Single(candidate) => vec![candidate.translation_text],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: serde_json::Value,
    pub estimated_time: Option<f64>,
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match &self.error {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
                .collect::<Vec<_>>()
                .join("; "),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}
