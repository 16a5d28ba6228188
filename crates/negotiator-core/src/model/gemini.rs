//! Gemini `generateContent` REST client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GenerationSettings;
use crate::error::ModelError;
use crate::model::traits::TextModel;

/// Default API base; tests point this at a local mock server.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// How much of an error body to keep in the error message.
const ERROR_BODY_EXCERPT_CHARS: usize = 300;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// One named Gemini model behind the REST API.
pub struct GeminiModel {
    client: Client,
    model: String,
    api_key: String,
    base_url: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl GeminiModel {
    /// Create a client for a named model.
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE.to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Override the API base URL (mock servers, regional endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Apply user-configured generation settings.
    pub fn with_generation(mut self, settings: &GenerationSettings) -> Self {
        self.temperature = settings.temperature;
        self.max_output_tokens = settings.max_output_tokens;
        self
    }

    fn generation_config(&self) -> Option<GenerationConfig> {
        if self.temperature.is_none() && self.max_output_tokens.is_none() {
            return None;
        }
        Some(GenerationConfig {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        })
    }

    fn transport(&self, source: reqwest::Error) -> ModelError {
        ModelError::Transport {
            model: self.model.clone(),
            source,
        }
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    fn id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: self.generation_config(),
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                model: self.model.clone(),
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let raw = response.text().await.map_err(|e| self.transport(e))?;
        let parsed: GenerateResponse =
            serde_json::from_str(&raw).map_err(|e| ModelError::Decode {
                model: self.model.clone(),
                message: e.to_string(),
            })?;

        let text: String = parsed
            .candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            return Err(ModelError::EmptyResponse {
                model: self.model.clone(),
            });
        }

        Ok(text)
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= ERROR_BODY_EXCERPT_CHARS {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(ERROR_BODY_EXCERPT_CHARS).collect();
        format!("{cut}...")
    }
}
