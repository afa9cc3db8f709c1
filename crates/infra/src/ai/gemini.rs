//! Google Gemini `generateContent` client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use merenda_ai::{AiError, GenerationRequest, TextGenerator};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited")]
    RateLimited,

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("response blocked: {0}")]
    Blocked(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<GeminiError> for AiError {
    fn from(e: GeminiError) -> Self {
        AiError::Provider(e.to_string())
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: SecretString, model: String) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            inner: Arc::new(GeminiClientInner {
                client,
                api_key,
                model,
                base_url: GEMINI_API_BASE.to_string(),
            }),
        })
    }

    /// Point the client at another endpoint (proxy, local stub).
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let inner = &self.inner;
        Self {
            inner: Arc::new(GeminiClientInner {
                client: inner.client.clone(),
                api_key: inner.api_key.clone(),
                model: inner.model.clone(),
                base_url: base_url.into().trim_end_matches('/').to_string(),
            }),
        }
    }

    pub fn model(&self) -> &str {
        &self.inner.model
    }

    #[instrument(skip_all, fields(model = %self.inner.model))]
    pub async fn generate_content(&self, request: &GenerationRequest) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.inner.base_url, self.inner.model
        );

        let response = self
            .inner
            .client
            .post(url)
            .header("x-goog-api-key", self.inner.api_key.expose_secret())
            .json(&ContentRequest::from(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(error_for_status(status, &body));
        }

        let parsed: ContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))?;
        let text = parsed.into_text()?;
        debug!(chars = text.len(), "gemini replied");
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AiError> {
        Ok(self.generate_content(request).await?)
    }
}

fn error_for_status(status: StatusCode, body: &str) -> GeminiError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return GeminiError::RateLimited;
    }

    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return GeminiError::Unauthorized(message);
    }

    GeminiError::Api {
        status: status.as_u16(),
        message,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl From<&GenerationRequest> for ContentRequest {
    fn from(request: &GenerationRequest) -> Self {
        let generation_config = (request.temperature.is_some()
            || request.max_output_tokens.is_some())
        .then_some(GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
        });

        Self {
            contents: vec![Content::text(Some("user"), &request.prompt)],
            system_instruction: request.system.as_deref().map(|s| Content::text(None, s)),
            generation_config,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl ContentResponse {
    fn into_text(self) -> Result<String, GeminiError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GeminiError::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::Parse("response has no candidates".to_string()))?;

        let text: String = candidate
            .content
            .unwrap_or_default()
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
            return Err(GeminiError::Blocked(reason));
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
