use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::config::ProviderSettings;
use crate::errors::AnalyzerError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system", content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user", content: content.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl ChatRequest {
    pub fn new(settings: &ProviderSettings, system_prompt: String, user_message: String) -> Self {
        Self {
            model: settings.model.clone(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(user_message)],
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            top_p: settings.top_p,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// A chat-completion backend. `Ok(None)` means the call succeeded but
/// produced no text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<Option<String>, AnalyzerError>;
}

pub struct PerplexityClient {
    http: Client,
    base_url: String,
}

impl PerplexityClient {
    pub fn new(settings: &ProviderSettings) -> Result<Self, AnalyzerError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AnalyzerError::Provider(e.to_string()))?;
        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionProvider for PerplexityClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<Option<String>, AnalyzerError> {
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalyzerError::Timeout
                } else {
                    AnalyzerError::Provider(e.to_string())
                }
            })?;

        let status = response.status();
        if let Some(err) = status_error(status) {
            let body = response.text().await.unwrap_or_default();
            match err {
                AnalyzerError::Provider(_) => error!(%status, %body, "provider call failed"),
                _ => warn!(%status, %body, "provider refused request"),
            }
            return Err(err);
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerError::Provider(format!("undecodable response: {}", e)))?;

        Ok(first_content(body))
    }
}

fn status_error(status: StatusCode) -> Option<AnalyzerError> {
    match status {
        StatusCode::UNAUTHORIZED => Some(AnalyzerError::Unauthorized),
        StatusCode::TOO_MANY_REQUESTS => Some(AnalyzerError::UpstreamRateLimited),
        s if !s.is_success() => Some(AnalyzerError::Provider(format!("upstream status {}", s))),
        _ => None,
    }
}

fn first_content(body: ChatResponse) -> Option<String> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|text| !text.is_empty())
}
