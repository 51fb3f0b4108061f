//! Google Gemini API client.

use std::time::Duration;

use async_trait::async_trait;
use pc_protocol::{ChatMessage, Role};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::{BackendError, ChatModel, ChatSession};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini API client.
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: Client,
}

/// Build an HTTP client with appropriate timeouts and connection limits.
fn build_http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(2)
        .build()
        .expect("failed to build HTTP client")
}

impl GeminiClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            http: build_http_client(),
        }
    }

    /// Create a new client with a custom model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            http: build_http_client(),
        }
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    type Session = GeminiChat;

    async fn start_chat(&self) -> Result<GeminiChat, BackendError> {
        Ok(GeminiChat {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            http: self.http.clone(),
            history: Vec::new(),
        })
    }
}

/// One conversation with a Gemini model.
///
/// The API itself is stateless; the session keeps the turn history and
/// replays it on every send, the way the official SDK chat handles do.
pub struct GeminiChat {
    api_key: String,
    model: String,
    http: Client,
    history: Vec<ChatMessage>,
}

#[async_trait]
impl ChatSession for GeminiChat {
    async fn send_message(&mut self, text: &str) -> Result<String, BackendError> {
        self.history.push(ChatMessage::user(text));

        let body = build_request(&self.history);
        let url = format!("{API_BASE}/{}:generateContent", self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api(format!("{status}: {body}")));
        }

        let resp: GenerateResponse = response.json().await?;
        let reply = extract_text(resp)?;
        self.history.push(ChatMessage::model(reply.clone()));
        Ok(reply)
    }
}

fn build_request(history: &[ChatMessage]) -> GenerateRequest {
    GenerateRequest {
        contents: history.iter().map(api_content).collect(),
    }
}

fn api_content(msg: &ChatMessage) -> ApiContent {
    let role = match msg.role {
        Role::User => "user",
        Role::Model => "model",
    };
    ApiContent {
        role: role.to_string(),
        parts: vec![ApiPart {
            text: msg.text.clone(),
        }],
    }
}

/// Pull the reply text out of a response.
///
/// A safety-blocked prompt comes back with no candidates at all, so both
/// the missing-candidate and the empty-parts cases map to an API error.
fn extract_text(resp: GenerateResponse) -> Result<String, BackendError> {
    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::Api("no candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        return Err(BackendError::Api("no text content in response".to_string()));
    }
    Ok(text)
}

// API request/response types

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<ApiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiContent {
    role: String,
    parts: Vec<ApiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidate {
    content: ApiContent,
}
