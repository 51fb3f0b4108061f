//! The backend seam: chat traits and the shared error type.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API error: {0}")]
    Api(String),
}

/// A generative-language model that can open chat sessions.
///
/// Callers treat the backend as an opaque capability: start a chat, send
/// one message, read back the reply text. Everything else (wire format,
/// auth, endpoints) stays inside the implementation.
#[async_trait]
pub trait ChatModel {
    type Session: ChatSession + Send;

    async fn start_chat(&self) -> Result<Self::Session, BackendError>;
}

/// A stateful handle to one conversation with the model.
#[async_trait]
pub trait ChatSession {
    /// Send one message and return the model's reply text.
    async fn send_message(&mut self, text: &str) -> Result<String, BackendError>;
}
