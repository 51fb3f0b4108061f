//! Mock backend for testing.
//!
//! Implements the same `ChatModel`/`ChatSession` seam as the real Gemini
//! adapter, allowing tests at every layer to use the mock instead of real
//! HTTP. The mock records every chat start and sent message so tests can
//! assert exactly how the backend was driven.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::client::{BackendError, ChatModel, ChatSession};

/// Configurable mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Replies returned by successive `send_message` calls.
    pub replies: Vec<String>,
    /// If set, `start_chat` fails with this message.
    pub fail_on_start: Option<String>,
    /// If set, `send_message` fails with this message.
    pub fail_on_send: Option<String>,
    /// Optional delay before each reply (for timing tests).
    pub reply_delay_ms: Option<u64>,
}

impl MockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(mut self, text: impl Into<String>) -> Self {
        self.replies.push(text.into());
        self
    }

    pub fn failing_on_start(mut self, message: impl Into<String>) -> Self {
        self.fail_on_start = Some(message.into());
        self
    }

    pub fn failing_on_send(mut self, message: impl Into<String>) -> Self {
        self.fail_on_send = Some(message.into());
        self
    }

    pub fn with_reply_delay(mut self, ms: u64) -> Self {
        self.reply_delay_ms = Some(ms);
        self
    }
}

/// Everything a `MockModel` has been asked to do.
#[derive(Debug, Default)]
struct CallLog {
    chats_started: usize,
    messages: Vec<String>,
}

/// Mock model handing out scripted chat sessions.
pub struct MockModel {
    config: MockConfig,
    log: Arc<Mutex<CallLog>>,
}

impl MockModel {
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            log: Arc::new(Mutex::new(CallLog::default())),
        }
    }

    /// Number of `start_chat` calls seen, including ones that failed.
    pub fn chats_started(&self) -> usize {
        self.log.lock().expect("mock log poisoned").chats_started
    }

    /// Every message text passed to `send_message`, in order.
    pub fn messages(&self) -> Vec<String> {
        self.log.lock().expect("mock log poisoned").messages.clone()
    }
}

#[async_trait]
impl ChatModel for MockModel {
    type Session = MockChat;

    async fn start_chat(&self) -> Result<MockChat, BackendError> {
        self.log.lock().expect("mock log poisoned").chats_started += 1;

        if let Some(message) = &self.config.fail_on_start {
            return Err(BackendError::Api(message.clone()));
        }

        Ok(MockChat {
            replies: self.config.replies.iter().cloned().collect(),
            fail_on_send: self.config.fail_on_send.clone(),
            reply_delay_ms: self.config.reply_delay_ms,
            log: Arc::clone(&self.log),
        })
    }
}

/// Scripted chat session handed out by `MockModel`.
#[derive(Debug)]
pub struct MockChat {
    replies: VecDeque<String>,
    fail_on_send: Option<String>,
    reply_delay_ms: Option<u64>,
    log: Arc<Mutex<CallLog>>,
}

#[async_trait]
impl ChatSession for MockChat {
    async fn send_message(&mut self, text: &str) -> Result<String, BackendError> {
        self.log
            .lock()
            .expect("mock log poisoned")
            .messages
            .push(text.to_string());

        if let Some(ms) = self.reply_delay_ms {
            sleep(Duration::from_millis(ms)).await;
        }

        if let Some(message) = &self.fail_on_send {
            return Err(BackendError::Api(message.clone()));
        }

        self.replies
            .pop_front()
            .ok_or_else(|| BackendError::Api("mock has no reply configured".to_string()))
    }
}

/// Built-in fixtures for common scenarios.
pub mod fixtures {
    use super::*;

    /// A model that answers every chat with one fixed reply.
    pub fn single_reply(text: &str) -> MockModel {
        MockModel::new(MockConfig::new().with_reply(text))
    }

    /// A model whose session creation fails.
    pub fn start_failure(message: &str) -> MockModel {
        MockModel::new(MockConfig::new().failing_on_start(message))
    }

    /// A model whose sessions open fine but fail on send.
    pub fn send_failure(message: &str) -> MockModel {
        MockModel::new(MockConfig::new().failing_on_send(message))
    }
}
