//! Chat assistant boundary
//!
//! The dashboard's chat widget posts `{"message": ...}` to an assistant
//! endpoint and renders the `{"answer": ...}` it gets back. This module holds
//! the wire types, the [`ChatTransport`] seam and an HTTP implementation.

use async_trait::async_trait;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest message accepted from the widget
pub const MAX_MESSAGE_LEN: u64 = 2000;

/// Errors raised at the chat boundary
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat message must not be empty")]
    EmptyMessage,

    #[error("Invalid chat message: {0}")]
    Invalid(String),

    #[error("Chat assistant is not configured")]
    NotConfigured,

    #[error("Chat transport failed: {0}")]
    Transport(String),

    #[error("Chat endpoint answered with HTTP {0}")]
    Status(u16),

    #[error("Chat response could not be decoded: {0}")]
    Decode(String),
}

impl ChatError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChatError::EmptyMessage | ChatError::Invalid(_) => StatusCode::BAD_REQUEST,
            ChatError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ChatError::Transport(_) | ChatError::Status(_) | ChatError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ChatError::EmptyMessage => "EMPTY_CHAT_MESSAGE",
            ChatError::Invalid(_) => "INVALID_CHAT_MESSAGE",
            ChatError::NotConfigured => "CHAT_NOT_CONFIGURED",
            ChatError::Transport(_) => "CHAT_TRANSPORT_ERROR",
            ChatError::Status(_) => "CHAT_UPSTREAM_STATUS",
            ChatError::Decode(_) => "CHAT_DECODE_ERROR",
        }
    }
}

/// Message sent to the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(max = MAX_MESSAGE_LEN))]
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Reject blank or oversized messages
    pub fn validated(self) -> Result<Self, ChatError> {
        if self.message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        self.validate()
            .map_err(|e| ChatError::Invalid(e.to_string()))?;
        Ok(self)
    }
}

/// Assistant reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

impl ChatResponse {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }

    /// Answer split into display lines
    pub fn answer_lines(&self) -> Vec<&str> {
        self.answer.lines().collect()
    }

    /// Answer as HTML: escaped, with line breaks as `<br>`
    pub fn answer_html(&self) -> String {
        self.answer_lines()
            .into_iter()
            .map(escape_html)
            .collect::<Vec<_>>()
            .join("<br>")
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Transport to the chat assistant
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one message and wait for the answer
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}

/// Trim and validate `message`, then send it through `transport`
pub async fn ask(transport: &dyn ChatTransport, message: &str) -> Result<ChatResponse, ChatError> {
    let request = ChatRequest::new(message.trim()).validated()?;
    tracing::debug!(len = request.message.len(), "sending chat message");
    transport.send(&request).await
}

#[cfg(feature = "http-chat")]
mod http;

#[cfg(feature = "http-chat")]
pub use http::HttpChatTransport;
