//! HTTP chat transport backed by reqwest

use super::{ChatError, ChatRequest, ChatResponse, ChatTransport};
use crate::config::ChatConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Posts chat messages as JSON to a configured endpoint
#[derive(Clone)]
pub struct HttpChatTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Build a transport from config; `None` when no endpoint is configured
    pub fn from_config(config: &ChatConfig) -> Result<Option<Self>, ChatError> {
        config
            .endpoint
            .as_ref()
            .map(|endpoint| Self::new(endpoint.clone(), Duration::from_secs(config.timeout_secs)))
            .transpose()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, status = status.as_u16(), "chat endpoint rejected message");
            return Err(ChatError::Status(status.as_u16()));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }
}
