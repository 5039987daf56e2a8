//! Server host for transport-agnostic API exposure
//!
//! The host holds everything a handler needs: configuration, the record
//! store and the optional chat transport. Exposures (currently REST) borrow
//! it through an `Arc`.

use crate::chat::ChatTransport;
use crate::config::LeadgerConfig;
use crate::core::RecordStore;
use std::sync::Arc;

/// Host context containing all dashboard state
pub struct DashboardHost {
    /// Loaded configuration
    pub config: Arc<LeadgerConfig>,

    /// Source of the result records
    pub record_store: Arc<dyn RecordStore>,

    /// Chat assistant, when configured
    pub chat: Option<Arc<dyn ChatTransport>>,
}

impl DashboardHost {
    pub fn new(config: LeadgerConfig, record_store: Arc<dyn RecordStore>) -> Self {
        Self {
            config: Arc::new(config),
            record_store,
            chat: None,
        }
    }

    /// Attach a chat transport
    pub fn with_chat(mut self, chat: Arc<dyn ChatTransport>) -> Self {
        self.chat = Some(chat);
        self
    }

    pub fn chat_enabled(&self) -> bool {
        self.chat.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatError, ChatRequest, ChatResponse};
    use crate::storage::InMemoryRecordStore;

    struct SilentChat;

    #[async_trait::async_trait]
    impl ChatTransport for SilentChat {
        async fn send(&self, _request: &ChatRequest) -> Result<ChatResponse, ChatError> {
            Ok(ChatResponse::new(""))
        }
    }

    #[test]
    fn test_new_host_has_no_chat() {
        let host = DashboardHost::new(
            LeadgerConfig::default(),
            Arc::new(InMemoryRecordStore::new()),
        );
        assert!(!host.chat_enabled());
        assert_eq!(host.config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn test_with_chat() {
        let host = DashboardHost::new(
            LeadgerConfig::default(),
            Arc::new(InMemoryRecordStore::new()),
        )
        .with_chat(Arc::new(SilentChat));
        assert!(host.chat_enabled());
    }
}
