//! ServerBuilder for fluent API to build the dashboard HTTP server

use super::exposure::RestExposure;
use super::host::DashboardHost;
use crate::chat::ChatTransport;
use crate::config::LeadgerConfig;
use crate::core::RecordStore;
use crate::storage::InMemoryRecordStore;
use anyhow::Result;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the dashboard server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_record_store(InMemoryRecordStore::from_json_file("students.json")?)
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: Option<LeadgerConfig>,
    record_store: Option<Arc<dyn RecordStore>>,
    chat: Option<Arc<dyn ChatTransport>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: None,
            record_store: None,
            chat: None,
            custom_routes: Vec::new(),
        }
    }

    /// Create a builder wired from configuration
    ///
    /// Loads records from `records.path` when the file exists, and builds an
    /// HTTP chat transport when `chat.endpoint` is set.
    pub fn from_config(config: LeadgerConfig) -> Result<Self> {
        config.validate()?;

        let store = match config.records.path.as_deref() {
            Some(path) if Path::new(path).exists() => InMemoryRecordStore::from_json_file(path)?,
            Some(path) => {
                tracing::warn!("Records file {} not found, starting with no records", path);
                InMemoryRecordStore::new()
            }
            None => InMemoryRecordStore::new(),
        };

        let mut builder = Self::new().with_record_store(store);

        #[cfg(feature = "http-chat")]
        if let Some(transport) = crate::chat::HttpChatTransport::from_config(&config.chat)? {
            tracing::info!("Chat relay enabled at {}", transport.endpoint());
            builder = builder.with_chat_transport(transport);
        }

        Ok(builder.with_config(config))
    }

    pub fn with_config(mut self, config: LeadgerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the record store (required)
    pub fn with_record_store(mut self, store: impl RecordStore + 'static) -> Self {
        self.record_store = Some(Arc::new(store));
        self
    }

    /// Set the chat transport
    ///
    /// Without one, `POST /chat` answers 503.
    pub fn with_chat_transport(mut self, transport: impl ChatTransport + 'static) -> Self {
        self.chat = Some(Arc::new(transport));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<DashboardHost> {
        let record_store = self.record_store.take().ok_or_else(|| {
            anyhow::anyhow!("RecordStore is required. Call .with_record_store()")
        })?;

        let config = self.config.take().unwrap_or_default();
        let mut host = DashboardHost::new(config, record_store);

        if let Some(chat) = self.chat.take() {
            host = host.with_chat(chat);
        }

        Ok(host)
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Serve on the address from the configured `server.bind`
    pub async fn serve_configured(self) -> Result<()> {
        let addr = self
            .config
            .as_ref()
            .map(|c| c.server.bind.clone())
            .unwrap_or_else(|| LeadgerConfig::default().server.bind);
        self.serve(&addr).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for a shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
