//! REST API exposure for the dashboard
//!
//! The REST exposure consumes a `DashboardHost` and produces an Axum `Router`.

pub mod handlers;

use super::super::host::DashboardHost;
use anyhow::Result;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Record filtering, lookup and ledger replacement
    /// - Table sorting
    /// - Statistics, optionally narrowed to a seat list
    /// - Subject listing and per-subject analysis
    /// - Chat relay and report links
    /// - Custom routes
    pub fn build_router(host: Arc<DashboardHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let api_routes = Router::new()
            .route(
                "/records",
                get(handlers::list_records).put(handlers::replace_records),
            )
            .route("/records/{id}", get(handlers::get_record))
            .route("/table/sort", post(handlers::sort_table))
            .route("/stats", get(handlers::get_stats))
            .route("/chat", post(handlers::post_chat))
            .route("/subjects", get(handlers::list_subjects))
            .route(
                "/subjects/{code}/analysis",
                get(handlers::subject_analysis_report),
            )
            .route("/subjects/{code}/report-link", get(handlers::report_link))
            .with_state(host);

        let mut app = Self::health_routes().merge(api_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "leadger"
        }))
    }
}
