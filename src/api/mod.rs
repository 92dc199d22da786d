//! REST API server for Chatsift.
//!
//! Provides HTTP endpoints for:
//! - Transcript normalization
//! - Analysis relay to the configured upstream service
//! - Service info and version

pub mod error;
pub mod routes;

use crate::analysis::AnalysisClient;
use crate::config::Config;
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tracing::info;

/// Dependencies shared by the route handlers. Built once at assembly from
/// config and cloned into each router.
#[derive(Clone)]
pub struct ApiState {
    /// Export format applied when a request does not name one
    pub default_format: String,
    /// Upstream relay client, absent when no endpoint is configured
    pub analysis: Option<AnalysisClient>,
}

pub struct ApiServer {
    port: u16,
    state: ApiState,
}

impl ApiServer {
    pub fn new(config: &Config) -> Result<Self> {
        let analysis = match &config.upstream.endpoint {
            Some(endpoint) => Some(AnalysisClient::new(
                endpoint.clone(),
                config.upstream.timeout_seconds,
            )?),
            None => None,
        };

        Ok(Self {
            port: config.server.port,
            state: ApiState {
                default_format: config.normalizer.format.clone(),
                analysis,
            },
        })
    }

    pub async fn start(self) -> Result<()> {
        let app = Router::new()
            // Root and version endpoints
            .route("/", get(status))
            .route("/version", get(version))
            // Pipeline endpoints
            .nest("/normalize", routes::normalize::router(self.state.clone()))
            .nest("/analyze", routes::analyze::router(self.state))
            .layer(ServiceBuilder::new());

        let listener = tokio::net::TcpListener::bind(&format!("127.0.0.1:{}", self.port)).await?;

        info!("API server listening on http://127.0.0.1:{}", self.port);
        info!("Endpoints:");
        info!("  GET  /              - Service info");
        info!("  GET  /version       - Get version info");
        info!("  POST /normalize     - Clean a raw chat export");
        info!("  POST /analyze       - Clean and relay to the analysis service");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

async fn status() -> Json<Value> {
    Json(json!({
        "service": "chatsift",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "chatsift"
    }))
}
