//! Job Notification Server
//!
//! Exposes the latest scraped job notifications and the exam-update
//! subscription stub over a small REST API using Axum.

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use common::JobNotification;
use common::observability::{LogFormat, init_logging};
use jobfeed_scraper::{Extractor, ExtractorConfig};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

/// Server settings; read from the same `JOBFEED__*` sources as the extractor.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ServerConfig {
    bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
        }
    }
}

/// Body of POST /api/subscribe
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeRequest {
    email: Option<String>,
    exam_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct SubscribeResponse {
    message: &'static str,
    success: bool,
}

/// Shared application state
struct AppState {
    extractor: Extractor,
}

/// Handler for GET /api/jobs
///
/// Always 200: an extraction failure shows up as an empty array.
async fn jobs_handler(State(state): State<Arc<AppState>>) -> Json<Vec<JobNotification>> {
    Json(state.extractor.fetch_latest_jobs().await)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Handler for POST /api/subscribe
///
/// Validates the address and logs the request; nothing is stored.
async fn subscribe_handler(payload: Result<Json<SubscribeRequest>, JsonRejection>) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(e) => {
            tracing::error!(error = %e, "subscription error");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
        }
    };

    let Some(email) = request.email.filter(|email| email.contains('@')) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid email address");
    };

    tracing::info!(%email, exam = request.exam_name.as_deref().unwrap_or(""), "new subscription");

    Json(SubscribeResponse {
        message: "Subscription successful",
        success: true,
    })
    .into_response()
}

/// Handler for GET / (root)
async fn root_handler() -> &'static str {
    "📰 Job Notification API\n\nEndpoints:\n  GET  /api/jobs      - Latest job notifications\n  POST /api/subscribe - Subscribe to exam updates\n\nExample:\n  curl 'http://127.0.0.1:3000/api/jobs'"
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/jobs", get(jobs_handler))
        .route("/api/subscribe", post(subscribe_handler))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging("info", LogFormat::from_env()).context("failed to initialise logging")?;
    println!("🚀 Starting Job Notification Server...\n");

    let config_file = std::env::var_os("JOBFEED_CONFIG").map(PathBuf::from);
    let server_config: ServerConfig =
        common::settings::load(config_file.as_deref()).context("failed to load server config")?;
    let extractor_config =
        ExtractorConfig::load(config_file.as_deref()).context("failed to load extractor config")?;

    println!("📡 Source: {}", extractor_config.source_url);

    let extractor = Extractor::new(extractor_config).context("failed to build HTTP client")?;
    let state = Arc::new(AppState { extractor });

    // Start server
    let addr = server_config.bind_addr;
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    println!("🌐 Server running at http://{}", addr);
    println!("   Try: curl 'http://{}/api/jobs'\n", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
