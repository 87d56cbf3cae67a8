//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use quill_core::ports::PostRepository;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /api/health - 503 while the store is unreachable.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match state.posts.ping().await {
        Ok(()) => "up",
        Err(err) => {
            tracing::warn!(error = %err, "Health check: database unreachable");
            "down"
        }
    };

    let response = HealthResponse {
        status: if database == "up" { "ok" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if database == "up" {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
