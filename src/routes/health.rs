//! Health check route

use axum::{extract::State, Json};

use crate::db::Database;
use crate::models::{DatabaseHealth, HealthResponse};

/// GET /health - Health check endpoint
pub async fn health_check(State(db): State<Database>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            connected: true,
            path: db.path().display().to_string(),
            size_bytes: db.size_bytes(),
        },
    })
}
