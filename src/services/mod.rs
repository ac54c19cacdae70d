//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod product;
pub mod user;

// Re-exports per facilitare l'import
pub use auth::{login_user, refresh_token, register_user};
pub use product::{create_product, delete_product, get_product_by_id, list_products, update_product};
pub use user::get_profile;

use crate::AppState;
use crate::core::AppError;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

/// Health check: verifica anche che il database risponda
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "up" })),
        ),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "down" })),
            )
        }
    }
}

/// Fallback per le route non definite
pub async fn not_found(uri: Uri) -> AppError {
    warn!("No route for {}", uri.path());
    AppError::new(StatusCode::NOT_FOUND, "Not Found")
        .with_message("The requested endpoint does not exist")
}
