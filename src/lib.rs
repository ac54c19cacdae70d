//! Product API - backend REST per prodotti con autenticazione JWT

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, auth};

use axum::{
    Router,
    http::{HeaderName, Method, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::{health_check, not_found};

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", configure_api_routes(state.clone()))
        .fallback(not_found)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Routes `/api/v1`: auth pubbliche + tutto il resto dietro autenticazione
fn configure_api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    configure_public_routes().merge(configure_protected_routes(state))
}

/// Configura le routes di autenticazione (login, register)
fn configure_public_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/auth/register", post(register_user))
        .route("/auth/login", post(login_user))
}

/// Configura le routes che richiedono un token valido
fn configure_protected_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    // route_layer sul MethodRouter: l'auth copre solo i metodi registrati,
    // un metodo non supportato arriva al fallback 404 e non al 401
    let auth = middleware::from_fn_with_state(state, authentication_middleware);

    Router::new()
        .route(
            "/profile",
            get(get_profile)
                .fallback(not_found)
                .route_layer(auth.clone()),
        )
        .route(
            "/auth/refresh",
            post(refresh_token)
                .fallback(not_found)
                .route_layer(auth.clone()),
        )
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .fallback(not_found)
                .route_layer(auth.clone()),
        )
        .route(
            "/products/{id}",
            get(get_product_by_id)
                .put(update_product)
                .delete(delete_product)
                .fallback(not_found)
                .route_layer(auth),
        )
}

fn cors_layer() -> CorsLayer {
    // con le credenziali abilitate l'origin non può essere `*`, quindi viene riflesso
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::POST,
            Method::OPTIONS,
            Method::GET,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
            header::CACHE_CONTROL,
            HeaderName::from_static("x-requested-with"),
        ])
}

/// Risposta 500 JSON per un handler andato in panic
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", details);
    AppError::internal_server_error("Internal server error").into_response()
}
