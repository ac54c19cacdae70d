#![allow(dead_code)]

use axum_test::TestServer;
use product_api::core::config::MIN_BCRYPT_COST;
use product_api::core::{AppState, AuthSettings};
use product_api::repositories::{MIGRATOR, PoolType};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Pool SQLite in memoria con le migrazioni applicate.
///
/// Una sola connessione mai riciclata: ogni connessione `:memory:` ha il proprio database.
pub async fn create_test_pool() -> PoolType {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Crea un AppState per i test (costo bcrypt minimo per velocità)
pub fn create_test_state(pool: PoolType) -> Arc<AppState> {
    Arc::new(AppState::new(
        pool,
        AuthSettings {
            jwt_secret: JWT_SECRET.to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: MIN_BCRYPT_COST,
        },
    ))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = product_api::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Stato + server pronti, con database vuoto
pub async fn setup() -> (Arc<AppState>, TestServer) {
    let state = create_test_state(create_test_pool().await);
    let server = create_test_server(state.clone());
    (state, server)
}

/// Genera un JWT per testing, con scadenza relativa ad adesso (negativa = già scaduto)
pub fn create_test_jwt(user_id: i64, email: &str, jwt_secret: &str, expires_in_secs: i64) -> String {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    let now = Utc::now().timestamp();
    let claims = json!({
        "sub": user_id,
        "email": email,
        "iat": now,
        "exp": now + expires_in_secs,
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Registra un utente e restituisce il body della risposta
pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> Value {
    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Registra + login, restituisce il token
pub async fn register_and_login(server: &TestServer, email: &str) -> String {
    register(server, "Test User", email, "password123").await;

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": email, "password": "password123" }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["token"]
        .as_str()
        .expect("token missing in login response")
        .to_string()
}
