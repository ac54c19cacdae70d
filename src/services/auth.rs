//! Auth services - Gestione autenticazione e registrazione utenti

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, LoginDTO, RegisterDTO, RegisteredDTO, TokenDTO};
use crate::entities::User;
use crate::repositories::Create;
use axum::{
    Extension,
    extract::{Json, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

fn issue_token(state: &AppState, user: User) -> Result<TokenDTO, AppError> {
    let token = encode_jwt(&user, &state.auth)?;
    Ok(TokenDTO::bearer(
        token,
        state.auth.token_ttl_secs()?,
        user.to_public(),
    ))
}

#[instrument(skip(state, payload))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterDTO>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisteredDTO>), AppError> {
    let Json(body) = payload?;
    let body = body.trimmed();
    body.validate()?;

    if state.user.find_by_email(&body.email).await?.is_some() {
        warn!("Email already registered");
        return Err(AppError::conflict("Email already registered"));
    }

    let password = User::hash_password(&body.password, state.auth.bcrypt_cost)?;

    let new_user = CreateUserDTO {
        name: body.name,
        email: body.email,
        password,
    };

    let created = state.user.create(&new_user).await.map_err(|e| match e {
        // registrazione concorrente con la stessa email
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::conflict("Email already registered")
        }
        other => AppError::database("Registration failed", other),
    })?;

    info!("User {} registered", created.id);
    Ok((
        StatusCode::CREATED,
        Json(RegisteredDTO {
            message: "User registered successfully".to_string(),
            user: created.to_public(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginDTO>, JsonRejection>,
) -> Result<Json<TokenDTO>, AppError> {
    let Json(body) = payload?;
    debug!("Login attempt");

    let user = match state.user.find_by_email(body.email.trim()).await? {
        Some(user) => user,
        None => {
            warn!("Login with unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Wrong password for user {}", user.id);
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    info!("User {} logged in", user.id);
    Ok(Json(issue_token(&state, user)?))
}

/// Rilascia un nuovo token per l'utente già autenticato
#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<TokenDTO>, AppError> {
    info!("Refreshing token");
    Ok(Json(issue_token(&state, current_user)?))
}
