use crate::core::{AppError, AppState};
use crate::entities::User;
use crate::repositories::Read;
use axum::extract::State;
use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, Response, header},
    middleware::Next,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Parametri per token e password, derivati dalla configurazione
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

impl AuthSettings {
    pub fn token_ttl(&self) -> Result<Duration, AppError> {
        Duration::try_hours(self.token_ttl_hours).ok_or_else(|| {
            error!("Token lifetime out of range: {}h", self.token_ttl_hours);
            AppError::internal_server_error("Token generation failed")
        })
    }

    pub fn token_ttl_secs(&self) -> Result<i64, AppError> {
        Ok(self.token_ttl()?.num_seconds())
    }
}

// contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,   // user id
    pub email: String,
    pub iat: usize, // Issued at time of the token
    pub exp: usize, // Expiry time of the token
}

#[instrument(skip(user, settings), fields(user_id = %user.id))]
pub fn encode_jwt(user: &User, settings: &AuthSettings) -> Result<String, AppError> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let exp = now
        .checked_add_signed(settings.token_ttl()?)
        .ok_or_else(|| {
            error!("Token expiry out of range");
            AppError::internal_server_error("Token generation failed")
        })?
        .timestamp() as usize;
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        iat: now.timestamp() as usize,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        AppError::internal_server_error("Token generation failed")
    })
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(
    jwt_token: &str,
    secret: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    debug!("Decoding JWT token");
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
}

/// Estrae il token dall'header `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized("Authorization header is required"))?
        .to_str()
        .map_err(|_| AppError::unauthorized("Invalid authorization header format"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Authorization header must use the Bearer scheme"))?
        .trim();

    if token.is_empty() {
        return Err(AppError::unauthorized("Bearer token is empty"));
    }
    Ok(token)
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let token = bearer_token(req.headers()).inspect_err(|_| {
        warn!("Missing or malformed authorization header");
    })?;

    let token_data = decode_jwt(token, &state.auth.jwt_secret).map_err(|e| {
        warn!("Failed to decode JWT token: {:?}", e);
        AppError::from(e)
    })?;

    // l'utente potrebbe essere stato rimosso dopo l'emissione del token
    let current_user = match state.user.read(&token_data.claims.sub).await? {
        Some(user) => {
            info!("User authenticated: {}", user.id);
            user
        }
        None => {
            warn!("User not found in database: {}", token_data.claims.sub);
            return Err(AppError::unauthorized("You are not an authorized user"));
        }
    };
    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MIN_BCRYPT_COST;
    use axum::http::{HeaderValue, StatusCode};

    fn settings() -> AuthSettings {
        AuthSettings {
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: MIN_BCRYPT_COST,
        }
    }

    fn user() -> User {
        let now = Utc::now();
        User {
            id: 42,
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let token = encode_jwt(&user(), &settings()).unwrap();
        let data = decode_jwt(&token, "test-secret").unwrap();
        assert_eq!(data.claims.sub, 42);
        assert_eq!(data.claims.email, "alice@example.com");
        assert!(data.claims.exp > data.claims.iat);
    }

    #[test]
    fn test_encode_with_out_of_range_lifetime() {
        let settings = AuthSettings {
            token_ttl_hours: 10_000_000_000_000,
            ..settings()
        };
        let err = encode_jwt(&user(), &settings).unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(settings.token_ttl_secs().is_err());
    }

    #[test]
    fn test_token_ttl_secs() {
        assert_eq!(settings().token_ttl_secs().unwrap(), 24 * 60 * 60);
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let token = encode_jwt(&user(), &settings()).unwrap();
        let err = decode_jwt(&token, "other-secret").unwrap_err();
        assert_eq!(AppError::from(err).status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer   "));
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def");
    }
}
