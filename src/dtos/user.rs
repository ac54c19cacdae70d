//! User DTOs - Data Transfer Objects per utenti

use crate::entities::PublicUser;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body di `POST /auth/register`
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RegisterDTO {
    #[validate(length(min = 2, max = 100, message = "name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(
        email(message = "email must be a valid address"),
        length(max = 100, message = "email must be at most 100 characters")
    )]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters long"))]
    pub password: String,
}

impl RegisterDTO {
    pub fn trimmed(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self
    }
}

/// DTO per il login (solo email e password)
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

/// DTO per creare un nuovo utente (password già hashata)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateUserDTO {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisteredDTO {
    pub message: String,
    pub user: PublicUser,
}

/// Risposta di login e refresh
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenDTO {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: PublicUser,
}

impl TokenDTO {
    pub fn bearer(token: String, expires_in: i64, user: PublicUser) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}
