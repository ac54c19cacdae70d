//! User entity - Entità utente con metodi per gestione password

use bcrypt::{hash, verify};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lunghezza minima della password in chiaro
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug)]
pub enum PasswordError {
    TooShort,
    Hash(bcrypt::BcryptError),
}

impl std::fmt::Display for PasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort => write!(
                f,
                "password must be at least {} characters long",
                MIN_PASSWORD_LEN
            ),
            Self::Hash(e) => write!(f, "failed to hash password: {}", e),
        }
    }
}

impl std::error::Error for PasswordError {}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    // l'hash non esce mai dal server
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Proiezione pubblica dell'utente, senza credenziali
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with the given cost.
    /// Passwords shorter than [`MIN_PASSWORD_LEN`] are rejected before hashing.
    pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PasswordError::TooShort);
        }
        hash(password, cost).map_err(PasswordError::Hash)
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

impl From<&User> for PublicUser {
    fn from(value: &User) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            email: value.email.clone(),
            created_at: value.created_at,
        }
    }
}
