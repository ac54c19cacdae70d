//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod product;
pub mod query;
pub mod user;

// Re-exports per facilitare l'import
pub use product::{CreateProductDTO, CreateProductRequest, UpdateProductDTO};
pub use query::ProductQuery;
pub use user::{CreateUserDTO, LoginDTO, RegisterDTO, RegisteredDTO, TokenDTO};

use serde::{Deserialize, Serialize};

/// Risposta generica con solo messaggio
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageDTO {
    pub message: String,
}

impl MessageDTO {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
