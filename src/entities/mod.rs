//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database.

pub mod product;
pub mod user;

// Re-exports per facilitare l'import
pub use product::Product;
pub use user::{PublicUser, User};
