//! Application State - Stato globale dell'applicazione

use crate::core::auth::AuthSettings;
use crate::repositories::{PoolType, ProductRepository, UserRepository};

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Pool condiviso, usato direttamente solo dall'health check
    pub pool: PoolType,

    /// Repository per la gestione degli utenti
    pub user: UserRepository,

    /// Repository per la gestione dei prodotti
    pub product: ProductRepository,

    /// Secret JWT, durata dei token e costo bcrypt
    pub auth: AuthSettings,
}

impl AppState {
    pub fn new(pool: PoolType, auth: AuthSettings) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            product: ProductRepository::new(pool.clone()),
            pool,
            auth,
        }
    }
}
