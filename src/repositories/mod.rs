//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query usano `sqlx::query_as` con binding a runtime: lo schema è definito
//! in `migrations/` e applicato all'avvio con [`MIGRATOR`].

pub mod product;
pub mod traits;
pub mod user;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use product::ProductRepository;
pub use user::UserRepository;

// alias di tipo per il pool, per semplificare lo switch in caso in cui vogliamo usare un altro db
pub type PoolType = SqlitePool;

/// Migrazioni dello schema (tabelle `users` e `products`)
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apre il pool di connessioni e applica le migrazioni pendenti
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PoolType, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    MIGRATOR.run(&pool).await?;
    Ok(pool)
}
