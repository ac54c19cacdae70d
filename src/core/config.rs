use crate::core::auth::AuthSettings;
use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

const INSECURE_JWT_SECRET: &str = "un segreto meno bello";

/// Limiti del costo bcrypt (la crate non li esporta)
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Durata massima di un token: un anno
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

fn parse_expiration_hours(raw: &str) -> Result<i64, String> {
    raw.parse::<i64>()
        .ok()
        .filter(|h| (1..=MAX_EXPIRATION_HOURS).contains(h))
        .ok_or_else(|| {
            format!(
                "Invalid JWT_EXPIRATION_HOURS: must be between 1 and {}",
                MAX_EXPIRATION_HOURS
            )
        })
}

fn parse_bcrypt_cost(raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .ok()
        .filter(|c| (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(c))
        .ok_or_else(|| {
            format!(
                "Invalid BCRYPT_COST: must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            )
        })
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://products.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using default (not secure for production!)");
            INSECURE_JWT_SECRET.to_string()
        });

        let jwt_expiration_hours = parse_expiration_hours(
            &env::var("JWT_EXPIRATION_HOURS").unwrap_or_else(|_| "24".to_string()),
        )?;

        let bcrypt_cost = match env::var("BCRYPT_COST") {
            Ok(raw) => parse_bcrypt_cost(&raw)?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_expiration_hours,
            bcrypt_cost,
            server_host,
            server_port,
            max_connections,
            app_env,
        })
    }

    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            jwt_secret: self.jwt_secret.clone(),
            token_ttl_hours: self.jwt_expiration_hours,
            bcrypt_cost: self.bcrypt_cost,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}", self.bind_address());
        info!("   Database: {}", Self::mask_url(&self.database_url));
        info!("   Max DB Connections: {}", self.max_connections);
        info!("   Token Lifetime: {}h", self.jwt_expiration_hours);
        info!("   Bcrypt Cost: {}", self.bcrypt_cost);
        if self.jwt_secret == INSECURE_JWT_SECRET {
            warn!("   JWT Secret: USING DEFAULT (INSECURE!)");
        } else {
            info!("   JWT Secret: custom secret configured");
        }
    }

    /// Maschera le credenziali nell'URL del database per il logging
    fn mask_url(url: &str) -> String {
        match (url.find("://"), url.rfind('@')) {
            (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
                format!("{}***{}", &url[..scheme_end + 3], &url[at_pos..])
            }
            _ => url.to_string(),
        }
    }
}
