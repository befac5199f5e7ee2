//! Backend entry-point: wires configuration, persistence, and the HTTP app.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use diesel::Connection as _;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::{DbPool, PoolConfig};
use server::ServerConfig;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    let key = match std::fs::read(&key_path) {
        Ok(bytes) => Key::derive_from(&bytes),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Key::generate()
            } else {
                return Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )));
            }
        }
    };

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr);

    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            run_migrations(&database_url)?;
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set; serving fixture data only");
        }
    }

    server::run(config)?.await
}

fn run_migrations(database_url: &str) -> std::io::Result<()> {
    let mut conn = diesel::PgConnection::establish(database_url)
        .map_err(|e| std::io::Error::other(format!("database connection failed: {e}")))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
    Ok(())
}
