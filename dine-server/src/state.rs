//! Application state

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

use crate::auth::{JwtConfig, JwtService, hash_password};
use crate::config::Config;
use crate::db;
use crate::live::RoomHub;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Realtime room hub
    pub hub: RoomHub,
    /// JWT service for admin authentication
    pub jwt: JwtService,
}

impl AppState {
    /// Create a new AppState: open the pool, run migrations, make sure
    /// an admin account exists.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = open_pool(&config.database_path).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        ensure_default_admin(&pool, config).await?;

        Ok(Self {
            pool,
            hub: RoomHub::new(),
            jwt: JwtService::new(JwtConfig::from_server_config(config)),
        })
    }
}

/// Open the SQLite pool: WAL mode, enforced foreign keys, 5s busy wait
pub async fn open_pool(database_path: &str) -> Result<SqlitePool, BoxError> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{database_path}"))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .pragma("foreign_keys", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // busy_timeout: wait up to 5s on write contention instead of failing
    sqlx::query("PRAGMA busy_timeout = 5000;").execute(&pool).await?;

    tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");
    Ok(pool)
}

/// Seed one admin account when the table is empty. The credentials come
/// from ADMIN_USERNAME / ADMIN_PASSWORD and the password is stored as an
/// argon2 hash; there is no hard-coded login path.
async fn ensure_default_admin(pool: &SqlitePool, config: &Config) -> Result<(), BoxError> {
    if db::admin_users::count(pool).await? > 0 {
        return Ok(());
    }

    let hash = hash_password(&config.admin_password)
        .map_err(|e| format!("Failed to hash bootstrap admin password: {e}"))?;
    db::admin_users::create(pool, &config.admin_username, &hash, "admin").await?;
    tracing::info!(
        username = %config.admin_username,
        "Bootstrapped admin account (set ADMIN_USERNAME/ADMIN_PASSWORD to change)"
    );
    Ok(())
}
