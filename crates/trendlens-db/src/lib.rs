use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use trendlens_core::AppConfig;

pub mod products;

pub use products::{
    list_products_by_category, replace_category_products, storage_stats, CategoryCount,
    ProductRow, StorageStats, STATS_SAMPLE_SIZE,
};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// Path relative to crates/trendlens-db/Cargo.toml; resolves to <workspace-root>/migrations/
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl PoolConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
            acquire_timeout_secs: config.db_acquire_timeout_secs,
        }
    }
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("rank {0} does not fit the rank column")]
    RankOutOfRange(u32),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Product storage, present or explicitly absent.
///
/// Every caller handles `Unavailable`; nothing panics or retries when the
/// database could not be reached at startup.
#[derive(Debug, Clone)]
pub enum Storage {
    Connected(PgPool),
    Unavailable,
}

impl Storage {
    /// Connects and migrates when `database_url` is set. Any failure is
    /// logged and yields [`Storage::Unavailable`].
    pub async fn connect(database_url: Option<&str>, config: PoolConfig) -> Self {
        let Some(url) = database_url else {
            tracing::warn!("DATABASE_URL not set; storage unavailable");
            return Self::Unavailable;
        };

        let pool = match connect_pool(url, config).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!(error = %e, "database connection failed; storage unavailable");
                return Self::Unavailable;
            }
        };

        match run_migrations(&pool).await {
            Ok(applied) => {
                tracing::info!(applied, "database connected and migrated");
                Self::Connected(pool)
            }
            Err(e) => {
                tracing::warn!(error = %e, "migrations failed; storage unavailable");
                Self::Unavailable
            }
        }
    }

    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        match self {
            Self::Connected(pool) => Some(pool),
            Self::Unavailable => None,
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// The pool, or [`DbError::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Unavailable`] when storage was never connected.
    pub fn require(&self) -> Result<&PgPool, DbError> {
        self.pool().ok_or(DbError::Unavailable)
    }
}

/// Connect to a Postgres pool using explicit URL and config.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the connection cannot be established.
pub async fn connect_pool(database_url: &str, config: PoolConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(database_url)
        .await
}

/// Run all pending migrations against the pool.
///
/// Returns the number of migrations that were applied.
///
/// # Errors
///
/// Returns [`sqlx::migrate::MigrateError`] if any migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<usize, sqlx::migrate::MigrateError> {
    // The _sqlx_migrations table does not exist on a fresh database.
    let applied_before: i64 =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = true")
            .fetch_one(pool)
            .await
            .unwrap_or(0);

    MIGRATOR.run(pool).await?;

    let applied_after: i64 =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = true")
            .fetch_one(pool)
            .await
            .unwrap_or(0);

    let delta = (applied_after - applied_before).max(0);
    Ok(usize::try_from(delta).unwrap_or(0))
}

/// Ping the pool with `SELECT 1`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn health_check(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_config_has_sane_defaults() {
        let config = PoolConfig::default();

        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.min_connections, DEFAULT_MIN_CONNECTIONS);
        assert_eq!(config.acquire_timeout_secs, DEFAULT_ACQUIRE_TIMEOUT_SECS);
    }

    #[test]
    fn unavailable_storage_has_no_pool() {
        let storage = Storage::Unavailable;
        assert!(!storage.is_available());
        assert!(storage.pool().is_none());
        assert!(matches!(storage.require(), Err(DbError::Unavailable)));
    }

    #[tokio::test]
    async fn missing_url_downgrades_to_unavailable() {
        let storage = Storage::connect(None, PoolConfig::default()).await;
        assert!(!storage.is_available());
    }

    #[tokio::test]
    async fn unreachable_database_downgrades_to_unavailable() {
        let config = PoolConfig {
            acquire_timeout_secs: 1,
            min_connections: 0,
            ..PoolConfig::default()
        };
        let storage = Storage::connect(Some("postgres://nobody@127.0.0.1:1/none"), config).await;
        assert!(!storage.is_available());
    }
}
