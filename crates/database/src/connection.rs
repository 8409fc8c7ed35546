use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Upper bound on concurrent connections. Fixed in code, not configuration.
const MAX_CONNECTIONS: u32 = 10;

/// Establishes a bounded connection pool to the PostgreSQL database.
///
/// The pool is constructed once at startup from the injected settings and
/// handed to the repository; when every connection is busy, new queries
/// wait up to the acquire timeout before failing.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&settings.connection_url())
        .await
        .map_err(|e| DbError::ConnectionError(e.to_string()))?;

    Ok(pool)
}

/// A utility function to run database migrations automatically.
///
/// This is useful for ensuring the database schema is up-to-date when the
/// application starts, which is especially important in production
/// deployments.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
