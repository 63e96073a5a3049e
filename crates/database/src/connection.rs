use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::{MySqlPool, mysql::MySqlPoolOptions};
use std::time::Duration;

/// Establishes a connection pool to the MySQL database.
///
/// The pool is capped at a single connection: the session is strictly
/// sequential, and the one connection is held for the process lifetime.
pub async fn connect(settings: &DatabaseSettings) -> Result<MySqlPool, DbError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&settings.connection_url())
        .await?;

    Ok(pool)
}

/// A utility function to run database migrations automatically.
///
/// The migrations are idempotent, so running them against a database that
/// already carries the pet tables is a no-op.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
