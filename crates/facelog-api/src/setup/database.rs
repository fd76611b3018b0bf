//! Database setup and initialization

use anyhow::{Context, Result};
use facelog_core::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Setup the SQLite connection pool, creating the database file if needed.
pub async fn setup_database(config: &Config) -> Result<SqlitePool> {
    tracing::info!(database_url = %config.database_url(), "Connecting to database...");

    let options = SqliteConnectOptions::from_str(config.database_url())
        .with_context(|| format!("Invalid DATABASE_URL '{}'", config.database_url()))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Database connected successfully");

    Ok(pool)
}
