//! Pool construction and `cupcakes` table DDL.

use crate::config::Settings;
use crate::error::ApiError;
use crate::model::DEFAULT_IMAGE_URL;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open the pool for `settings.database_url`, creating the database file if
/// it does not exist yet. Call before `ensure_schema`.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, ApiError> {
    let opts = SqliteConnectOptions::from_str(&settings.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the `cupcakes` table if not exists. The image default mirrors the
/// application-level substitution so rows written outside the API still
/// satisfy the never-null invariant.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), ApiError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS cupcakes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            flavor TEXT NOT NULL,
            size TEXT NOT NULL,
            rating REAL NOT NULL,
            image TEXT NOT NULL DEFAULT '{}'
        )
        "#,
        DEFAULT_IMAGE_URL
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
