use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::config::Config;

/// Opens the sqlite file named by `DATABASE_URL`, creating it when missing.
pub async fn init_db(config: &Config) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL: {}", config.database_url))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Creates the tables if they do not exist yet. Safe to run on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id TEXT NOT NULL UNIQUE,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            department TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS attendance (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            status TEXT NOT NULL CHECK (status IN ('Present', 'Absent')),
            employee_id INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE
        );
        CREATE INDEX IF NOT EXISTS idx_attendance_employee_id ON attendance(employee_id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Single-connection in-memory database with the schema applied.
///
/// An in-memory sqlite database lives as long as its connection, so the pool
/// must never recycle it.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    ensure_schema(&pool).await.unwrap();
    pool
}

/// File-backed database in its own temp directory, for tests that need more
/// than one live connection. The caller removes the returned directory.
#[cfg(test)]
pub async fn file_pool(name: &str, max_connections: u32) -> (SqlitePool, std::path::PathBuf) {
    let dir = std::env::temp_dir().join(format!("hrms_lite_{}_{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let config = Config {
        server_addr: "127.0.0.1:0".to_string(),
        database_url: format!("sqlite://{}", dir.join("hrms.db").display()),
        db_max_connections: max_connections,
        log_dir: "logs".to_string(),
    };

    let pool = init_db(&config).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    (pool, dir)
}
