//! Schema DDL for the camp tables. Order follows foreign-key dependencies.

use crate::error::AppError;
use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS activities (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        difficulty INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS campers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL CHECK (age BETWEEN 8 AND 18)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS signups (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        time INTEGER NOT NULL CHECK (time BETWEEN 0 AND 23),
        camper_id INTEGER NOT NULL REFERENCES campers (id) ON DELETE CASCADE,
        activity_id INTEGER NOT NULL REFERENCES activities (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_signups_camper_id ON signups (camper_id)",
    "CREATE INDEX IF NOT EXISTS idx_signups_activity_id ON signups (activity_id)",
];

/// Create tables and indexes. Idempotent; safe to run on every start.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::debug!(statements = SCHEMA.len(), "schema applied");
    Ok(())
}
