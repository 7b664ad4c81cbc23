//! Pool construction and seed data.

use crate::error::{AppError, ValidationError};
use crate::models::{NewActivity, NewCamper};
use crate::repo::{ActivityRepo, CamperRepo};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool for `database_url`, creating the database file if it does not exist.
/// Foreign keys are enforced on every connection.
///
/// In-memory databases get exactly one connection that is never recycled, so
/// the data lives as long as the pool.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };
    tracing::debug!(database_url, "database pool ready");
    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

const SEED_ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Canoeing", 3),
    ("Rock Climbing", 5),
    ("Arts and Crafts", 1),
    ("Orienteering", 4),
];

const SEED_CAMPERS: &[(&str, i64)] = &[
    ("Alex", 10),
    ("Jordan", 12),
    ("Riley", 15),
    ("Casey", 8),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub activities: usize,
    pub campers: usize,
}

/// Replace all rows with the fixed seed set. Ids restart at 1.
pub async fn seed(pool: &SqlitePool) -> Result<SeedSummary, AppError> {
    let activities = SEED_ACTIVITIES
        .iter()
        .map(|(name, difficulty)| NewActivity::new(*name, *difficulty))
        .collect::<Result<Vec<_>, ValidationError>>()?;
    let campers = SEED_CAMPERS
        .iter()
        .map(|(name, age)| NewCamper::new(*name, *age))
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let mut tx = pool.begin().await?;
    for table in ["signups", "campers", "activities"] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('signups', 'campers', 'activities')")
        .execute(&mut *tx)
        .await?;

    for activity in &activities {
        ActivityRepo::insert(&mut *tx, activity).await?;
    }
    for camper in &campers {
        CamperRepo::insert(&mut *tx, camper).await?;
    }
    tx.commit().await?;

    Ok(SeedSummary {
        activities: activities.len(),
        campers: campers.len(),
    })
}
