//! Reset the database to the fixed seed set of activities and campers.

use camp_signups::{apply_migrations, connect, init_tracing, seed, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config.database_url, config.max_connections).await?;
    apply_migrations(&pool).await?;

    let summary = seed(&pool).await?;
    tracing::info!(
        activities = summary.activities,
        campers = summary.campers,
        database_url = %config.database_url,
        "database seeded"
    );
    pool.close().await;
    Ok(())
}
