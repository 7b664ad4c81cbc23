//! Service routes outside the camp API: home, liveness, readiness.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

/// Row counts reported by `/ready`; a query against each camp table proves the schema is in place.
#[derive(Debug, Serialize, sqlx::FromRow)]
struct CampTotals {
    activities: i64,
    campers: i64,
    signups: i64,
}

async fn home() -> &'static str {
    ""
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn camp_totals(state: &AppState) -> Result<CampTotals, AppError> {
    let totals = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM activities) AS activities, \
                (SELECT COUNT(*) FROM campers) AS campers, \
                (SELECT COUNT(*) FROM signups) AS signups",
    )
    .fetch_one(&state.pool)
    .await?;
    Ok(totals)
}

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match camp_totals(&state).await {
        Ok(totals) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "ok", "totals": totals })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "unavailable" })),
            )
        }
    }
}

/// GET /, GET /health, GET /ready (camp tables reachable, with row counts).
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
