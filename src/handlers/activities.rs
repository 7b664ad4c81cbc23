//! `/activities` handlers.

use crate::error::AppError;
use crate::extractors::ApiPath;
use crate::repo::ActivityRepo;
use crate::uow::UnitOfWork;
use axum::{http::StatusCode, response::IntoResponse, Json};

/// GET /activities
pub async fn list(mut uow: UnitOfWork) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityRepo::list(uow.conn()).await?;
    uow.commit().await?;
    Ok((StatusCode::OK, Json(activities)))
}

/// DELETE /activities/:id: removes the activity and every signup for it.
pub async fn delete(
    mut uow: UnitOfWork,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !ActivityRepo::delete_cascade(uow.conn(), id).await? {
        return Err(AppError::NotFound("Activity"));
    }
    uow.commit().await?;
    tracing::info!(activity_id = id, "activity deleted");
    Ok(StatusCode::NO_CONTENT)
}
