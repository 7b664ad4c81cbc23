//! `/signups` handlers.

use crate::error::{AppError, ValidationError};
use crate::extractors::ApiJson;
use crate::models::{NewSignup, SignupView};
use crate::repo::{ActivityRepo, CamperRepo, SignupRepo};
use crate::uow::UnitOfWork;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSignup {
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
}

/// POST /signups: both referenced rows must exist; the response nests them.
pub async fn create(
    mut uow: UnitOfWork,
    ApiJson(body): ApiJson<CreateSignup>,
) -> Result<impl IntoResponse, AppError> {
    let new = NewSignup::new(body.camper_id, body.activity_id, body.time)?;
    let camper = CamperRepo::find(uow.conn(), new.camper_id())
        .await?
        .ok_or(ValidationError::MissingReference {
            kind: "camper",
            id: new.camper_id(),
        })?;
    let activity = ActivityRepo::find(uow.conn(), new.activity_id())
        .await?
        .ok_or(ValidationError::MissingReference {
            kind: "activity",
            id: new.activity_id(),
        })?;
    let signup = SignupRepo::insert(uow.conn(), &new).await?;
    uow.commit().await?;
    tracing::info!(
        signup_id = signup.id,
        camper_id = camper.id,
        activity_id = activity.id,
        "signup created"
    );
    Ok((
        StatusCode::OK,
        Json(SignupView {
            signup,
            camper: Some(camper),
            activity,
        }),
    ))
}
