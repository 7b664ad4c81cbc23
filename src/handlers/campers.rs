//! `/campers` handlers.

use crate::error::AppError;
use crate::extractors::{ApiJson, ApiPath};
use crate::models::{CamperDetail, CamperPatch, NewCamper};
use crate::repo::{CamperRepo, SignupRepo};
use crate::uow::UnitOfWork;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct CreateCamper {
    pub name: String,
    pub age: i64,
}

/// GET /campers
pub async fn list(mut uow: UnitOfWork) -> Result<impl IntoResponse, AppError> {
    let campers = CamperRepo::list(uow.conn()).await?;
    uow.commit().await?;
    Ok((StatusCode::OK, Json(campers)))
}

/// POST /campers
pub async fn create(
    mut uow: UnitOfWork,
    body: Result<ApiJson<CreateCamper>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let ApiJson(body) = body.map_err(AppError::for_camper)?;
    let new = NewCamper::new(body.name, body.age).map_err(AppError::CamperValidation)?;
    let camper = CamperRepo::insert(uow.conn(), &new).await?;
    uow.commit().await?;
    tracing::info!(camper_id = camper.id, "camper created");
    Ok((StatusCode::OK, Json(camper)))
}

/// GET /campers/:id: camper plus signups, each without the redundant camper.
pub async fn read(
    mut uow: UnitOfWork,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let camper = CamperRepo::find(uow.conn(), id)
        .await?
        .ok_or(AppError::NotFound("Camper"))?;
    let signups = SignupRepo::for_camper(uow.conn(), id).await?;
    uow.commit().await?;
    Ok((StatusCode::OK, Json(CamperDetail { camper, signups })))
}

/// PATCH /campers/:id: an unknown id is 404 before the body is looked at.
pub async fn update(
    mut uow: UnitOfWork,
    ApiPath(id): ApiPath<i64>,
    body: Result<ApiJson<Map<String, Value>>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let mut camper = CamperRepo::find(uow.conn(), id)
        .await?
        .ok_or(AppError::NotFound("Camper"))?;
    let ApiJson(body) = body?;
    let patch = CamperPatch::from_json(body)?;
    if !patch.is_empty() {
        camper.apply(patch)?;
        camper = CamperRepo::update(uow.conn(), &camper).await?;
        tracing::info!(camper_id = id, "camper updated");
    }
    uow.commit().await?;
    Ok((StatusCode::ACCEPTED, Json(camper)))
}
