//! Path extractor whose rejections are reported through [`AppError`].

use crate::error::AppError;
use axum::extract::FromRequestParts;

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
