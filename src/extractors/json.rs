//! JSON body extractor whose rejections are reported as 400 through [`AppError`].

use crate::error::AppError;
use axum::extract::FromRequest;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
