// src/extract.rs
use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections become `AppError`, so bad bodies still get a `{detail}` reply.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
