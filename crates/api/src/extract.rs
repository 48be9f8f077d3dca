//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections converted to [`AppError::BadRequest`], so a
/// body like `{"xp_reward": "lots"}` gets the standard JSON error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
