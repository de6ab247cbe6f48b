//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// The core never fails on well-formed input, so the only failures are
/// requests that do not deserialise.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("invalid request body: {0}")]
  InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
