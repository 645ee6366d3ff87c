//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("internal error: {0}")]
  Internal(String),
}

/// Map a store failure onto the API taxonomy. Anything the taxonomy does not
/// recognise degrades to `Internal`.
pub fn store_err<E: Into<gloss_core::Error>>(err: E) -> ApiError {
  use gloss_core::Error as Core;

  let err = err.into();
  match &err {
    Core::TermNotFound(_) | Core::RelationNotFound(_) => {
      ApiError::NotFound(err.to_string())
    }
    Core::DuplicateTerm(_) => ApiError::Conflict(err.to_string()),
    Core::MissingEndpoint(_) | Core::UnknownRelationKind(_) | Core::EmptyField(_) => {
      ApiError::BadRequest(err.to_string())
    }
    Core::Storage(_) => ApiError::Internal(err.to_string()),
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
