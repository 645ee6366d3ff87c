//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,

  /// The server has no bearer token configured; traffic is refused rather
  /// than served open.
  #[error("auth token not configured")]
  Unavailable,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthorized => {
        let mut res =
          (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Bearer realm=\"gloss\""),
        );
        res
      }
      Error::Unavailable => {
        (StatusCode::SERVICE_UNAVAILABLE, "auth token not configured")
          .into_response()
      }
    }
  }
}
