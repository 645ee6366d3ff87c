//! Shared-secret bearer gate applied in front of the API.
//!
//! The token is a fixed server-side secret; callers present it verbatim in
//! the `Authorization` header. A server with no token configured refuses all
//! API traffic rather than running open.

use std::sync::Arc;

use axum::{
  extract::{Request, State},
  http::HeaderMap,
  middleware::Next,
  response::Response,
};

use crate::error::Error;

/// Credentials accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  /// `None` until the operator configures a secret; every request fails with
  /// [`Error::Unavailable`] in that state.
  pub token: Option<String>,
}

/// Verify the `Authorization: Bearer <token>` header against `config`.
/// The scheme comparison is case-insensitive; the token itself is not.
pub fn verify_bearer(headers: &HeaderMap, config: &AuthConfig) -> Result<(), Error> {
  let expected = config.token.as_deref().ok_or(Error::Unavailable)?;

  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let (scheme, token) = header_val.split_once(' ').ok_or(Error::Unauthorized)?;
  if !scheme.eq_ignore_ascii_case("bearer") || token != expected {
    return Err(Error::Unauthorized);
  }

  Ok(())
}

/// axum middleware wrapping every API route.
pub async fn require_bearer(
  State(config): State<Arc<AuthConfig>>,
  request: Request,
  next: Next,
) -> Result<Response, Error> {
  verify_bearer(request.headers(), &config)?;
  Ok(next.run(request).await)
}
