//! HTTP server assembly for the glossary service.
//!
//! Wraps the transport-agnostic [`gloss_api`] router with the shared-secret
//! bearer gate, CORS, and per-request tracing, and owns the runtime
//! configuration type.

pub mod auth;
pub mod error;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, http::HeaderValue, middleware};
use gloss_core::store::GlossaryStore;
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, Any, CorsLayer},
  trace::TraceLayer,
};

use auth::AuthConfig;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised once at startup from
/// `config.toml` and `GLOSS_*` environment variables. Immutable afterwards.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  pub store_path:   PathBuf,
  /// Shared-secret bearer token. API requests are refused with 503 until
  /// this is configured.
  pub auth_token:   Option<String>,
  /// Comma-separated list of allowed CORS origins.
  pub cors_origins: Option<String>,
}

impl ServerConfig {
  pub fn cors_origin_list(&self) -> Vec<String> {
    self
      .cors_origins
      .as_deref()
      .unwrap_or_default()
      .split(',')
      .map(str::trim)
      .filter(|origin| !origin.is_empty())
      .map(str::to_owned)
      .collect()
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the public router: the JSON API nested under `/api` behind the
/// bearer gate, with CORS and tracing applied outermost. CORS preflights are
/// answered before the gate, so browsers can negotiate without a credential.
pub fn router<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: GlossaryStore + Clone + Send + Sync + 'static,
  S::Error: Into<gloss_core::Error>,
{
  let auth = Arc::new(AuthConfig { token: config.auth_token.clone() });

  let origins: Vec<HeaderValue> = config
    .cors_origin_list()
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();
  let cors = CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins))
    .allow_methods(Any)
    .allow_headers(Any);

  Router::new()
    .nest("/api", gloss_api::api_router(store))
    .layer(middleware::from_fn_with_state(auth, auth::require_bearer))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}
