//! JSON REST API for the glossary service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`gloss_core::store::GlossaryStore`]. Auth, CORS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", gloss_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod graph;
pub mod relations;
pub mod terms;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, put},
};
use gloss_core::store::GlossaryStore;
use serde_json::json;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: GlossaryStore + Clone + Send + Sync + 'static,
  S::Error: Into<gloss_core::Error>,
{
  Router::new()
    .route("/health", get(health))
    // Terms
    .route("/terms", get(terms::list::<S>).post(terms::create::<S>))
    .route("/terms/by-keyword/{keyword}", get(terms::get_by_keyword::<S>))
    .route("/terms/{id}", put(terms::update::<S>).delete(terms::remove::<S>))
    // Relations
    .route("/relations", get(relations::list::<S>).post(relations::create::<S>))
    .route("/relations/{id}", put(relations::update::<S>).delete(relations::remove::<S>))
    // Graph
    .route("/graph", get(graph::handler::<S>))
    .with_state(store)
}

/// `GET /health`
async fn health() -> Json<serde_json::Value> { Json(json!({ "status": "ok" })) }
