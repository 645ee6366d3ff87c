//! Handler for `GET /graph`.

use std::sync::Arc;

use axum::{Json, extract::State};
use gloss_core::{graph::Graph, store::GlossaryStore};

use crate::error::{ApiError, store_err};

/// `GET /graph` — every term as a node, every relation as an edge, assembled
/// fresh per request.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Graph>, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  let graph = store.graph().await.map_err(store_err)?;
  Ok(Json(graph))
}
