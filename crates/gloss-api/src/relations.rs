//! Handlers for `/relations` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/relations` | Full listing, no pagination |
//! | `POST`   | `/relations` | Body: [`NewRelation`]; 400 if an endpoint is missing |
//! | `PUT`    | `/relations/:id` | Partial overwrite; 404 if absent |
//! | `DELETE` | `/relations/:id` | 204; 404 if absent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use gloss_core::{
  relation::{NewRelation, Relation, RelationPatch},
  store::GlossaryStore,
};

use crate::error::{ApiError, store_err};

/// `GET /relations`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Relation>>, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  let relations = store.list_relations().await.map_err(store_err)?;
  Ok(Json(relations))
}

/// `POST /relations` — returns 201 + the stored [`Relation`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewRelation>,
) -> Result<impl IntoResponse, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  let relation = store.create_relation(body).await.map_err(store_err)?;
  Ok((StatusCode::CREATED, Json(relation)))
}

/// `PUT /relations/:id` — only supplied fields are overwritten.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<RelationPatch>,
) -> Result<Json<Relation>, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  let relation = store.update_relation(id, body).await.map_err(store_err)?;
  Ok(Json(relation))
}

/// `DELETE /relations/:id` — 204 on success.
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  store.delete_relation(id).await.map_err(store_err)?;
  Ok(StatusCode::NO_CONTENT)
}
