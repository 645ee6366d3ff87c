//! Handlers for `/terms` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/terms` | Optional `?query=`, `?limit=`, `?offset=` |
//! | `POST`   | `/terms` | Body: [`NewTerm`]; returns 201 + stored term |
//! | `GET`    | `/terms/by-keyword/:keyword` | Case-insensitive exact match; 404 if absent |
//! | `PUT`    | `/terms/:id` | Partial overwrite; 404 if absent |
//! | `DELETE` | `/terms/:id` | 204; 404 if absent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use gloss_core::{
  store::{GlossaryStore, TermQuery},
  term::{NewTerm, Term, TermPatch},
};
use serde::Deserialize;

use crate::error::{ApiError, store_err};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Case-insensitive substring filter across term, definition, synonyms,
  /// and tags.
  pub query:  Option<String>,
  pub limit:  Option<usize>,
  pub offset: Option<usize>,
}

/// `GET /terms[?query=...][&limit=...][&offset=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Term>>, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  let query = TermQuery {
    text:   params.query,
    limit:  params.limit,
    offset: params.offset,
  };
  let terms = store.list_terms(&query).await.map_err(store_err)?;
  Ok(Json(terms))
}

// ─── Get by keyword ───────────────────────────────────────────────────────────

/// `GET /terms/by-keyword/:keyword`
pub async fn get_by_keyword<S>(
  State(store): State<Arc<S>>,
  Path(keyword): Path<String>,
) -> Result<Json<Term>, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  let term = store
    .get_term_by_keyword(&keyword)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("term {keyword:?} not found")))?;
  Ok(Json(term))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /terms` — returns 201 + the stored [`Term`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewTerm>,
) -> Result<impl IntoResponse, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  let term = store.create_term(body).await.map_err(store_err)?;
  Ok((StatusCode::CREATED, Json(term)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /terms/:id` — only supplied fields are overwritten.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<TermPatch>,
) -> Result<Json<Term>, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  let term = store.update_term(id, body).await.map_err(store_err)?;
  Ok(Json(term))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /terms/:id` — 204 on success.
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: GlossaryStore,
  S::Error: Into<gloss_core::Error>,
{
  store.delete_term(id).await.map_err(store_err)?;
  Ok(StatusCode::NO_CONTENT)
}
