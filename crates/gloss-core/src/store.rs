//! The `GlossaryStore` trait and supporting query type.
//!
//! The trait is the single entry point surrounding term and relation storage,
//! implemented by backends (e.g. `gloss-store-sqlite`). Higher layers
//! (`gloss-api`, `gloss-server`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  graph::Graph,
  relation::{NewRelation, Relation, RelationPatch},
  term::{NewTerm, Term, TermPatch},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`GlossaryStore::list_terms`].
#[derive(Debug, Clone, Default)]
pub struct TermQuery {
  /// Case-insensitive substring filter, OR'd across `term`, `definition`,
  /// and the stored synonyms/tags encodings.
  pub text:   Option<String>,
  /// Defaults to 100.
  pub limit:  Option<usize>,
  /// Defaults to 0.
  pub offset: Option<usize>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a glossary storage backend.
///
/// Implementations enforce the data-model invariants before persisting:
/// non-empty required fields, `term` uniqueness, and relation endpoints
/// referencing existing terms. Callers see those violations as typed errors,
/// never as partial writes.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait GlossaryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Terms ─────────────────────────────────────────────────────────────

  /// List terms matching `query`, ordered ascending by `term`, with
  /// limit/offset applied after filtering and ordering.
  fn list_terms<'a>(
    &'a self,
    query: &'a TermQuery,
  ) -> impl Future<Output = Result<Vec<Term>, Self::Error>> + Send + 'a;

  /// Retrieve a term by id. Returns `None` if not found.
  fn get_term(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Term>, Self::Error>> + Send + '_;

  /// Case-insensitive exact match on `term`. Returns the first match if
  /// duplicates exist (tie-break is not deterministic).
  fn get_term_by_keyword<'a>(
    &'a self,
    keyword: &'a str,
  ) -> impl Future<Output = Result<Option<Term>, Self::Error>> + Send + 'a;

  /// Persist a new term. `id`, `created_at`, and `updated_at` are assigned
  /// by the store.
  fn create_term(
    &self,
    input: NewTerm,
  ) -> impl Future<Output = Result<Term, Self::Error>> + Send + '_;

  /// Overwrite only the supplied fields and refresh `updated_at`.
  fn update_term(
    &self,
    id: i64,
    patch: TermPatch,
  ) -> impl Future<Output = Result<Term, Self::Error>> + Send + '_;

  /// Delete a term. Relations referencing it are deleted with it.
  fn delete_term(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Relations ─────────────────────────────────────────────────────────

  /// List all relations. No filter or pagination; the relation table is
  /// small by construction.
  fn list_relations(
    &self,
  ) -> impl Future<Output = Result<Vec<Relation>, Self::Error>> + Send + '_;

  /// Persist a new relation. Both endpoints must reference existing terms;
  /// the check and the insert are applied atomically.
  fn create_relation(
    &self,
    input: NewRelation,
  ) -> impl Future<Output = Result<Relation, Self::Error>> + Send + '_;

  /// Overwrite only the supplied fields, re-checking any supplied endpoint.
  fn update_relation(
    &self,
    id: i64,
    patch: RelationPatch,
  ) -> impl Future<Output = Result<Relation, Self::Error>> + Send + '_;

  fn delete_relation(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Graph ─────────────────────────────────────────────────────────────

  /// Assemble the full snapshot: the unfiltered term listing (capped at
  /// [`crate::graph::GRAPH_TERM_LIMIT`]) paired with the full relation
  /// listing. Computed fresh per call.
  fn graph(
    &self,
  ) -> impl Future<Output = Result<Graph, Self::Error>> + Send + '_;
}
