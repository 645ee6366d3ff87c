//! Error types for `gloss-core`.
//!
//! This is the canonical service-level taxonomy: storage backends collapse
//! their own failures into it, and the API layer maps it onto HTTP statuses.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("term not found: {0}")]
  TermNotFound(i64),

  #[error("relation not found: {0}")]
  RelationNotFound(i64),

  #[error("term already exists: {0:?}")]
  DuplicateTerm(String),

  #[error("relation endpoint references a missing term: {0}")]
  MissingEndpoint(i64),

  #[error("unknown relation kind: {0:?}")]
  UnknownRelationKind(String),

  #[error("{0} must not be empty")]
  EmptyField(&'static str),

  /// Unexpected backend failure; everything unrecognised degrades to this.
  #[error("storage error: {0}")]
  Storage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
