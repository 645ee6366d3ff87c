//! Error type for `gloss-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] gloss_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("term not found: {0}")]
  TermNotFound(i64),

  #[error("relation not found: {0}")]
  RelationNotFound(i64),

  #[error("term already exists: {0:?}")]
  DuplicateTerm(String),

  #[error("relation endpoint references a missing term: {0}")]
  MissingEndpoint(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Collapse into the canonical service-level taxonomy; the API layer maps the
/// result onto HTTP statuses. Backend-specific failures degrade to `Storage`.
impl From<Error> for gloss_core::Error {
  fn from(e: Error) -> Self {
    use gloss_core::Error as Core;
    match e {
      Error::Core(inner) => inner,
      Error::TermNotFound(id) => Core::TermNotFound(id),
      Error::RelationNotFound(id) => Core::RelationNotFound(id),
      Error::DuplicateTerm(term) => Core::DuplicateTerm(term),
      Error::MissingEndpoint(id) => Core::MissingEndpoint(id),
      Error::Database(inner) => Core::Storage(inner.to_string()),
      Error::DateParse(msg) => Core::Storage(msg),
    }
  }
}
