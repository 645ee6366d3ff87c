//! Term — a glossary entry: keyword, definition, and provenance metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A stored glossary entry.
///
/// `synonyms` and `tags` are always exposed as a sequence-or-absent. The
/// delimited column encoding used by storage backends never crosses the
/// store boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
  pub id:             i64,
  /// The canonical keyword. Unique across the store.
  pub term:           String,
  pub definition:     String,
  pub synonyms:       Option<Vec<String>>,
  pub tags:           Option<Vec<String>>,
  pub source_title:   Option<String>,
  pub source_authors: Option<String>,
  pub source_year:    Option<i32>,
  pub source_link:    Option<String>,
  /// Server-assigned; never changes after creation.
  pub created_at:     DateTime<Utc>,
  /// Refreshed by the store on every mutation.
  pub updated_at:     DateTime<Utc>,
}

/// Input to [`crate::store::GlossaryStore::create_term`].
/// `id` and both timestamps are always assigned by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTerm {
  pub term:           String,
  pub definition:     String,
  /// An empty sequence is stored as "no value" and reads back as absent.
  pub synonyms:       Option<Vec<String>>,
  pub tags:           Option<Vec<String>>,
  pub source_title:   Option<String>,
  pub source_authors: Option<String>,
  pub source_year:    Option<i32>,
  pub source_link:    Option<String>,
}

impl NewTerm {
  pub fn validate(&self) -> Result<()> {
    if self.term.trim().is_empty() {
      return Err(Error::EmptyField("term"));
    }
    if self.definition.trim().is_empty() {
      return Err(Error::EmptyField("definition"));
    }
    Ok(())
  }
}

/// Input to [`crate::store::GlossaryStore::update_term`].
///
/// Fields left `None` keep their stored value. For `synonyms`/`tags`, an
/// explicit empty sequence clears the stored value; absence leaves it
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermPatch {
  pub term:           Option<String>,
  pub definition:     Option<String>,
  pub synonyms:       Option<Vec<String>>,
  pub tags:           Option<Vec<String>>,
  pub source_title:   Option<String>,
  pub source_authors: Option<String>,
  pub source_year:    Option<i32>,
  pub source_link:    Option<String>,
}

impl TermPatch {
  pub fn validate(&self) -> Result<()> {
    if let Some(term) = &self.term
      && term.trim().is_empty()
    {
      return Err(Error::EmptyField("term"));
    }
    if let Some(definition) = &self.definition
      && definition.trim().is_empty()
    {
      return Err(Error::EmptyField("definition"));
    }
    Ok(())
  }
}
