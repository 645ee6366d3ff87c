//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. Synonyms and tags are one
//! comma-joined TEXT column each, NULL when the term has none.

use chrono::{DateTime, Utc};
use gloss_core::{
  relation::{Relation, RelationKind},
  term::Term,
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Delimited lists ─────────────────────────────────────────────────────────

/// Comma-join a sequence for the `synonyms`/`tags` columns. An empty or
/// absent sequence maps to NULL, so "no value" always reads back as absence,
/// never as an empty sequence.
pub fn encode_list(values: Option<&[String]>) -> Option<String> {
  match values {
    Some(v) if !v.is_empty() => Some(v.join(",")),
    _ => None,
  }
}

/// Re-split a stored column into the external sequence form.
pub fn decode_list(stored: Option<String>) -> Option<Vec<String>> {
  stored.map(|s| s.split(',').map(str::to_owned).collect())
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `terms` row.
pub struct RawTerm {
  pub id:             i64,
  pub term:           String,
  pub definition:     String,
  pub synonyms:       Option<String>,
  pub tags:           Option<String>,
  pub source_title:   Option<String>,
  pub source_authors: Option<String>,
  pub source_year:    Option<i32>,
  pub source_link:    Option<String>,
  pub created_at:     String,
  pub updated_at:     String,
}

impl RawTerm {
  pub fn into_term(self) -> Result<Term> {
    Ok(Term {
      id:             self.id,
      term:           self.term,
      definition:     self.definition,
      synonyms:       decode_list(self.synonyms),
      tags:           decode_list(self.tags),
      source_title:   self.source_title,
      source_authors: self.source_authors,
      source_year:    self.source_year,
      source_link:    self.source_link,
      created_at:     decode_dt(&self.created_at)?,
      updated_at:     decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw values read directly from a `relations` row.
pub struct RawRelation {
  pub id:        i64,
  pub source_id: i64,
  pub target_id: i64,
  pub kind:      String,
}

impl RawRelation {
  pub fn into_relation(self) -> Result<Relation> {
    Ok(Relation {
      id:        self.id,
      source_id: self.source_id,
      target_id: self.target_id,
      kind:      RelationKind::parse(&self.kind)?,
    })
  }
}
