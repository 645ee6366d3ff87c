//! [`SqliteStore`] — the SQLite implementation of [`GlossaryStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use gloss_core::{
  graph::{GRAPH_TERM_LIMIT, Graph},
  relation::{NewRelation, Relation, RelationPatch},
  store::{GlossaryStore, TermQuery},
  term::{NewTerm, Term, TermPatch},
};

use crate::{
  Error, Result,
  encode::{RawRelation, RawTerm, encode_dt, encode_list},
  schema::SCHEMA,
};

// ─── Row helpers ─────────────────────────────────────────────────────────────

const TERM_COLUMNS: &str = "id, term, definition, synonyms, tags, \
   source_title, source_authors, source_year, source_link, \
   created_at, updated_at";

const RELATION_COLUMNS: &str = "id, source_id, target_id, kind";

fn read_term_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawTerm> {
  Ok(RawTerm {
    id:             row.get(0)?,
    term:           row.get(1)?,
    definition:     row.get(2)?,
    synonyms:       row.get(3)?,
    tags:           row.get(4)?,
    source_title:   row.get(5)?,
    source_authors: row.get(6)?,
    source_year:    row.get(7)?,
    source_link:    row.get(8)?,
    created_at:     row.get(9)?,
    updated_at:     row.get(10)?,
  })
}

fn read_relation_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRelation> {
  Ok(RawRelation {
    id:        row.get(0)?,
    source_id: row.get(1)?,
    target_id: row.get(2)?,
    kind:      row.get(3)?,
  })
}

/// `true` when a term with `id` exists. Runs inside a `conn.call` closure.
fn term_exists(conn: &rusqlite::Connection, id: i64) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM terms WHERE id = ?1",
        rusqlite::params![id],
        |_| Ok(true),
      )
      .optional()?
      .unwrap_or(false),
  )
}

/// `true` for the SQLITE_CONSTRAINT family (UNIQUE violation on `terms.term`).
fn is_constraint_violation(err: &tokio_rusqlite::Error) -> bool {
  matches!(
    err,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
      if e.code == rusqlite::ErrorCode::ConstraintViolation
  )
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A glossary store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All database
/// work runs serialized on the connection's dedicated thread, so a
/// multi-statement operation submitted as one closure (endpoint check plus
/// relation insert) cannot interleave with other callers.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── GlossaryStore impl ──────────────────────────────────────────────────────

impl GlossaryStore for SqliteStore {
  type Error = Error;

  // ── Terms ─────────────────────────────────────────────────────────────────

  async fn list_terms(&self, query: &TermQuery) -> Result<Vec<Term>> {
    let pattern = query
      .text
      .as_deref()
      .map(|t| format!("%{}%", t.to_lowercase()));
    let limit = query.limit.unwrap_or(100) as i64;
    let offset = query.offset.unwrap_or(0) as i64;

    let raws: Vec<RawTerm> = self
      .conn
      .call(move |conn| {
        let rows = if let Some(p) = pattern {
          let mut stmt = conn.prepare(&format!(
            "SELECT {TERM_COLUMNS} FROM terms
             WHERE lower(term)       LIKE ?1
                OR lower(definition) LIKE ?1
                OR lower(synonyms)   LIKE ?1
                OR lower(tags)       LIKE ?1
             ORDER BY term
             LIMIT ?2 OFFSET ?3"
          ))?;
          stmt
            .query_map(rusqlite::params![p, limit, offset], read_term_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&format!(
            "SELECT {TERM_COLUMNS} FROM terms ORDER BY term LIMIT ?1 OFFSET ?2"
          ))?;
          stmt
            .query_map(rusqlite::params![limit, offset], read_term_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTerm::into_term).collect()
  }

  async fn get_term(&self, id: i64) -> Result<Option<Term>> {
    let raw: Option<RawTerm> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {TERM_COLUMNS} FROM terms WHERE id = ?1"),
              rusqlite::params![id],
              read_term_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTerm::into_term).transpose()
  }

  async fn get_term_by_keyword(&self, keyword: &str) -> Result<Option<Term>> {
    let keyword = keyword.to_owned();

    let raw: Option<RawTerm> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {TERM_COLUMNS} FROM terms
                 WHERE term = ?1 COLLATE NOCASE
                 LIMIT 1"
              ),
              rusqlite::params![keyword],
              read_term_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTerm::into_term).transpose()
  }

  async fn create_term(&self, input: NewTerm) -> Result<Term> {
    input.validate()?;

    // Normalise before persisting: empty sequence becomes "no value".
    let synonyms_col = encode_list(input.synonyms.as_deref());
    let tags_col = encode_list(input.tags.as_deref());
    let now_str = encode_dt(Utc::now());

    let keyword = input.term.clone();

    let raw = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO terms (
             term, definition, synonyms, tags,
             source_title, source_authors, source_year, source_link,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            input.term,
            input.definition,
            synonyms_col,
            tags_col,
            input.source_title,
            input.source_authors,
            input.source_year,
            input.source_link,
            now_str,
            now_str,
          ],
        )?;
        let id = conn.last_insert_rowid();
        Ok(conn.query_row(
          &format!("SELECT {TERM_COLUMNS} FROM terms WHERE id = ?1"),
          rusqlite::params![id],
          read_term_row,
        )?)
      })
      .await;

    match raw {
      Ok(raw) => raw.into_term(),
      Err(e) if is_constraint_violation(&e) => Err(Error::DuplicateTerm(keyword)),
      Err(e) => Err(e.into()),
    }
  }

  async fn update_term(&self, id: i64, patch: TermPatch) -> Result<Term> {
    patch.validate()?;

    // Outer Option: was the field supplied at all. Inner Option: the column
    // value, NULL for an explicit empty sequence.
    let synonyms_col = patch.synonyms.as_ref().map(|v| encode_list(Some(v)));
    let tags_col = patch.tags.as_ref().map(|v| encode_list(Some(v)));
    let updated_str = encode_dt(Utc::now());
    let renamed = patch.term.clone();

    let res = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let existing: Option<RawTerm> = tx
          .query_row(
            &format!("SELECT {TERM_COLUMNS} FROM terms WHERE id = ?1"),
            rusqlite::params![id],
            read_term_row,
          )
          .optional()?;
        let Some(mut row) = existing else {
          return Ok(Err(Error::TermNotFound(id)));
        };

        if let Some(term) = patch.term {
          row.term = term;
        }
        if let Some(definition) = patch.definition {
          row.definition = definition;
        }
        if let Some(synonyms) = synonyms_col {
          row.synonyms = synonyms;
        }
        if let Some(tags) = tags_col {
          row.tags = tags;
        }
        if let Some(title) = patch.source_title {
          row.source_title = Some(title);
        }
        if let Some(authors) = patch.source_authors {
          row.source_authors = Some(authors);
        }
        if let Some(year) = patch.source_year {
          row.source_year = Some(year);
        }
        if let Some(link) = patch.source_link {
          row.source_link = Some(link);
        }
        row.updated_at = updated_str;

        tx.execute(
          "UPDATE terms SET
             term = ?1, definition = ?2, synonyms = ?3, tags = ?4,
             source_title = ?5, source_authors = ?6,
             source_year = ?7, source_link = ?8,
             updated_at = ?9
           WHERE id = ?10",
          rusqlite::params![
            row.term,
            row.definition,
            row.synonyms,
            row.tags,
            row.source_title,
            row.source_authors,
            row.source_year,
            row.source_link,
            row.updated_at,
            id,
          ],
        )?;
        tx.commit()?;

        Ok(Ok(row))
      })
      .await;

    match res {
      Ok(inner) => inner?.into_term(),
      Err(e) if is_constraint_violation(&e) => {
        Err(Error::DuplicateTerm(renamed.unwrap_or_default()))
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn delete_term(&self, id: i64) -> Result<()> {
    let affected: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM terms WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::TermNotFound(id));
    }
    Ok(())
  }

  // ── Relations ─────────────────────────────────────────────────────────────

  async fn list_relations(&self) -> Result<Vec<Relation>> {
    let raws: Vec<RawRelation> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {RELATION_COLUMNS} FROM relations"))?;
        let rows = stmt
          .query_map([], read_relation_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRelation::into_relation).collect()
  }

  async fn create_relation(&self, input: NewRelation) -> Result<Relation> {
    let NewRelation { source_id, target_id, kind } = input;
    let kind_str = kind.as_str();

    let id: Result<i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        if !term_exists(&tx, source_id)? {
          return Ok(Err(Error::MissingEndpoint(source_id)));
        }
        if !term_exists(&tx, target_id)? {
          return Ok(Err(Error::MissingEndpoint(target_id)));
        }

        tx.execute(
          "INSERT INTO relations (source_id, target_id, kind) VALUES (?1, ?2, ?3)",
          rusqlite::params![source_id, target_id, kind_str],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Ok(id))
      })
      .await?;

    Ok(Relation { id: id?, source_id, target_id, kind })
  }

  async fn update_relation(&self, id: i64, patch: RelationPatch) -> Result<Relation> {
    let RelationPatch { source_id, target_id, kind } = patch;
    let kind_str = kind.map(|k| k.as_str().to_owned());

    let raw: Result<RawRelation> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let existing: Option<RawRelation> = tx
          .query_row(
            &format!("SELECT {RELATION_COLUMNS} FROM relations WHERE id = ?1"),
            rusqlite::params![id],
            read_relation_row,
          )
          .optional()?;
        let Some(mut row) = existing else {
          return Ok(Err(Error::RelationNotFound(id)));
        };

        if let Some(source) = source_id {
          if !term_exists(&tx, source)? {
            return Ok(Err(Error::MissingEndpoint(source)));
          }
          row.source_id = source;
        }
        if let Some(target) = target_id {
          if !term_exists(&tx, target)? {
            return Ok(Err(Error::MissingEndpoint(target)));
          }
          row.target_id = target;
        }
        if let Some(kind) = kind_str {
          row.kind = kind;
        }

        tx.execute(
          "UPDATE relations SET source_id = ?1, target_id = ?2, kind = ?3 WHERE id = ?4",
          rusqlite::params![row.source_id, row.target_id, row.kind, id],
        )?;
        tx.commit()?;

        Ok(Ok(row))
      })
      .await?;

    raw?.into_relation()
  }

  async fn delete_relation(&self, id: i64) -> Result<()> {
    let affected: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM relations WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::RelationNotFound(id));
    }
    Ok(())
  }

  // ── Graph ─────────────────────────────────────────────────────────────────

  async fn graph(&self) -> Result<Graph> {
    let query = TermQuery {
      text:   None,
      limit:  Some(GRAPH_TERM_LIMIT),
      offset: None,
    };

    let nodes = self.list_terms(&query).await?;
    let edges = self.list_relations().await?;

    Ok(Graph { nodes, edges })
  }
}
