//! SQL schema for the glossary SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS terms (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    term           TEXT NOT NULL UNIQUE,
    definition     TEXT NOT NULL,
    synonyms       TEXT,              -- comma-joined; NULL when none
    tags           TEXT,              -- comma-joined; NULL when none
    source_title   TEXT,
    source_authors TEXT,
    source_year    INTEGER,
    source_link    TEXT,
    created_at     TEXT NOT NULL,     -- ISO 8601 UTC; server-assigned
    updated_at     TEXT NOT NULL
);

-- Deleting a term takes its relations with it.
CREATE TABLE IF NOT EXISTS relations (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    source_id INTEGER NOT NULL REFERENCES terms(id) ON DELETE CASCADE,
    target_id INTEGER NOT NULL REFERENCES terms(id) ON DELETE CASCADE,
    kind      TEXT NOT NULL           -- 'is-a' | 'part-of' | 'related-to' | 'synonym-of' | 'derived-from'
);

CREATE INDEX IF NOT EXISTS terms_term_idx       ON terms(term);
CREATE INDEX IF NOT EXISTS relations_source_idx ON relations(source_id);
CREATE INDEX IF NOT EXISTS relations_target_idx ON relations(target_id);

PRAGMA user_version = 1;
";
