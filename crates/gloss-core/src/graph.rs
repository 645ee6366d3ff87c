//! Graph — the full snapshot of all terms and relations.
//!
//! Derived, never persisted. Recomputed per request by composing the two
//! listings; cost is O(terms + relations), which is fine for a glossary-sized
//! corpus.

use serde::{Deserialize, Serialize};

use crate::{relation::Relation, term::Term};

/// Cap on the term listing used when assembling a snapshot. A glossary is
/// expected to hold thousands of entries, not millions; past that the
/// assembler would have to move to real pagination.
pub const GRAPH_TERM_LIMIT: usize = 10_000;

/// Every term as a node, every relation as an edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
  pub nodes: Vec<Term>,
  pub edges: Vec<Relation>,
}
