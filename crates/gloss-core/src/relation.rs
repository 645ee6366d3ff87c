//! Relation — a directed, typed edge between two terms.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The closed set of relation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
  IsA,
  PartOf,
  RelatedTo,
  SynonymOf,
  DerivedFrom,
}

impl RelationKind {
  /// The string stored in the `kind` column and used on the wire.
  /// Must match the `rename_all = "kebab-case"` serde tags above.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::IsA => "is-a",
      Self::PartOf => "part-of",
      Self::RelatedTo => "related-to",
      Self::SynonymOf => "synonym-of",
      Self::DerivedFrom => "derived-from",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "is-a" => Ok(Self::IsA),
      "part-of" => Ok(Self::PartOf),
      "related-to" => Ok(Self::RelatedTo),
      "synonym-of" => Ok(Self::SynonymOf),
      "derived-from" => Ok(Self::DerivedFrom),
      other => Err(Error::UnknownRelationKind(other.to_owned())),
    }
  }
}

/// A directed edge from `source_id` to `target_id`. Both endpoints reference
/// existing terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
  pub id:        i64,
  pub source_id: i64,
  pub target_id: i64,
  #[serde(rename = "type")]
  pub kind:      RelationKind,
}

/// Input to [`crate::store::GlossaryStore::create_relation`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NewRelation {
  pub source_id: i64,
  pub target_id: i64,
  #[serde(rename = "type")]
  pub kind:      RelationKind,
}

/// Input to [`crate::store::GlossaryStore::update_relation`].
/// Fields left `None` keep their stored value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RelationPatch {
  pub source_id: Option<i64>,
  pub target_id: Option<i64>,
  #[serde(rename = "type")]
  pub kind:      Option<RelationKind>,
}
