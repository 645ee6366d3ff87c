//! Integration tests for `SqliteStore` against an in-memory database.

use gloss_core::{
  relation::{NewRelation, RelationKind, RelationPatch},
  store::{GlossaryStore, TermQuery},
  term::{NewTerm, TermPatch},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_term(term: &str, definition: &str) -> NewTerm {
  NewTerm {
    term:       term.into(),
    definition: definition.into(),
    ..Default::default()
  }
}

fn text_query(text: &str) -> TermQuery {
  TermQuery { text: Some(text.into()), ..Default::default() }
}

fn relation(source_id: i64, target_id: i64, kind: RelationKind) -> NewRelation {
  NewRelation { source_id, target_id, kind }
}

// ─── Term creation and lookup ────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_term() {
  let s = store().await;

  let created = s
    .create_term(new_term("Entropy", "A measure of disorder."))
    .await
    .unwrap();
  assert!(created.id > 0);
  assert_eq!(created.term, "Entropy");
  assert_eq!(created.definition, "A measure of disorder.");
  assert_eq!(created.created_at, created.updated_at);

  let fetched = s.get_term(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.term, "Entropy");
}

#[tokio::test]
async fn get_term_missing_returns_none() {
  let s = store().await;
  assert!(s.get_term(42).await.unwrap().is_none());
}

#[tokio::test]
async fn keyword_lookup_is_case_insensitive() {
  let s = store().await;
  s.create_term(new_term("Entropy", "A measure of disorder."))
    .await
    .unwrap();

  let fetched = s.get_term_by_keyword("eNtRoPy").await.unwrap().unwrap();
  assert_eq!(fetched.term, "Entropy");

  assert!(s.get_term_by_keyword("enthalpy").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_term_is_a_conflict() {
  let s = store().await;
  s.create_term(new_term("Entropy", "First.")).await.unwrap();

  let err = s
    .create_term(new_term("Entropy", "Second."))
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::DuplicateTerm(t) if t == "Entropy"));
}

#[tokio::test]
async fn create_rejects_blank_fields() {
  let s = store().await;

  let err = s.create_term(new_term("  ", "Something.")).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(gloss_core::Error::EmptyField("term"))
  ));

  let err = s.create_term(new_term("Entropy", "")).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(gloss_core::Error::EmptyField("definition"))
  ));
}

// ─── Synonyms and tags encoding ──────────────────────────────────────────────

#[tokio::test]
async fn synonyms_round_trip_preserves_order() {
  let s = store().await;

  let mut input = new_term("Entropy", "A measure of disorder.");
  input.synonyms = Some(vec!["randomness".into(), "disorder".into()]);
  input.tags = Some(vec!["thermo".into(), "physics".into()]);

  let created = s.create_term(input).await.unwrap();
  assert_eq!(
    created.synonyms.as_deref(),
    Some(["randomness".to_owned(), "disorder".to_owned()].as_slice())
  );

  let fetched = s.get_term(created.id).await.unwrap().unwrap();
  assert_eq!(
    fetched.synonyms.as_deref(),
    Some(["randomness".to_owned(), "disorder".to_owned()].as_slice())
  );
  assert_eq!(
    fetched.tags.as_deref(),
    Some(["thermo".to_owned(), "physics".to_owned()].as_slice())
  );
}

#[tokio::test]
async fn empty_sequence_reads_back_as_absent() {
  let s = store().await;

  let mut input = new_term("Entropy", "A measure of disorder.");
  input.synonyms = Some(vec![]);

  let created = s.create_term(input).await.unwrap();
  assert!(created.synonyms.is_none());

  let fetched = s.get_term(created.id).await.unwrap().unwrap();
  assert!(fetched.synonyms.is_none());
  assert!(fetched.tags.is_none());
}

// ─── Listing and search ──────────────────────────────────────────────────────

#[tokio::test]
async fn list_orders_by_term() {
  let s = store().await;
  s.create_term(new_term("Gamma", "Third letter.")).await.unwrap();
  s.create_term(new_term("Alpha", "First letter.")).await.unwrap();
  s.create_term(new_term("Beta", "Second letter.")).await.unwrap();

  let terms = s.list_terms(&TermQuery::default()).await.unwrap();
  let names: Vec<_> = terms.iter().map(|t| t.term.as_str()).collect();
  assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
}

#[tokio::test]
async fn list_applies_limit_and_offset_after_ordering() {
  let s = store().await;
  for name in ["Delta", "Alpha", "Charlie", "Bravo"] {
    s.create_term(new_term(name, "NATO letter.")).await.unwrap();
  }

  let page = s
    .list_terms(&TermQuery { limit: Some(2), offset: Some(1), ..Default::default() })
    .await
    .unwrap();
  let names: Vec<_> = page.iter().map(|t| t.term.as_str()).collect();
  assert_eq!(names, ["Bravo", "Charlie"]);
}

#[tokio::test]
async fn search_matches_across_all_four_fields() {
  let s = store().await;

  let mut by_synonym = new_term("Entropy", "A measure of disorder.");
  by_synonym.synonyms = Some(vec!["randomness".into()]);
  s.create_term(by_synonym).await.unwrap();

  let mut by_tag = new_term("Enthalpy", "Total heat content.");
  by_tag.tags = Some(vec!["thermo".into()]);
  s.create_term(by_tag).await.unwrap();

  s.create_term(new_term("Inertia", "Resistance to change in motion."))
    .await
    .unwrap();

  // term field
  let hits = s.list_terms(&text_query("entro")).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].term, "Entropy");

  // definition field
  let hits = s.list_terms(&text_query("heat content")).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].term, "Enthalpy");

  // synonyms encoding
  let hits = s.list_terms(&text_query("randomness")).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].term, "Entropy");

  // tags encoding
  let hits = s.list_terms(&text_query("thermo")).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].term, "Enthalpy");

  // no match
  assert!(s.list_terms(&text_query("osmosis")).await.unwrap().is_empty());
}

#[tokio::test]
async fn search_is_case_insensitive() {
  let s = store().await;
  s.create_term(new_term("Entropy", "A measure of disorder."))
    .await
    .unwrap();

  let hits = s.list_terms(&text_query("DISORDER")).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].term, "Entropy");
}

// ─── Term updates ────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_only_supplied_fields() {
  let s = store().await;

  let mut input = new_term("Entropy", "A measure of disorder.");
  input.synonyms = Some(vec!["randomness".into()]);
  input.source_year = Some(1865);
  let created = s.create_term(input).await.unwrap();

  let patch = TermPatch {
    definition: Some("A measure of unavailable energy.".into()),
    ..Default::default()
  };
  let updated = s.update_term(created.id, patch).await.unwrap();

  assert_eq!(updated.term, "Entropy");
  assert_eq!(updated.definition, "A measure of unavailable energy.");
  assert_eq!(updated.synonyms.as_deref(), Some(["randomness".to_owned()].as_slice()));
  assert_eq!(updated.source_year, Some(1865));
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_with_empty_sequence_clears_stored_value() {
  let s = store().await;

  let mut input = new_term("Entropy", "A measure of disorder.");
  input.synonyms = Some(vec!["randomness".into()]);
  let created = s.create_term(input).await.unwrap();

  let patch = TermPatch { synonyms: Some(vec![]), ..Default::default() };
  let updated = s.update_term(created.id, patch).await.unwrap();
  assert!(updated.synonyms.is_none());

  let fetched = s.get_term(created.id).await.unwrap().unwrap();
  assert!(fetched.synonyms.is_none());
}

#[tokio::test]
async fn update_missing_term_is_not_found() {
  let s = store().await;
  let err = s
    .update_term(42, TermPatch { definition: Some("x".into()), ..Default::default() })
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::TermNotFound(42)));
}

#[tokio::test]
async fn renaming_onto_existing_term_is_a_conflict() {
  let s = store().await;
  s.create_term(new_term("Entropy", "First.")).await.unwrap();
  let other = s.create_term(new_term("Enthalpy", "Second.")).await.unwrap();

  let patch = TermPatch { term: Some("Entropy".into()), ..Default::default() };
  let err = s.update_term(other.id, patch).await.unwrap_err();
  assert!(matches!(err, crate::Error::DuplicateTerm(t) if t == "Entropy"));
}

// ─── Term deletion ───────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_term_then_second_delete_is_not_found() {
  let s = store().await;
  let created = s
    .create_term(new_term("Entropy", "A measure of disorder."))
    .await
    .unwrap();

  s.delete_term(created.id).await.unwrap();
  assert!(s.get_term(created.id).await.unwrap().is_none());

  let err = s.delete_term(created.id).await.unwrap_err();
  assert!(matches!(err, crate::Error::TermNotFound(_)));
}

#[tokio::test]
async fn deleting_a_term_deletes_its_relations() {
  let s = store().await;
  let entropy = s.create_term(new_term("Entropy", "First.")).await.unwrap();
  let disorder = s.create_term(new_term("Disorder", "Second.")).await.unwrap();
  s.create_relation(relation(entropy.id, disorder.id, RelationKind::RelatedTo))
    .await
    .unwrap();

  s.delete_term(entropy.id).await.unwrap();

  assert!(s.list_relations().await.unwrap().is_empty());
  // The other endpoint survives.
  assert!(s.get_term(disorder.id).await.unwrap().is_some());
}

// ─── Relations ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_list_relations() {
  let s = store().await;
  let entropy = s.create_term(new_term("Entropy", "First.")).await.unwrap();
  let disorder = s.create_term(new_term("Disorder", "Second.")).await.unwrap();

  let created = s
    .create_relation(relation(entropy.id, disorder.id, RelationKind::SynonymOf))
    .await
    .unwrap();
  assert!(created.id > 0);
  assert_eq!(created.source_id, entropy.id);
  assert_eq!(created.target_id, disorder.id);
  assert_eq!(created.kind, RelationKind::SynonymOf);

  let all = s.list_relations().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, created.id);
  assert_eq!(all[0].kind, RelationKind::SynonymOf);
}

#[tokio::test]
async fn relation_endpoints_must_exist() {
  let s = store().await;
  let entropy = s.create_term(new_term("Entropy", "First.")).await.unwrap();

  let err = s
    .create_relation(relation(entropy.id, 999, RelationKind::IsA))
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::MissingEndpoint(999)));

  let err = s
    .create_relation(relation(999, entropy.id, RelationKind::IsA))
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::MissingEndpoint(999)));

  // Nothing was inserted by the failed attempts.
  assert!(s.list_relations().await.unwrap().is_empty());
}

#[tokio::test]
async fn self_referencing_relation_is_allowed() {
  let s = store().await;
  let entropy = s.create_term(new_term("Entropy", "First.")).await.unwrap();

  let created = s
    .create_relation(relation(entropy.id, entropy.id, RelationKind::RelatedTo))
    .await
    .unwrap();
  assert_eq!(created.source_id, created.target_id);
}

#[tokio::test]
async fn relation_update_overwrites_only_supplied_fields() {
  let s = store().await;
  let entropy = s.create_term(new_term("Entropy", "First.")).await.unwrap();
  let disorder = s.create_term(new_term("Disorder", "Second.")).await.unwrap();
  let created = s
    .create_relation(relation(entropy.id, disorder.id, RelationKind::RelatedTo))
    .await
    .unwrap();

  let patch = RelationPatch { kind: Some(RelationKind::SynonymOf), ..Default::default() };
  let updated = s.update_relation(created.id, patch).await.unwrap();

  assert_eq!(updated.source_id, entropy.id);
  assert_eq!(updated.target_id, disorder.id);
  assert_eq!(updated.kind, RelationKind::SynonymOf);
}

#[tokio::test]
async fn relation_update_checks_new_endpoints() {
  let s = store().await;
  let entropy = s.create_term(new_term("Entropy", "First.")).await.unwrap();
  let disorder = s.create_term(new_term("Disorder", "Second.")).await.unwrap();
  let created = s
    .create_relation(relation(entropy.id, disorder.id, RelationKind::RelatedTo))
    .await
    .unwrap();

  let patch = RelationPatch { target_id: Some(999), ..Default::default() };
  let err = s.update_relation(created.id, patch).await.unwrap_err();
  assert!(matches!(err, crate::Error::MissingEndpoint(999)));

  // Unchanged after the failed update.
  let all = s.list_relations().await.unwrap();
  assert_eq!(all[0].target_id, disorder.id);
}

#[tokio::test]
async fn relation_update_missing_is_not_found() {
  let s = store().await;
  let err = s
    .update_relation(42, RelationPatch::default())
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::RelationNotFound(42)));
}

#[tokio::test]
async fn relation_delete_then_second_delete_is_not_found() {
  let s = store().await;
  let entropy = s.create_term(new_term("Entropy", "First.")).await.unwrap();
  let disorder = s.create_term(new_term("Disorder", "Second.")).await.unwrap();
  let created = s
    .create_relation(relation(entropy.id, disorder.id, RelationKind::IsA))
    .await
    .unwrap();

  s.delete_relation(created.id).await.unwrap();
  let err = s.delete_relation(created.id).await.unwrap_err();
  assert!(matches!(err, crate::Error::RelationNotFound(_)));
}

// ─── Graph ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn graph_pairs_full_listings() {
  let s = store().await;

  let mut entropy = new_term("Entropy", "A measure of disorder.");
  entropy.tags = Some(vec!["thermo".into(), "physics".into()]);
  let entropy = s.create_term(entropy).await.unwrap();
  let disorder = s
    .create_term(new_term("Disorder", "Lack of order."))
    .await
    .unwrap();
  let edge = s
    .create_relation(relation(entropy.id, disorder.id, RelationKind::RelatedTo))
    .await
    .unwrap();

  let hits = s.list_terms(&text_query("thermo")).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].term, "Entropy");

  let graph = s.graph().await.unwrap();
  let names: Vec<_> = graph.nodes.iter().map(|t| t.term.as_str()).collect();
  assert_eq!(names, ["Disorder", "Entropy"]);
  assert_eq!(graph.edges.len(), 1);
  assert_eq!(graph.edges[0].id, edge.id);
  assert_eq!(graph.edges[0].source_id, entropy.id);
  assert_eq!(graph.edges[0].target_id, disorder.id);
  assert_eq!(graph.edges[0].kind, RelationKind::RelatedTo);
}

#[tokio::test]
async fn graph_is_empty_on_a_fresh_store() {
  let s = store().await;
  let graph = s.graph().await.unwrap();
  assert!(graph.nodes.is_empty());
  assert!(graph.edges.is_empty());
}
