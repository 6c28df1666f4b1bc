//! Tests for the in-memory search index

use radm_domain::entities::ModelId;
use radm_domain::value_objects::{IndexSnapshot, IndexedModel};
use radm_providers::SearchIndexProvider;
use radm_providers::search_index::InMemorySearchIndex;

#[tokio::test]
async fn test_starts_empty() {
    let index = InMemorySearchIndex::new();
    let snapshot = index.snapshot();
    assert!(snapshot.models.is_empty());
    assert!(snapshot.committed_at.is_none());
}

#[tokio::test]
async fn test_commit_replaces_snapshot_and_keeps_old_readers() {
    let index = InMemorySearchIndex::new();
    let before = index.snapshot();

    let mut next = IndexSnapshot::default();
    next.namespaces.insert("com.acme".into(), 1);
    next.models.insert(
        ModelId::new("com.acme", "Lamp", "1.0.0"),
        IndexedModel {
            revision: 2,
            document: "com.acme:lamp:1.0.0".into(),
        },
    );
    index.commit(next).await.unwrap();

    // Readers holding the old Arc still see the old state
    assert!(before.models.is_empty());
    let after = index.snapshot();
    assert_eq!(after.models.len(), 1);
    assert_eq!(after.namespaces.get("com.acme"), Some(&1));
}
