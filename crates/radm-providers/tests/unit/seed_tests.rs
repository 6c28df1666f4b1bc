//! Tests for store fixtures

use radm_domain::value_objects::NodePath;
use radm_providers::ContentStoreProvider;
use radm_providers::content_store::{InMemoryContentStore, StoreSeed};
use std::io::Write;

const SEED: &str = r#"{
  "workspaces": [
    {
      "id": "ws1",
      "nodes": [
        { "path": "/com/acme/Vehicle/1.0.0",
          "properties": { "title": { "type": "string", "value": "Vehicle" } } }
      ]
    }
  ],
  "namespaces": [
    {
      "name": "com.acme",
      "workspaceId": "ws1",
      "models": [
        {
          "id": { "namespace": "com.acme", "name": "Vehicle", "version": "1.0.0" },
          "displayName": "Vehicle",
          "node": { "workspaceId": "ws1", "path": "/com/acme/Vehicle/1.0.0" }
        }
      ]
    },
    { "name": "org.empty", "workspaceId": "ws1" }
  ]
}"#;

#[tokio::test]
async fn test_seed_populates_store() {
    let store = InMemoryContentStore::from_seed(StoreSeed::from_json(SEED).unwrap()).unwrap();

    let namespaces = store.list_namespaces().await.unwrap();
    assert_eq!(namespaces.len(), 2);
    assert_eq!(namespaces[0].name, "com.acme");
    assert!(namespaces[0].revision > 0);

    let models = store.list_models("com.acme").await.unwrap();
    assert_eq!(models.len(), 1);
    assert!(models[0].revision > namespaces[0].revision);
    assert!(store.list_models("org.empty").await.unwrap().is_empty());

    let node = store
        .get_node(&NodePath::new("ws1", "/com/acme/Vehicle/1.0.0").unwrap())
        .await
        .unwrap();
    assert!(node.is_some());
}

#[tokio::test]
async fn test_seed_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();

    let seed = StoreSeed::from_file(file.path()).unwrap();
    assert_eq!(seed.workspaces.len(), 1);
    assert_eq!(seed.namespaces[0].models.len(), 1);
}

#[test]
fn test_seed_rejects_invalid_node_path() {
    let seed = StoreSeed::from_json(r#"{"workspaces":[{"id":"ws","nodes":[{"path":"relative"}]}]}"#)
        .unwrap();
    assert!(InMemoryContentStore::from_seed(seed).is_err());
}

#[test]
fn test_missing_seed_file_is_io_error() {
    let err = StoreSeed::from_file(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, radm_domain::error::Error::Io { .. }));
}
