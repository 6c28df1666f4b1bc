//! Tests for node inspection and deletion

use crate::test_utils::fixtures::{WORKSPACE, node_path, seeded_store};
use crate::test_utils::scripted_store::{Gate, ScriptedStore};
use radm_application::{NodeInspectorImpl, NodeInspectorInterface};
use radm_domain::error::Error;
use radm_domain::value_objects::{NodePath, PropertyValue};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_get_node_returns_snapshot() {
    let inspector = NodeInspectorImpl::new(seeded_store());

    let node = inspector
        .get_node(&node_path("/models/com.acme/Vehicle"))
        .await
        .unwrap();
    assert_eq!(node.children, vec!["1.0.0", "1.1.0"]);
}

#[tokio::test]
async fn test_get_missing_node_is_not_found() {
    let inspector = NodeInspectorImpl::new(seeded_store());

    let err = inspector.get_node(&node_path("/nope")).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");

    let other_workspace = NodePath::new("elsewhere", "/models").unwrap();
    let err = inspector.get_node(&other_workspace).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let inspector = NodeInspectorImpl::new(seeded_store());
    let target = node_path("/models/org.example/Lamp/1.0.0");

    assert_eq!(inspector.delete_node(&target, false).await.unwrap(), 1);

    let err = inspector.get_node(&target).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    let parent = inspector
        .get_node(&node_path("/models/org.example/Lamp"))
        .await
        .unwrap();
    assert!(parent.children.is_empty());
}

#[tokio::test]
async fn test_delete_missing_node_is_not_found() {
    let inspector = NodeInspectorImpl::new(seeded_store());
    let err = inspector
        .delete_node(&node_path("/nope"), true)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_delete_with_children_requires_recursive() {
    let inspector = NodeInspectorImpl::new(seeded_store());
    let target = node_path("/models/com.acme/Vehicle");

    let err = inspector.delete_node(&target, false).await.unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }), "got {err:?}");
    assert!(inspector.get_node(&target).await.is_ok());

    assert_eq!(inspector.delete_node(&target, true).await.unwrap(), 3);
    assert!(inspector.get_node(&target).await.is_err());
}

#[tokio::test]
async fn test_root_cannot_be_deleted() {
    let inspector = NodeInspectorImpl::new(seeded_store());
    let root = NodePath::root(WORKSPACE).unwrap();

    let err = inspector.delete_node(&root, true).await.unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_referenced_node_cannot_be_deleted() {
    let store = seeded_store();
    let mut properties = BTreeMap::new();
    properties.insert(
        "target".to_string(),
        PropertyValue::Reference("/models/org.example/Switch/1.0.0".to_string()),
    );
    store
        .put_node(&node_path("/links/switch"), properties)
        .unwrap();

    let inspector = NodeInspectorImpl::new(store);
    let err = inspector
        .delete_node(&node_path("/models/org.example/Switch"), true)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }), "got {err:?}");

    // Removing the referrer together with the target is allowed
    assert!(inspector.delete_node(&node_path("/links"), true).await.is_ok());
    assert!(
        inspector
            .delete_node(&node_path("/models/org.example/Switch"), true)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_concurrent_deletes_of_same_node() {
    let inspector = Arc::new(NodeInspectorImpl::new(seeded_store()));
    let target = node_path("/models/org.example/Sensor/3.2.1");

    let (a, b) = tokio::join!(
        inspector.delete_node(&target, false),
        inspector.delete_node(&target, false)
    );

    let outcomes = [a, b];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        outcomes
            .iter()
            .any(|r| matches!(r, Err(Error::NotFound { .. })))
    );
    assert_eq!(inspector.active_node_locks(), 0);
}

#[tokio::test]
async fn test_node_locks_are_released() {
    let inspector = NodeInspectorImpl::new(seeded_store());

    inspector
        .delete_node(&node_path("/models/com.acme/Wheel/2.0.0"), false)
        .await
        .unwrap();
    let _ = inspector
        .delete_node(&node_path("/models/com.acme"), false)
        .await;

    assert_eq!(inspector.active_node_locks(), 0);
}

#[tokio::test]
async fn test_unreachable_store_is_service_unavailable() {
    let store = seeded_store();
    store.set_online(false);
    let inspector = NodeInspectorImpl::new(store);

    let err = inspector
        .get_node(&node_path("/models"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ServiceUnavailable { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_cancelled_deletes_release_node_locks() {
    let gate = Gate::armed();
    let store = ScriptedStore::new(seeded_store()).gated(gate.clone());
    let inspector = Arc::new(NodeInspectorImpl::new(Arc::new(store)));
    let target = node_path("/models/org.example/Sensor/3.2.1");

    // First delete parks inside the store while holding the node lock
    let parked = tokio::spawn({
        let inspector = inspector.clone();
        let target = target.clone();
        async move { inspector.delete_node(&target, false).await }
    });
    gate.wait_entered().await;

    // Second delete gives up while waiting for the lock
    let waited = tokio::time::timeout(
        Duration::from_millis(20),
        inspector.delete_node(&target, false),
    )
    .await;
    assert!(waited.is_err());
    assert_eq!(inspector.active_node_locks(), 1);

    parked.abort();
    assert!(parked.await.unwrap_err().is_cancelled());
    assert_eq!(inspector.active_node_locks(), 0);

    // Nothing was removed by the abandoned deletes
    assert!(inspector.get_node(&target).await.is_ok());
}
