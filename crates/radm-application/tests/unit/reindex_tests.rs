//! Tests for the reindex service

use crate::test_utils::fixtures::{model, namespace, put_model_with_node, seeded_store};
use crate::test_utils::scripted_store::{Gate, ScriptedStore};
use radm_application::{ReindexServiceImpl, ReindexServiceInterface};
use radm_domain::entities::ModelId;
use radm_domain::error::Error;
use radm_domain::ports::providers::SearchIndexProvider;
use radm_domain::value_objects::{ReindexMode, ReindexResult};
use radm_providers::content_store::InMemoryContentStore;
use radm_providers::search_index::InMemorySearchIndex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn counts(namespaces: usize, models: usize) -> ReindexResult {
    ReindexResult {
        namespaces_indexed: namespaces,
        models_indexed: models,
    }
}

fn service_over(store: Arc<InMemoryContentStore>) -> (ReindexServiceImpl, Arc<InMemorySearchIndex>) {
    let index = Arc::new(InMemorySearchIndex::new());
    (ReindexServiceImpl::new(store, index.clone()), index)
}

#[tokio::test]
async fn test_force_then_incremental() {
    let (service, _) = service_over(seeded_store());

    assert_eq!(service.reindex(true).await.unwrap(), counts(3, 10));
    assert_eq!(service.reindex(false).await.unwrap(), counts(0, 0));
}

#[tokio::test]
async fn test_first_incremental_indexes_everything() {
    let (service, _) = service_over(seeded_store());
    assert_eq!(service.reindex(false).await.unwrap(), counts(3, 10));
}

#[tokio::test]
async fn test_force_is_idempotent() {
    let (service, index) = service_over(seeded_store());

    let first = service.reindex(true).await.unwrap();
    let after_first = index.snapshot();
    let second = service.reindex(true).await.unwrap();
    let after_second = index.snapshot();

    assert_eq!(first, second);
    assert_eq!(after_first.namespaces, after_second.namespaces);
    assert_eq!(after_first.models, after_second.models);
}

#[tokio::test]
async fn test_incremental_picks_up_changes_only() {
    let store = seeded_store();
    let (service, _) = service_over(store.clone());
    service.reindex(true).await.unwrap();

    // Rewrite one model and add an empty namespace
    store
        .put_model("com.acme", model("com.acme", "Engine", "1.0.0", &[]))
        .unwrap();
    store.put_namespace(namespace("net.empty"));

    assert_eq!(service.reindex(false).await.unwrap(), counts(1, 1));
    assert_eq!(service.reindex(false).await.unwrap(), counts(0, 0));
}

#[tokio::test]
async fn test_removed_records_leave_the_index() {
    let store = seeded_store();
    let (service, _) = service_over(store.clone());
    service.reindex(true).await.unwrap();
    assert_eq!(service.search("lamp").len(), 1);

    store.remove_namespace("org.example");
    service.reindex(false).await.unwrap();

    assert!(service.search("lamp").is_empty());
    assert_eq!(service.search("").len(), 7);
}

#[tokio::test]
async fn test_search_matches_committed_documents() {
    let store = seeded_store();
    let (service, _) = service_over(store.clone());
    assert!(service.search("vehicle").is_empty());

    service.reindex(false).await.unwrap();
    assert_eq!(
        service.search("VEHICLE"),
        vec![
            ModelId::new("com.acme", "Vehicle", "1.0.0"),
            ModelId::new("com.acme", "Vehicle", "1.1.0"),
        ]
    );

    // Uncommitted writes are invisible until the next run
    put_model_with_node(&store, model("com.acme", "Vehicle", "2.0.0", &[]));
    assert_eq!(service.search("vehicle").len(), 2);
    service.reindex(false).await.unwrap();
    assert_eq!(service.search("vehicle").len(), 3);
}

#[tokio::test]
async fn test_failed_run_keeps_previous_snapshot() {
    let store = seeded_store();
    let index = Arc::new(InMemorySearchIndex::new());

    let healthy = ReindexServiceImpl::new(store.clone(), index.clone());
    healthy.reindex(true).await.unwrap();
    let committed = index.snapshot();

    store
        .put_model("org.example", model("org.example", "Lamp", "1.0.0", &[]))
        .unwrap();
    let broken = ReindexServiceImpl::new(
        Arc::new(ScriptedStore::new(store).failing_namespace("org.example")),
        index.clone(),
    );
    let err = broken.reindex(false).await.unwrap_err();
    assert!(matches!(err, Error::ReindexFailed { .. }), "got {err:?}");

    let current = index.snapshot();
    assert_eq!(current.committed_at, committed.committed_at);
    assert_eq!(current.models, committed.models);
    assert!(broken.status().await.last_run.is_none());
}

#[tokio::test]
async fn test_overlapping_run_is_busy() {
    let gate = Gate::armed();
    let store = ScriptedStore::new(seeded_store()).gated(gate.clone());
    let service = Arc::new(ReindexServiceImpl::new(
        Arc::new(store),
        Arc::new(InMemorySearchIndex::new()),
    ));

    let first = tokio::spawn({
        let service = service.clone();
        async move { service.reindex(true).await }
    });
    gate.wait_entered().await;

    assert!(service.status().await.running);
    let err = service.reindex(false).await.unwrap_err();
    assert!(matches!(err, Error::Busy { .. }), "got {err:?}");

    gate.open();
    assert_eq!(first.await.unwrap().unwrap(), counts(3, 10));
    assert!(!service.status().await.running);

    // Lock is free again once the first run finished
    assert_eq!(service.reindex(false).await.unwrap(), counts(0, 0));
}

#[tokio::test]
async fn test_status_reports_last_run() {
    let (service, _) = service_over(seeded_store());

    let idle = service.status().await;
    assert!(!idle.running);
    assert!(idle.last_run.is_none());

    service.reindex(true).await.unwrap();
    service.reindex(false).await.unwrap();

    let last = service.status().await.last_run.unwrap();
    assert_eq!(last.mode, ReindexMode::Incremental);
    assert_eq!(last.result, counts(0, 0));
}

#[tokio::test]
async fn test_unreachable_store_fails_run() {
    let store = seeded_store();
    store.set_online(false);
    let (service, index) = service_over(store);

    let err = service.reindex(true).await.unwrap_err();
    assert!(matches!(err, Error::ReindexFailed { .. }), "got {err:?}");
    assert!(index.snapshot().committed_at.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_status_polling_never_makes_runs_busy() {
    let (service, _) = service_over(seeded_store());
    let service = Arc::new(service);
    let stop = Arc::new(AtomicBool::new(false));

    let pollers: Vec<_> = (0..3)
        .map(|_| {
            let service = service.clone();
            let stop = stop.clone();
            tokio::spawn(async move {
                while !stop.load(Ordering::Relaxed) {
                    let _ = service.status().await;
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    let mut busy = 0;
    for _ in 0..2_000 {
        if let Err(Error::Busy { .. }) = service.reindex(false).await {
            busy += 1;
        }
        tokio::task::yield_now().await;
    }
    stop.store(true, Ordering::Relaxed);
    for poller in pollers {
        poller.await.unwrap();
    }

    assert_eq!(busy, 0, "sequential runs were rejected as busy");
}

#[tokio::test]
async fn test_cancelled_run_clears_running_flag() {
    let gate = Gate::armed();
    let store = ScriptedStore::new(seeded_store()).gated(gate.clone());
    let service = Arc::new(ReindexServiceImpl::new(
        Arc::new(store),
        Arc::new(InMemorySearchIndex::new()),
    ));

    let run = tokio::spawn({
        let service = service.clone();
        async move { service.reindex(true).await }
    });
    gate.wait_entered().await;
    assert!(service.status().await.running);

    run.abort();
    assert!(run.await.unwrap_err().is_cancelled());

    let status = service.status().await;
    assert!(!status.running);
    assert!(status.last_run.is_none());
    assert_eq!(service.reindex(false).await.unwrap(), counts(3, 10));
}
