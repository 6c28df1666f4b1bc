//! Reindex Service Use Case
//!
//! Rebuilds the search index over namespaces and models. Only one run may
//! hold the reindex lock; a second request is rejected with `Busy` instead
//! of waiting. A run assembles the next snapshot privately and publishes it
//! with a single commit, so a failed or abandoned run leaves the previous
//! snapshot in place.

use crate::ports::services::ReindexServiceInterface;
use chrono::Utc;
use radm_domain::constants::OPERATION_REINDEX;
use radm_domain::entities::ModelId;
use radm_domain::error::{Error, Result};
use radm_domain::ports::providers::{ContentStoreProvider, SearchIndexProvider};
use radm_domain::value_objects::{
    IndexSnapshot, IndexedModel, ReindexMode, ReindexResult, ReindexRun, ReindexStatus,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

/// Reindex service implementation
pub struct ReindexServiceImpl {
    store: Arc<dyn ContentStoreProvider>,
    index: Arc<dyn SearchIndexProvider>,
    run_lock: Mutex<()>,
    running: AtomicBool,
    last_run: RwLock<Option<ReindexRun>>,
}

/// Clears the running flag when a run ends, including when it is dropped at a deadline
struct RunningFlag<'a>(&'a AtomicBool);

impl<'a> RunningFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for RunningFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ReindexServiceImpl {
    /// Create a reindex service over the given store and index
    pub fn new(store: Arc<dyn ContentStoreProvider>, index: Arc<dyn SearchIndexProvider>) -> Self {
        Self {
            store,
            index,
            run_lock: Mutex::new(()),
            running: AtomicBool::new(false),
            last_run: RwLock::new(None),
        }
    }

    /// Build the next snapshot from the store without publishing it
    async fn build_snapshot(
        &self,
        mode: ReindexMode,
        previous: &IndexSnapshot,
    ) -> Result<(IndexSnapshot, ReindexResult)> {
        let force = mode == ReindexMode::Force;
        let namespaces = self
            .store
            .list_namespaces()
            .await
            .map_err(|e| Error::reindex_failed_with_source("Failed to list namespaces", e))?;

        let mut next = IndexSnapshot::default();
        let mut result = ReindexResult::default();

        for namespace in namespaces {
            if force || previous.namespaces.get(&namespace.name) != Some(&namespace.revision) {
                result.namespaces_indexed += 1;
            }

            let models = self.store.list_models(&namespace.name).await.map_err(|e| {
                Error::reindex_failed_with_source(
                    format!("Failed to list models of namespace '{}'", namespace.name),
                    e,
                )
            })?;

            for model in models {
                let unchanged = previous
                    .models
                    .get(&model.id)
                    .filter(|indexed| !force && indexed.revision == model.revision)
                    .cloned();
                let entry = match unchanged {
                    Some(indexed) => indexed,
                    None => {
                        result.models_indexed += 1;
                        IndexedModel {
                            revision: model.revision,
                            document: model.search_document(),
                        }
                    }
                };
                next.models.insert(model.id, entry);
            }

            next.namespaces.insert(namespace.name, namespace.revision);
        }

        next.committed_at = Some(Utc::now());
        Ok((next, result))
    }
}

#[async_trait::async_trait]
impl ReindexServiceInterface for ReindexServiceImpl {
    async fn reindex(&self, force: bool) -> Result<ReindexResult> {
        let Ok(_guard) = self.run_lock.try_lock() else {
            warn!(force, "Rejected reindex request while another run is active");
            return Err(Error::busy(OPERATION_REINDEX));
        };
        // Declared after the guard so the flag drops before the lock is released
        let _running = RunningFlag::raise(&self.running);

        let mode = ReindexMode::from_force(force);
        let started = Instant::now();
        info!(%mode, "Reindex started");

        let previous = self.index.snapshot();
        let (next, result) = match self.build_snapshot(mode, &previous).await {
            Ok(built) => built,
            Err(e) => {
                warn!(%mode, error = %e, "Reindex failed; previous index kept");
                return Err(e);
            }
        };

        self.index
            .commit(next)
            .await
            .map_err(|e| Error::reindex_failed_with_source("Failed to publish index snapshot", e))?;

        *self.last_run.write().await = Some(ReindexRun {
            mode,
            result,
            finished_at: Utc::now(),
        });

        info!(
            %mode,
            namespaces = result.namespaces_indexed,
            models = result.models_indexed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Reindex committed"
        );
        Ok(result)
    }

    async fn status(&self) -> ReindexStatus {
        ReindexStatus {
            running: self.running.load(Ordering::Acquire),
            last_run: self.last_run.read().await.clone(),
        }
    }

    fn search(&self, expression: &str) -> Vec<ModelId> {
        self.index.snapshot().search(expression)
    }
}
