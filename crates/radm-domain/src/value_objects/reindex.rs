//! Reindex results and committed index state

use crate::entities::ModelId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Counts produced by one reindex run
///
/// Built once at the end of a run; never updated in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReindexResult {
    /// Namespaces (re)indexed by the run
    pub namespaces_indexed: usize,
    /// Models (re)indexed by the run
    pub models_indexed: usize,
}

/// Which records a reindex run considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReindexMode {
    /// Only records changed since the last committed run
    Incremental,
    /// Every record, ignoring change tracking
    Force,
}

impl ReindexMode {
    /// Mode for the `force` flag of a reindex request
    pub fn from_force(force: bool) -> Self {
        if force { Self::Force } else { Self::Incremental }
    }
}

impl fmt::Display for ReindexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incremental => f.write_str("incremental"),
            Self::Force => f.write_str("force"),
        }
    }
}

/// Record of the last successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReindexRun {
    /// Mode of the run
    pub mode: ReindexMode,
    /// Counts it produced
    pub result: ReindexResult,
    /// When it committed
    pub finished_at: DateTime<Utc>,
}

/// Current reindex state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReindexStatus {
    /// Whether a run holds the reindex lock
    pub running: bool,
    /// Last successful run, if any
    pub last_run: Option<ReindexRun>,
}

/// Search document for one indexed model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedModel {
    /// Store revision the document was built from
    pub revision: u64,
    /// Lowercased searchable text
    pub document: String,
}

/// Committed index state
///
/// Readers only ever observe complete snapshots; a run builds the next one
/// privately and publishes it in a single step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSnapshot {
    /// Indexed revision per namespace name
    pub namespaces: HashMap<String, u64>,
    /// Indexed document per model, ordered by id
    pub models: BTreeMap<ModelId, IndexedModel>,
    /// Commit time, `None` for the initial empty index
    pub committed_at: Option<DateTime<Utc>>,
}

impl IndexSnapshot {
    /// Models whose document contains `expression`, case-insensitively
    ///
    /// An empty expression matches every indexed model.
    pub fn search(&self, expression: &str) -> Vec<ModelId> {
        let needle = expression.trim().to_lowercase();
        self.models
            .iter()
            .filter(|(_, model)| needle.is_empty() || model.document.contains(&needle))
            .map(|(id, _)| id.clone())
            .collect()
    }
}
