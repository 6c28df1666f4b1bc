//! Diagnostics Service Use Case
//!
//! Scans namespace and model records for referential and structural
//! inconsistencies. A check that cannot be evaluated is recorded as a
//! `check.failed` finding so the scan always runs to completion.

use crate::ports::services::DiagnosticsServiceInterface;
use radm_domain::constants::{
    DIAG_CHECK_FAILED, DIAG_MODEL_MISSING_NODE, DIAG_MODEL_NAMESPACE_MISMATCH,
    DIAG_MODEL_UNRESOLVED_REFERENCE, DIAG_NAMESPACE_EMPTY, DIAG_NAMESPACE_INVALID_NAME,
    DIAG_NAMESPACE_MISSING_WORKSPACE, NAMESPACE_NAME_PATTERN,
};
use radm_domain::entities::{ModelId, ModelRecord, NamespaceRecord};
use radm_domain::error::{Error, Result};
use radm_domain::ports::providers::ContentStoreProvider;
use radm_domain::value_objects::Diagnostic;
use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use tracing::{info, warn};

static NAMESPACE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAMESPACE_NAME_PATTERN).expect("valid namespace pattern"));

/// Accumulator for findings in scan order
struct Findings {
    items: Vec<Diagnostic>,
    failed_checks: usize,
}

impl Findings {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            failed_checks: 0,
        }
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    fn record_failure(&mut self, check: &str, subject: &str, error: &Error) {
        warn!(check, subject, error = %error, "Diagnostic check failed");
        self.failed_checks += 1;
        self.items.push(
            Diagnostic::error(
                DIAG_CHECK_FAILED,
                format!("Check '{check}' could not be evaluated for {subject}: {error}"),
            )
            .with_subject(subject),
        );
    }
}

/// Diagnostics service implementation - read-only consistency scan
pub struct DiagnosticsServiceImpl {
    store: Arc<dyn ContentStoreProvider>,
}

impl DiagnosticsServiceImpl {
    /// Create a diagnostics service over the given store
    pub fn new(store: Arc<dyn ContentStoreProvider>) -> Self {
        Self { store }
    }

    async fn check_namespace(
        &self,
        namespace: &NamespaceRecord,
        models: Option<&[ModelRecord]>,
        findings: &mut Findings,
    ) {
        let subject = format!("namespace '{}'", namespace.name);

        if !NAMESPACE_NAME.is_match(&namespace.name) {
            findings.push(
                Diagnostic::warn(
                    DIAG_NAMESPACE_INVALID_NAME,
                    format!(
                        "[{}] is not a valid namespace name; expected dot-separated lowercase identifiers",
                        namespace.name
                    ),
                )
                .with_subject(&namespace.name),
            );
        }

        match self.store.workspace_exists(&namespace.workspace_id).await {
            Ok(true) => {}
            Ok(false) => findings.push(
                Diagnostic::error(
                    DIAG_NAMESPACE_MISSING_WORKSPACE,
                    format!(
                        "Namespace '{}' points at workspace '{}' which does not exist",
                        namespace.name, namespace.workspace_id
                    ),
                )
                .with_subject(&namespace.name),
            ),
            Err(e) => findings.record_failure(DIAG_NAMESPACE_MISSING_WORKSPACE, &subject, &e),
        }

        if models.is_some_and(<[ModelRecord]>::is_empty) {
            findings.push(
                Diagnostic::info(
                    DIAG_NAMESPACE_EMPTY,
                    format!("Namespace '{}' holds no models", namespace.name),
                )
                .with_subject(&namespace.name),
            );
        }
    }

    async fn check_model(
        &self,
        namespace: &NamespaceRecord,
        model: &ModelRecord,
        known: &HashSet<ModelId>,
        unlisted: &HashSet<&str>,
        findings: &mut Findings,
    ) {
        let id = model.id.to_string();

        if model.id.namespace != namespace.name {
            findings.push(
                Diagnostic::error(
                    DIAG_MODEL_NAMESPACE_MISMATCH,
                    format!(
                        "Model {id} is stored under namespace '{}'",
                        namespace.name
                    ),
                )
                .with_subject(&id),
            );
        }

        match self.store.get_node(&model.node).await {
            Ok(Some(_)) => {}
            Ok(None) => findings.push(
                Diagnostic::error(
                    DIAG_MODEL_MISSING_NODE,
                    format!("Model {id} has no backing node at {}", model.node),
                )
                .with_subject(&id),
            ),
            Err(e) => findings.record_failure(DIAG_MODEL_MISSING_NODE, &format!("model {id}"), &e),
        }

        // References into a namespace that could not be listed stay unjudged
        let unresolved = model
            .references
            .iter()
            .filter(|r| !known.contains(*r) && !unlisted.contains(r.namespace.as_str()));
        for reference in unresolved {
            findings.push(
                Diagnostic::warn(
                    DIAG_MODEL_UNRESOLVED_REFERENCE,
                    format!("Model {id} references {reference} which is not in the repository"),
                )
                .with_subject(&id),
            );
        }
    }
}

fn unreachable_store(error: Error) -> Error {
    match error {
        Error::ServiceUnavailable { .. } => error,
        other => Error::service_unavailable_with_source("Content store cannot be reached", other),
    }
}

#[async_trait::async_trait]
impl DiagnosticsServiceInterface for DiagnosticsServiceImpl {
    async fn run_diagnostics(&self) -> Result<Vec<Diagnostic>> {
        self.store.ping().await.map_err(unreachable_store)?;
        let namespaces = self
            .store
            .list_namespaces()
            .await
            .map_err(unreachable_store)?;

        let mut findings = Findings::new();

        // Model lists come first so reference checks can see every namespace
        let mut catalog = Vec::with_capacity(namespaces.len());
        for namespace in namespaces {
            let models = self.store.list_models(&namespace.name).await;
            catalog.push((namespace, models));
        }
        let known: HashSet<ModelId> = catalog
            .iter()
            .filter_map(|(_, models)| models.as_ref().ok())
            .flatten()
            .map(|model| model.id.clone())
            .collect();
        let unlisted: HashSet<&str> = catalog
            .iter()
            .filter(|(_, models)| models.is_err())
            .map(|(namespace, _)| namespace.name.as_str())
            .collect();

        for (namespace, models) in &catalog {
            let listed = models.as_ref().ok().map(Vec::as_slice);
            self.check_namespace(namespace, listed, &mut findings).await;

            match models {
                Ok(models) => {
                    for model in models {
                        self.check_model(namespace, model, &known, &unlisted, &mut findings)
                            .await;
                    }
                }
                Err(e) => findings.record_failure(
                    "namespace.models",
                    &format!("namespace '{}'", namespace.name),
                    e,
                ),
            }
        }

        info!(
            namespaces = catalog.len(),
            models = known.len(),
            findings = findings.items.len(),
            failed_checks = findings.failed_checks,
            "Diagnostics scan completed"
        );
        Ok(findings.items)
    }
}
