//! Domain layer constants
//!
//! Diagnostic codes and naming rules shared by the application layer.

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Namespace name does not follow the dot-separated identifier notation
pub const DIAG_NAMESPACE_INVALID_NAME: &str = "namespace.invalid_name";

/// Namespace points at a workspace that does not exist
pub const DIAG_NAMESPACE_MISSING_WORKSPACE: &str = "namespace.missing_workspace";

/// Namespace holds no models
pub const DIAG_NAMESPACE_EMPTY: &str = "namespace.empty";

/// Model id namespace differs from the namespace holding it
pub const DIAG_MODEL_NAMESPACE_MISMATCH: &str = "model.namespace_mismatch";

/// Model's backing node does not exist
pub const DIAG_MODEL_MISSING_NODE: &str = "model.missing_node";

/// Model references a model id that is not in the store
pub const DIAG_MODEL_UNRESOLVED_REFERENCE: &str = "model.unresolved_reference";

/// A check could not be evaluated
pub const DIAG_CHECK_FAILED: &str = "check.failed";

// ============================================================================
// NAMING
// ============================================================================

/// Pattern a namespace name must match
pub const NAMESPACE_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)*$";

// ============================================================================
// OPERATION NAMES
// ============================================================================

/// Name of the exclusive reindex operation
pub const OPERATION_REINDEX: &str = "reindex";
