//! Error taxonomy - fatal errors and recoverable diagnostics.
//!
//! Two tiers, matching the propagation policy of the resolver:
//! - [`RenderError`] - the only failure allowed to unwind a whole `render`
//!   call. Today that is exclusively the recursion depth guard.
//! - [`Diagnostic`] - subtree-local problems (unknown type, malformed
//!   children, missing handler/icon). These are caught at the node boundary,
//!   converted to placeholder output, and collected alongside the rendered
//!   tree so hosts can assert "zero diagnostics" without crashing a render.

use thiserror::Error;

// =============================================================================
// Fatal Errors
// =============================================================================

/// Errors that abort an entire `render` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The specification nests deeper than the configured maximum.
    ///
    /// Specifications originate from data that may be tooling- or
    /// attacker-generated, so unbounded recursion must fail deterministically
    /// instead of exhausting the call stack. This failure is global by
    /// design: it signals a structurally unsafe input, not one bad node.
    #[error("specification nesting exceeds maximum depth {max}")]
    RecursionDepthExceeded { max: usize },
}

// =============================================================================
// Diagnostics
// =============================================================================

/// The kind of a recoverable, subtree-local problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    /// `type` tag not present in the component registry.
    #[error("unknown component type `{type_tag}`")]
    UnknownType { type_tag: String },

    /// A handler-reference prop named an ID missing from the handler table.
    /// The interaction degrades to a no-op; the surrounding layout renders.
    #[error("handler `{id}` referenced by prop `{prop}` was not supplied")]
    HandlerNotFound { prop: String, id: String },

    /// An icon-reference prop named an icon missing from the icon table.
    #[error("icon `{name}` referenced by prop `{prop}` was not supplied")]
    IconNotFound { prop: String, name: String },

    /// `children` was neither absent, text, a node, nor an array of those.
    #[error("malformed children: {detail}")]
    MalformedChildren { detail: String },
}

/// One recoverable problem recorded during a resolution pass.
///
/// `path` is the slash-separated chain of `type` tags from the root down to
/// the node that produced the diagnostic, e.g. `Card/Group/Button`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub path: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}
