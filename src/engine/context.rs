//! Resolution context - per-render state and indirection tables.
//!
//! A [`ResolveContext`] is created fresh for every top-level `render` call
//! and carries the two host-supplied side tables (handlers and icons), the
//! depth guard, and the diagnostics sink. The tables are read-only for the
//! duration of the pass; the depth counter is the only mutable state and is
//! local to the call, so independent renders never interfere.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use tracing::warn;

use crate::error::{Diagnostic, DiagnosticKind, RenderError};
use crate::rendered::{BoundHandler, Handler, IconFactory, Placeholder, RenderedNode};

/// Maximum nesting depth when the host does not configure one.
///
/// Specification trees originate from data that may be attacker- or
/// tooling-generated, so the guard is mandatory, not an optimization.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Host-supplied map from opaque string ID to a live callback.
pub type HandlerTable = HashMap<String, Handler>;

/// Host-supplied map from icon name to a live icon-producing capability.
pub type IconTable = HashMap<String, IconFactory>;

// =============================================================================
// ResolveContext
// =============================================================================

/// State threaded through one resolution pass.
pub struct ResolveContext {
    handlers: HandlerTable,
    icons: IconTable,
    max_depth: usize,
    depth: Cell<usize>,
    /// Chain of type tags from the root to the node being resolved.
    path: RefCell<Vec<String>>,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl ResolveContext {
    pub fn new(handlers: HandlerTable, icons: IconTable, max_depth: usize) -> Self {
        Self {
            handlers,
            icons,
            max_depth,
            depth: Cell::new(0),
            path: RefCell::new(Vec::new()),
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    // =========================================================================
    // Depth Guard
    // =========================================================================

    /// Enter a node: bump the depth counter and extend the diagnostic path.
    ///
    /// The depth failure is the one error that aborts the whole render; it
    /// signals a structurally unsafe input rather than a single bad node.
    pub(crate) fn enter(&self, type_tag: &str) -> Result<(), RenderError> {
        let depth = self.depth.get() + 1;
        if depth > self.max_depth {
            return Err(RenderError::RecursionDepthExceeded {
                max: self.max_depth,
            });
        }
        self.depth.set(depth);
        self.path.borrow_mut().push(type_tag.to_string());
        Ok(())
    }

    /// Leave a node: undo what [`enter`](Self::enter) did.
    pub(crate) fn leave(&self) {
        self.depth.set(self.depth.get().saturating_sub(1));
        self.path.borrow_mut().pop();
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Current slash-separated node path, e.g. `Card/Group/Button`.
    pub(crate) fn current_path(&self) -> String {
        self.path.borrow().join("/")
    }

    /// Record a recoverable problem at the current path.
    pub(crate) fn report(&self, kind: DiagnosticKind) {
        warn!(path = %self.current_path(), "{kind}");
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::new(kind, self.current_path()));
    }

    /// Drain collected diagnostics at the end of the pass.
    pub(crate) fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    // =========================================================================
    // Indirection Lookups
    // =========================================================================

    /// Resolve a handler reference. A missing ID degrades to a no-op bound
    /// under the same reference: a missing behavior should not prevent the
    /// surrounding layout from rendering.
    pub(crate) fn lookup_handler(&self, prop: &str, id: &str) -> BoundHandler {
        match self.handlers.get(id) {
            Some(callback) => BoundHandler::new(id, callback.clone()),
            None => {
                self.report(DiagnosticKind::HandlerNotFound {
                    prop: prop.to_string(),
                    id: id.to_string(),
                });
                BoundHandler::noop(id)
            }
        }
    }

    /// Resolve an icon reference. A missing name degrades to a placeholder
    /// icon node.
    pub(crate) fn lookup_icon(&self, prop: &str, name: &str) -> RenderedNode {
        match self.icons.get(name) {
            Some(factory) => factory(),
            None => {
                let kind = DiagnosticKind::IconNotFound {
                    prop: prop.to_string(),
                    name: name.to_string(),
                };
                self.report(kind.clone());
                RenderedNode::Placeholder(Placeholder {
                    kind,
                    detail: name.to_string(),
                })
            }
        }
    }
}
