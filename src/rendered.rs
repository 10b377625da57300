//! Rendered tree - the output of a resolution pass.
//!
//! A [`RenderedNode`] is owned by the host view-runtime once produced; the
//! engine never mutates it after resolution. Structural equality is defined
//! so that two passes over the same specification with the same context
//! compare equal (bound handlers compare by reference ID, not by callback
//! identity), which is what makes idempotence testable.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::error::DiagnosticKind;

// =============================================================================
// Callback Types
// =============================================================================

/// A live event callback supplied by the host.
///
/// Rc<dyn Fn> rather than Box so the same callback can be bound at several
/// places in the tree and cloned into closures without ownership issues.
pub type Handler = Rc<dyn Fn(&Value)>;

/// A live icon-producing capability supplied by the host.
pub type IconFactory = Rc<dyn Fn() -> RenderedNode>;

// =============================================================================
// BoundHandler
// =============================================================================

/// A handler reference resolved against the host's handler table.
///
/// Keeps the original string reference next to the live callback so the
/// rendered tree stays structurally comparable and debuggable.
#[derive(Clone)]
pub struct BoundHandler {
    /// The opaque ID the specification used, e.g. `"save"`.
    pub reference: String,
    callback: Handler,
}

impl BoundHandler {
    pub fn new(reference: impl Into<String>, callback: Handler) -> Self {
        Self {
            reference: reference.into(),
            callback,
        }
    }

    /// A handler that does nothing, bound under the requested reference.
    /// Used when the host did not supply the referenced callback.
    pub fn noop(reference: impl Into<String>) -> Self {
        Self::new(reference, Rc::new(|_: &Value| {}))
    }

    /// Invoke the underlying callback.
    pub fn invoke(&self, payload: &Value) {
        (self.callback)(payload);
    }
}

impl PartialEq for BoundHandler {
    fn eq(&self, other: &Self) -> bool {
        // Callbacks have no useful identity; the reference is the identity.
        self.reference == other.reference
    }
}

impl std::fmt::Debug for BoundHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundHandler")
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Element
// =============================================================================

/// A resolved host element: the generic unit the catalog factories produce.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Host element tag, e.g. `"button"`.
    pub tag: String,
    /// Style classes, base classes first, then variant-resolved ones.
    pub classes: Vec<String>,
    /// Host attributes that survived prop reconciliation.
    pub attrs: BTreeMap<String, String>,
    /// Bound handlers keyed by the specification prop name (`"onClick"`).
    pub handlers: BTreeMap<String, BoundHandler>,
    pub children: Vec<RenderedNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Simulate an interaction: invoke the handler bound under `prop`.
    /// Returns false when nothing is bound there.
    pub fn trigger(&self, prop: &str, payload: &Value) -> bool {
        match self.handlers.get(prop) {
            Some(handler) => {
                handler.invoke(payload);
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Placeholder
// =============================================================================

/// Diagnostic placeholder emitted in place of a subtree that failed to
/// resolve. Siblings are unaffected; the matching [`crate::Diagnostic`] is
/// collected on the render output.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub kind: DiagnosticKind,
    /// Human-readable detail, e.g. the unknown type tag.
    pub detail: String,
}

// =============================================================================
// RenderedNode
// =============================================================================

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedNode {
    /// A text leaf. Numbers in the specification become text leaves too.
    Text(String),
    Element(Element),
    Placeholder(Placeholder),
}

impl RenderedNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            RenderedNode::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, RenderedNode::Placeholder(_))
    }

    /// Concatenated text content of this subtree, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            RenderedNode::Text(text) => out.push_str(text),
            RenderedNode::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            RenderedNode::Placeholder(_) => {}
        }
    }

    /// Depth-first search for the first element carrying a handler under
    /// `prop`. Convenience for interaction tests and the parity harness.
    pub fn find_handler(&self, prop: &str) -> Option<&Element> {
        let el = self.as_element()?;
        if el.handlers.contains_key(prop) {
            return Some(el);
        }
        el.children.iter().find_map(|child| child.find_handler(prop))
    }
}

impl From<Element> for RenderedNode {
    fn from(el: Element) -> Self {
        RenderedNode::Element(el)
    }
}
