//! Engine - registry, resolution context, resolver, prop reconciler.
//!
//! The sole production entry points are [`render`] (default registry) and
//! [`render_with`] (explicit registry). Resolution is synchronous and
//! single-threaded: a call walks the tree depth-first with no suspension
//! points, either completing or aborting atomically on the depth guard.
//! Partial trees are never exposed. Re-resolution re-runs the full
//! algorithm; diffing against a previous tree belongs to the host
//! view-runtime.

pub mod context;
pub mod props;
pub mod registry;
mod resolver;

pub use context::{DEFAULT_MAX_DEPTH, HandlerTable, IconTable, ResolveContext};
pub use props::FinalProps;
pub use registry::{
    Capability, ComponentRegistry, Factory, register_component, with_default_registry,
};

use crate::error::{Diagnostic, RenderError};
use crate::rendered::RenderedNode;
use crate::spec::SpecNode;

// =============================================================================
// Render Options
// =============================================================================

/// Per-call configuration: the host-supplied indirection tables and the
/// depth limit. Built once before a render; read-only during the pass.
#[derive(Clone)]
pub struct RenderOptions {
    pub handlers: HandlerTable,
    pub icons: IconTable,
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            handlers: HandlerTable::new(),
            icons: IconTable::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// =============================================================================
// Render Output
// =============================================================================

/// A completed resolution pass: the rendered tree plus every recoverable
/// problem encountered along the way.
#[derive(Debug)]
pub struct RenderOutput {
    pub root: RenderedNode,
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderOutput {
    /// True when the pass produced no diagnostics. Hosts and tests assert
    /// this as a correctness property.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Resolve a specification through the default registry.
pub fn render(spec: &SpecNode, options: RenderOptions) -> Result<RenderOutput, RenderError> {
    with_default_registry(|registry| render_with(registry, spec, options))
}

/// Resolve a specification through an explicit registry.
///
/// The registry is sealed by its first render; registration is expected to
/// be finished by then.
pub fn render_with(
    registry: &ComponentRegistry,
    spec: &SpecNode,
    options: RenderOptions,
) -> Result<RenderOutput, RenderError> {
    registry.seal();
    let ctx = ResolveContext::new(options.handlers, options.icons, options.max_depth);
    let root = resolver::resolve_node(spec, registry, &ctx)?;
    Ok(RenderOutput {
        root,
        diagnostics: ctx.take_diagnostics(),
    })
}
