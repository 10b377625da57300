//! # specui
//!
//! Server-driven UI resolution engine: describe a UI as plain, serializable
//! data and let the engine turn it into a live view tree.
//!
//! ## Architecture
//!
//! A specification is pure data - a `type` tag, opaque props, polymorphic
//! children. The resolver walks it depth-first, dispatching each node to a
//! registered capability, normalizing children at the node boundary, and
//! substituting the two data-to-behavior indirections (handler references
//! and icon references) from host-supplied tables:
//!
//! ```text
//! SpecNode + ResolveContext → Resolver → Prop Reconciler → Capability → RenderedNode
//! ```
//!
//! Subtree-local failures become diagnostic placeholders; only the recursion
//! depth guard aborts a whole render. The output tree is owned by the host
//! view-runtime, which is also responsible for any diffing between passes.
//!
//! ## Example
//!
//! ```
//! use specui::{SpecNode, RenderOptions, render};
//!
//! let spec = SpecNode::from_value(serde_json::json!({
//!     "type": "Group",
//!     "spacing": "md",
//!     "children": [
//!         { "type": "Button", "variant": "primary", "children": "A" },
//!         { "type": "Button", "children": "B" }
//!     ]
//! })).unwrap();
//!
//! let output = render(&spec, RenderOptions::default()).unwrap();
//! assert!(output.is_clean());
//! ```
//!
//! ## Modules
//!
//! - [`spec`] - the specification node model (boundary JSON shape)
//! - [`engine`] - registry, resolver, prop reconciler, resolution context
//! - [`rendered`] - the rendered tree the host consumes
//! - [`theme`] - variant/size tag to style-class resolution
//! - [`catalog`] - built-in capabilities (layout, typography, controls, display)
//! - [`harness`] - dual-mode equivalence harness for parity testing

pub mod catalog;
pub mod engine;
pub mod error;
pub mod harness;
pub mod rendered;
pub mod spec;
pub mod theme;

// Re-export commonly used items
pub use engine::{
    Capability, ComponentRegistry, DEFAULT_MAX_DEPTH, Factory, FinalProps, HandlerTable,
    IconTable, RenderOptions, RenderOutput, register_component, render, render_with,
    with_default_registry,
};

pub use error::{Diagnostic, DiagnosticKind, RenderError};

pub use rendered::{BoundHandler, Element, Handler, IconFactory, Placeholder, RenderedNode};

pub use spec::SpecNode;

pub use theme::VariantRule;

pub use harness::{Observation, assert_equivalent, observe};
