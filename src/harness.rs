//! Dual-mode equivalence harness.
//!
//! Test-time consumer of the engine, not part of production resolution:
//! given a hand-built view subtree and a specification asserted to be its
//! equivalent, it renders the specification through the engine and checks
//! that the externally observable behavior of both trees is identical -
//! text content, interactive roles, attribute values, and which handler
//! references are bound where.
//!
//! This is the acceptance gate for the catalog: a capability is not correct
//! until a specification-driven render of it is indistinguishable from a
//! hand-built one. See `tests/parity.rs`.

use std::collections::BTreeMap;

use crate::engine::{ComponentRegistry, RenderOptions, RenderOutput, render_with};
use crate::rendered::RenderedNode;
use crate::spec::SpecNode;

// =============================================================================
// Observation
// =============================================================================

/// The externally observable projection of a rendered tree, in document
/// order. Two trees with equal observations are behaviorally
/// indistinguishable to a host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Observation {
    /// Concatenated text content.
    pub text: String,
    /// `role` attribute values, where present.
    pub roles: Vec<String>,
    /// Host element tags, so a `div` and a `button` never pass as
    /// equivalent on attributes alone.
    pub tags: Vec<String>,
    /// Per-element attributes, with classes folded in as a synthesized
    /// `class` attribute.
    pub attributes: Vec<BTreeMap<String, String>>,
    /// `(prop, reference)` pairs for every bound handler.
    pub interactions: Vec<(String, String)>,
    /// Diagnostic placeholders encountered.
    pub placeholders: usize,
}

/// Project a rendered tree onto its observable behavior.
pub fn observe(node: &RenderedNode) -> Observation {
    let mut observation = Observation::default();
    walk(node, &mut observation);
    observation.text = node.text_content();
    observation
}

fn walk(node: &RenderedNode, observation: &mut Observation) {
    match node {
        RenderedNode::Text(_) => {}
        RenderedNode::Placeholder(_) => observation.placeholders += 1,
        RenderedNode::Element(el) => {
            observation.tags.push(el.tag.clone());

            if let Some(role) = el.attrs.get("role") {
                observation.roles.push(role.clone());
            }

            let mut attrs = el.attrs.clone();
            if !el.classes.is_empty() {
                attrs.insert("class".to_string(), el.classes.join(" "));
            }
            observation.attributes.push(attrs);

            for (prop, handler) in &el.handlers {
                observation
                    .interactions
                    .push((prop.clone(), handler.reference.clone()));
            }

            for child in &el.children {
                walk(child, observation);
            }
        }
    }
}

// =============================================================================
// Equivalence Assertion
// =============================================================================

/// Render `spec` through the engine and assert it is behaviorally
/// indistinguishable from the hand-built `manual` subtree.
///
/// Panics on any observable difference, on diagnostics, or on a failed
/// render. Returns the render output so callers can go on to simulate
/// interactions against the specification-driven tree.
pub fn assert_equivalent(
    registry: &ComponentRegistry,
    manual: &RenderedNode,
    spec: &SpecNode,
    options: RenderOptions,
) -> RenderOutput {
    let output = match render_with(registry, spec, options) {
        Ok(output) => output,
        Err(err) => panic!("specification for `{}` failed to render: {err}", spec.type_tag),
    };

    assert!(
        output.is_clean(),
        "specification for `{}` produced diagnostics: {:#?}",
        spec.type_tag,
        output.diagnostics
    );

    let expected = observe(manual);
    let actual = observe(&output.root);
    assert_eq!(
        expected, actual,
        "hand-built and specification-driven `{}` trees are observably different",
        spec.type_tag
    );

    output
}
