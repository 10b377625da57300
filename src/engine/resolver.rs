//! Resolver - the recursive specification-to-view algorithm.
//!
//! Per node: depth guard, registry lookup, children normalization, prop
//! reconciliation, factory invocation. Traversal is top-down but children
//! are fully materialized before the parent factory runs, so container
//! capabilities always receive ready-made subtrees, never raw specification
//! data.
//!
//! Failure policy: everything subtree-local (unknown type, malformed
//! children, missing references) is converted to a placeholder at the node
//! boundary and recorded as a diagnostic; siblings are unaffected. Only the
//! depth guard unwinds the whole call, via `?` on [`RenderError`].

use serde_json::Value;

use crate::engine::context::ResolveContext;
use crate::engine::props;
use crate::engine::registry::ComponentRegistry;
use crate::error::{DiagnosticKind, RenderError};
use crate::rendered::{Placeholder, RenderedNode};
use crate::spec::SpecNode;

// =============================================================================
// Node Resolution
// =============================================================================

/// Resolve one specification node into one rendered node.
pub(crate) fn resolve_node(
    node: &SpecNode,
    registry: &ComponentRegistry,
    ctx: &ResolveContext,
) -> Result<RenderedNode, RenderError> {
    ctx.enter(&node.type_tag)?;
    let result = resolve_entered(node, registry, ctx);
    ctx.leave();
    result
}

fn resolve_entered(
    node: &SpecNode,
    registry: &ComponentRegistry,
    ctx: &ResolveContext,
) -> Result<RenderedNode, RenderError> {
    let Some(capability) = registry.resolve(&node.type_tag) else {
        let kind = DiagnosticKind::UnknownType {
            type_tag: node.type_tag.clone(),
        };
        ctx.report(kind.clone());
        return Ok(RenderedNode::Placeholder(Placeholder {
            kind,
            detail: node.type_tag.clone(),
        }));
    };

    let children = normalize_children(node.children.as_ref(), registry, ctx)?;
    let final_props = props::reconcile(&capability, &node.props, ctx);
    Ok(capability.produce(&final_props, children))
}

// =============================================================================
// Children Normalization
// =============================================================================

/// Normalize the polymorphic `children` value to one canonical ordered
/// sequence of resolved children. All shape polymorphism is handled here,
/// once, at the node boundary; factories never branch on it.
fn normalize_children(
    children: Option<&Value>,
    registry: &ComponentRegistry,
    ctx: &ResolveContext,
) -> Result<Vec<RenderedNode>, RenderError> {
    let Some(children) = children else {
        return Ok(Vec::new());
    };

    match children {
        Value::String(text) => Ok(vec![RenderedNode::Text(text.clone())]),
        Value::Number(number) => Ok(vec![RenderedNode::Text(number.to_string())]),
        Value::Object(_) => Ok(vec![resolve_child_value(children, registry, ctx)?]),
        Value::Array(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for entry in entries {
                match entry {
                    Value::String(text) => out.push(RenderedNode::Text(text.clone())),
                    Value::Number(number) => out.push(RenderedNode::Text(number.to_string())),
                    Value::Object(_) => out.push(resolve_child_value(entry, registry, ctx)?),
                    other => out.push(malformed(ctx, format!("array entry {other}"))),
                }
            }
            Ok(out)
        }
        other => Ok(vec![malformed(ctx, format!("{other}"))]),
    }
}

/// Resolve an object child: parse it as a node, then recurse. An object that
/// is not a well-formed node (no string `type`) degrades to a placeholder in
/// that position; siblings continue.
fn resolve_child_value(
    value: &Value,
    registry: &ComponentRegistry,
    ctx: &ResolveContext,
) -> Result<RenderedNode, RenderError> {
    match SpecNode::from_value(value.clone()) {
        Ok(node) => resolve_node(&node, registry, ctx),
        Err(err) => Ok(malformed(ctx, format!("object is not a node: {err}"))),
    }
}

fn malformed(ctx: &ResolveContext, detail: String) -> RenderedNode {
    let kind = DiagnosticKind::MalformedChildren {
        detail: detail.clone(),
    };
    ctx.report(kind.clone());
    RenderedNode::Placeholder(Placeholder { kind, detail })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::context::{DEFAULT_MAX_DEPTH, HandlerTable, IconTable};
    use crate::engine::registry::Capability;
    use crate::rendered::Element;
    use serde_json::json;

    fn registry() -> ComponentRegistry {
        let registry = ComponentRegistry::new();
        for (tag, host) in [("Box", "div"), ("Badge", "span"), ("Button", "button")] {
            registry.register(
                tag,
                Capability::new(move |final_props, children| {
                    let mut el = Element::new(host);
                    el.attrs = final_props.attrs.clone();
                    el.handlers = final_props.handlers.clone();
                    el.children = children;
                    el.into()
                }),
            );
        }
        registry
    }

    fn ctx() -> ResolveContext {
        ResolveContext::new(HandlerTable::new(), IconTable::new(), DEFAULT_MAX_DEPTH)
    }

    fn node(value: serde_json::Value) -> SpecNode {
        SpecNode::from_value(value).unwrap()
    }

    #[test]
    fn test_text_children_single_leaf() {
        let ctx = ctx();
        let rendered = resolve_node(
            &node(json!({ "type": "Badge", "children": "New" })),
            &registry(),
            &ctx,
        )
        .unwrap();

        let el = rendered.as_element().unwrap();
        assert_eq!(el.children, vec![RenderedNode::Text("New".into())]);
    }

    #[test]
    fn test_number_children_become_text() {
        let ctx = ctx();
        let rendered = resolve_node(
            &node(json!({ "type": "Badge", "children": 42 })),
            &registry(),
            &ctx,
        )
        .unwrap();
        assert_eq!(rendered.text_content(), "42");
    }

    #[test]
    fn test_absent_children_empty_sequence() {
        let ctx = ctx();
        let rendered = resolve_node(&node(json!({ "type": "Box" })), &registry(), &ctx).unwrap();
        assert!(rendered.as_element().unwrap().children.is_empty());
    }

    #[test]
    fn test_single_node_children() {
        let ctx = ctx();
        let rendered = resolve_node(
            &node(json!({
                "type": "Box",
                "children": { "type": "Badge", "children": "hi" }
            })),
            &registry(),
            &ctx,
        )
        .unwrap();

        let el = rendered.as_element().unwrap();
        assert_eq!(el.children.len(), 1);
        assert_eq!(el.children[0].as_element().unwrap().tag, "span");
    }

    #[test]
    fn test_array_children_order_preserved() {
        let ctx = ctx();
        let rendered = resolve_node(
            &node(json!({
                "type": "Box",
                "children": ["a", { "type": "Badge", "children": "b" }, "c"]
            })),
            &registry(),
            &ctx,
        )
        .unwrap();

        let el = rendered.as_element().unwrap();
        assert_eq!(el.children.len(), 3);
        assert_eq!(el.children[0], RenderedNode::Text("a".into()));
        assert_eq!(el.children[1].text_content(), "b");
        assert_eq!(el.children[2], RenderedNode::Text("c".into()));
    }

    #[test]
    fn test_unknown_type_isolated_from_siblings() {
        let ctx = ctx();
        let rendered = resolve_node(
            &node(json!({
                "type": "Box",
                "children": [
                    { "type": "Badge", "children": "ok" },
                    { "type": "Frobnicator" },
                    { "type": "Badge", "children": "also ok" }
                ]
            })),
            &registry(),
            &ctx,
        )
        .unwrap();

        let el = rendered.as_element().unwrap();
        assert!(!el.children[0].is_placeholder());
        assert!(el.children[1].is_placeholder());
        assert!(!el.children[2].is_placeholder());

        let diags = ctx.take_diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].kind,
            DiagnosticKind::UnknownType {
                type_tag: "Frobnicator".to_string()
            }
        );
        assert_eq!(diags[0].path, "Box/Frobnicator");
    }

    #[test]
    fn test_malformed_children_placeholder() {
        let ctx = ctx();
        let rendered = resolve_node(
            &node(json!({ "type": "Box", "children": true })),
            &registry(),
            &ctx,
        )
        .unwrap();

        let el = rendered.as_element().unwrap();
        assert_eq!(el.children.len(), 1);
        assert!(el.children[0].is_placeholder());
        assert_eq!(ctx.take_diagnostics().len(), 1);
    }

    #[test]
    fn test_child_object_without_type_is_malformed() {
        let ctx = ctx();
        let rendered = resolve_node(
            &node(json!({
                "type": "Box",
                "children": [{ "label": "no type tag" }, "text"]
            })),
            &registry(),
            &ctx,
        )
        .unwrap();

        let el = rendered.as_element().unwrap();
        assert!(el.children[0].is_placeholder());
        assert_eq!(el.children[1], RenderedNode::Text("text".into()));
    }

    #[test]
    fn test_depth_guard_aborts_whole_render() {
        // Build a chain nested one past the limit.
        let mut spec = json!({ "type": "Box" });
        for _ in 0..8 {
            spec = json!({ "type": "Box", "children": spec });
        }

        let ctx = ResolveContext::new(HandlerTable::new(), IconTable::new(), 4);
        let err = resolve_node(&node(spec), &registry(), &ctx).unwrap_err();
        assert_eq!(err, RenderError::RecursionDepthExceeded { max: 4 });
    }

    #[test]
    fn test_depth_guard_counts_depth_not_breadth() {
        // A wide but shallow tree must pass a small depth limit.
        let children: Vec<serde_json::Value> = (0..20)
            .map(|i| json!({ "type": "Badge", "children": format!("{i}") }))
            .collect();
        let spec = json!({ "type": "Box", "children": children });

        let ctx = ResolveContext::new(HandlerTable::new(), IconTable::new(), 3);
        let rendered = resolve_node(&node(spec), &registry(), &ctx).unwrap();
        assert_eq!(rendered.as_element().unwrap().children.len(), 20);
    }
}
