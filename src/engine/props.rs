//! Prop reconciler - from raw specification props to final, host-safe props.
//!
//! Runs once per node, between children normalization and factory
//! invocation. Three concerns live here so the resolver's recursion stays
//! free of them:
//!
//! 1. **Variant resolution** - every variant rule the capability declares is
//!    mapped to a concrete style class, falling back to the rule's default
//!    for absent or unknown values.
//! 2. **Host-attribute filtering** - only recognized host attributes reach
//!    the produced element; specification-only keys never leak.
//! 3. **Indirection substitution** - handler-reference and icon-reference
//!    props are swapped for live values from the resolution context.
//!
//! Reserved metadata props (`className`, `a11y`, `data`, `testId`) get the
//! same treatment the original prop builders give them: merged classes,
//! `aria-*` attributes, `data-*` attributes, and `data-testid`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::engine::context::ResolveContext;
use crate::engine::registry::Capability;
use crate::rendered::{BoundHandler, RenderedNode};

// =============================================================================
// Host Attribute Filter
// =============================================================================

/// Attributes allowed onto the underlying platform element.
const HOST_ATTRS: &[&str] = &[
    "id", "role", "title", "href", "src", "alt", "placeholder", "value", "name", "target", "rel",
    "lang", "dir", "width", "height", "disabled", "checked", "tabindex",
];

fn is_host_attr(key: &str) -> bool {
    HOST_ATTRS.contains(&key) || key.starts_with("aria-") || key.starts_with("data-")
}

/// Render a scalar prop value as an attribute string. Structured values are
/// not attributes.
fn attr_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// =============================================================================
// FinalProps
// =============================================================================

/// The reconciled props handed to a capability factory.
#[derive(Default)]
pub struct FinalProps {
    /// Variant-resolved classes plus any `className` extras, in declaration
    /// order.
    pub classes: Vec<String>,
    /// Host attributes that survived filtering.
    pub attrs: BTreeMap<String, String>,
    /// Resolved handlers keyed by the specification prop name.
    pub handlers: BTreeMap<String, BoundHandler>,
    /// Resolved icons keyed by the specification prop name.
    pub icons: BTreeMap<String, RenderedNode>,
    /// Structured props the reconciler did not consume; available to
    /// factories that interpret them.
    pub rest: Map<String, Value>,
}

impl FinalProps {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn icon(&self, key: &str) -> Option<&RenderedNode> {
        self.icons.get(key)
    }
}

// =============================================================================
// Reconcile
// =============================================================================

/// Reconcile raw props against the capability's declarations.
pub(crate) fn reconcile(
    capability: &Capability,
    props: &Map<String, Value>,
    ctx: &ResolveContext,
) -> FinalProps {
    let mut out = FinalProps::default();

    // Variant rules apply whether or not the prop is present, so defaults
    // land exactly like a missing variant tag would in the styling pipeline.
    for rule in capability.variants {
        let value = props.get(rule.prop).and_then(Value::as_str);
        out.classes.push(rule.resolve(value).to_string());
    }

    for (key, value) in props {
        if capability.variant_rule(key).is_some() {
            continue; // consumed above
        }

        if capability.is_handler_prop(key) {
            match value.as_str() {
                Some(id) => {
                    out.handlers
                        .insert(key.clone(), ctx.lookup_handler(key, id));
                }
                None => debug!(prop = %key, "handler reference is not a string, ignored"),
            }
            continue;
        }

        if capability.is_icon_prop(key) {
            match value.as_str() {
                Some(name) => {
                    out.icons.insert(key.clone(), ctx.lookup_icon(key, name));
                }
                None => debug!(prop = %key, "icon reference is not a string, ignored"),
            }
            continue;
        }

        match key.as_str() {
            "className" => {
                if let Some(extra) = value.as_str() {
                    out.classes
                        .extend(extra.split_whitespace().map(str::to_string));
                }
            }
            "a11y" => {
                if let Some(a11y) = value.as_object() {
                    apply_a11y(a11y, &mut out.attrs);
                }
            }
            "data" => {
                if let Some(data) = value.as_object() {
                    for (name, entry) in data {
                        if let Some(text) = attr_value(entry) {
                            out.attrs.insert(format!("data-{name}"), text);
                        }
                    }
                }
            }
            "testId" => {
                if let Some(id) = value.as_str() {
                    out.attrs.insert("data-testid".to_string(), id.to_string());
                }
            }
            _ => {
                if is_host_attr(key) {
                    if let Some(text) = attr_value(value) {
                        out.attrs.insert(key.clone(), text);
                        continue;
                    }
                }
                out.rest.insert(key.clone(), value.clone());
            }
        }
    }

    out
}

/// Map the `a11y` metadata object to host accessibility attributes.
fn apply_a11y(a11y: &Map<String, Value>, attrs: &mut BTreeMap<String, String>) {
    const MAPPING: &[(&str, &str)] = &[
        ("ariaLabel", "aria-label"),
        ("ariaDescribedBy", "aria-describedby"),
        ("ariaControls", "aria-controls"),
        ("ariaExpanded", "aria-expanded"),
        ("ariaHidden", "aria-hidden"),
        ("ariaLive", "aria-live"),
        ("ariaAtomic", "aria-atomic"),
        ("hasPopup", "aria-haspopup"),
        ("tabIndex", "tabindex"),
        ("role", "role"),
    ];

    for (key, attr) in MAPPING {
        if let Some(text) = a11y.get(*key).and_then(attr_value) {
            attrs.insert((*attr).to_string(), text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::context::{DEFAULT_MAX_DEPTH, HandlerTable, IconTable};
    use crate::rendered::Element;
    use crate::theme::VariantRule;
    use serde_json::json;
    use std::rc::Rc;

    const BUTTON_VARIANTS: &[VariantRule] = &[
        VariantRule {
            prop: "variant",
            default: "btn-default",
            classes: &[("default", "btn-default"), ("primary", "btn-primary")],
        },
        VariantRule {
            prop: "size",
            default: "btn-md",
            classes: &[("sm", "btn-sm"), ("md", "btn-md"), ("lg", "btn-lg")],
        },
    ];

    fn button_capability() -> Capability {
        Capability::new(|_, _| Element::new("button").into())
            .handler_props(&["onClick"])
            .icon_props(&["icon"])
            .variants(BUTTON_VARIANTS)
    }

    fn empty_ctx() -> ResolveContext {
        ResolveContext::new(HandlerTable::new(), IconTable::new(), DEFAULT_MAX_DEPTH)
    }

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_variant_resolution_with_defaults() {
        let ctx = empty_ctx();
        let out = reconcile(
            &button_capability(),
            &props(json!({ "variant": "primary" })),
            &ctx,
        );
        // Declared order: variant rule first, then size (defaulted).
        assert_eq!(out.classes, vec!["btn-primary", "btn-md"]);
    }

    #[test]
    fn test_unknown_variant_falls_back() {
        let ctx = empty_ctx();
        let out = reconcile(
            &button_capability(),
            &props(json!({ "variant": "sparkly", "size": "lg" })),
            &ctx,
        );
        assert_eq!(out.classes, vec!["btn-default", "btn-lg"]);
        assert!(ctx.take_diagnostics().is_empty(), "fallback is not an error");
    }

    #[test]
    fn test_spec_only_keys_never_leak() {
        let ctx = empty_ctx();
        let out = reconcile(
            &button_capability(),
            &props(json!({
                "variant": "primary",
                "onClick": "save",
                "icon": "gear",
                "tooltip": { "text": "hi" }
            })),
            &ctx,
        );
        assert!(!out.attrs.contains_key("variant"));
        assert!(!out.attrs.contains_key("onClick"));
        assert!(!out.attrs.contains_key("icon"));
        assert!(!out.attrs.contains_key("tooltip"));
        // Structured, unconsumed props stay reachable for the factory.
        assert!(out.rest.contains_key("tooltip"));
    }

    #[test]
    fn test_host_attrs_pass_through() {
        let ctx = empty_ctx();
        let out = reconcile(
            &button_capability(),
            &props(json!({
                "id": "save-btn",
                "aria-label": "Save",
                "data-track": "cta",
                "tabindex": 0,
                "disabled": true
            })),
            &ctx,
        );
        assert_eq!(out.attr("id"), Some("save-btn"));
        assert_eq!(out.attr("aria-label"), Some("Save"));
        assert_eq!(out.attr("data-track"), Some("cta"));
        assert_eq!(out.attr("tabindex"), Some("0"));
        assert_eq!(out.attr("disabled"), Some("true"));
    }

    #[test]
    fn test_handler_substitution() {
        let mut handlers = HandlerTable::new();
        handlers.insert("save".to_string(), Rc::new(|_: &Value| {}));
        let ctx = ResolveContext::new(handlers, IconTable::new(), DEFAULT_MAX_DEPTH);

        let out = reconcile(
            &button_capability(),
            &props(json!({ "onClick": "save" })),
            &ctx,
        );
        assert_eq!(out.handlers.get("onClick").unwrap().reference, "save");
        assert!(ctx.take_diagnostics().is_empty());
    }

    #[test]
    fn test_missing_handler_binds_noop() {
        let ctx = empty_ctx();
        let out = reconcile(
            &button_capability(),
            &props(json!({ "onClick": "save" })),
            &ctx,
        );
        let bound = out.handlers.get("onClick").unwrap();
        assert_eq!(bound.reference, "save");
        bound.invoke(&json!({})); // no-op, must not panic
        assert_eq!(ctx.take_diagnostics().len(), 1);
    }

    #[test]
    fn test_metadata_props() {
        let ctx = empty_ctx();
        let out = reconcile(
            &button_capability(),
            &props(json!({
                "className": "mt-2 shadow",
                "a11y": { "ariaLabel": "Save", "role": "button", "tabIndex": 2 },
                "data": { "track": "cta" },
                "testId": "save-button"
            })),
            &ctx,
        );
        // Variant defaults first, className extras after.
        assert_eq!(out.classes, vec!["btn-default", "btn-md", "mt-2", "shadow"]);
        assert_eq!(out.attr("aria-label"), Some("Save"));
        assert_eq!(out.attr("role"), Some("button"));
        assert_eq!(out.attr("tabindex"), Some("2"));
        assert_eq!(out.attr("data-track"), Some("cta"));
        assert_eq!(out.attr("data-testid"), Some("save-button"));
    }

    #[test]
    fn test_non_string_handler_reference_ignored() {
        let ctx = empty_ctx();
        let out = reconcile(
            &button_capability(),
            &props(json!({ "onClick": 42 })),
            &ctx,
        );
        assert!(out.handlers.is_empty());
        assert!(ctx.take_diagnostics().is_empty());
    }
}
