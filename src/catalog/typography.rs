//! Typography: Text, Heading, Badge.

use super::host_element;
use crate::engine::registry::{Capability, ComponentRegistry};
use crate::rendered::Element;
use crate::theme::VariantRule;

const TEXT_SIZE: VariantRule = VariantRule {
    prop: "size",
    default: "text-base",
    classes: &[
        ("xs", "text-xs"),
        ("sm", "text-sm"),
        ("md", "text-base"),
        ("lg", "text-lg"),
        ("xl", "text-xl"),
    ],
};

const TEXT_TONE: VariantRule = VariantRule {
    prop: "tone",
    default: "text-default",
    classes: &[
        ("default", "text-default"),
        ("muted", "text-muted"),
        ("danger", "text-danger"),
        ("success", "text-success"),
    ],
};

const BADGE_VARIANT: VariantRule = VariantRule {
    prop: "variant",
    default: "badge-default",
    classes: &[
        ("default", "badge-default"),
        ("secondary", "badge-secondary"),
        ("destructive", "badge-destructive"),
        ("outline", "badge-outline"),
    ],
};

pub(super) fn install(registry: &ComponentRegistry) {
    registry.register(
        "Text",
        Capability::new(host_element("p", &[])).variants(&[TEXT_SIZE, TEXT_TONE]),
    );

    // Heading picks its host tag from the `level` prop (1-6, default 2).
    registry.register(
        "Heading",
        Capability::new(|final_props, children| {
            let level = final_props
                .rest
                .get("level")
                .and_then(serde_json::Value::as_u64)
                .filter(|level| (1..=6u64).contains(level))
                .unwrap_or(2);

            let mut el = Element::new(format!("h{level}"));
            el.classes.extend(final_props.classes.iter().cloned());
            el.attrs = final_props.attrs.clone();
            el.handlers = final_props.handlers.clone();
            el.children = children;
            el.into()
        }),
    );

    registry.register(
        "Badge",
        Capability::new(host_element("span", &["badge"])).variants(&[BADGE_VARIANT]),
    );
}

#[cfg(test)]
mod tests {
    use crate::engine::{ComponentRegistry, RenderOptions, render_with};
    use crate::spec::SpecNode;
    use serde_json::json;

    fn registry() -> ComponentRegistry {
        ComponentRegistry::with_catalog()
    }

    #[test]
    fn test_badge_wraps_text_leaf() {
        let spec = SpecNode::new("Badge").text("New");
        let output = render_with(&registry(), &spec, RenderOptions::default()).unwrap();

        let el = output.root.as_element().unwrap();
        assert_eq!(el.tag, "span");
        assert_eq!(el.children.len(), 1);
        assert_eq!(output.root.text_content(), "New");
        assert!(output.is_clean());
    }

    #[test]
    fn test_heading_level_selects_tag() {
        let spec = SpecNode::from_value(json!({
            "type": "Heading", "level": 3, "children": "Title"
        }))
        .unwrap();
        let output = render_with(&registry(), &spec, RenderOptions::default()).unwrap();
        assert_eq!(output.root.as_element().unwrap().tag, "h3");
    }

    #[test]
    fn test_heading_level_out_of_range_defaults() {
        let spec = SpecNode::from_value(json!({
            "type": "Heading", "level": 9, "children": "Title"
        }))
        .unwrap();
        let output = render_with(&registry(), &spec, RenderOptions::default()).unwrap();
        assert_eq!(output.root.as_element().unwrap().tag, "h2");
    }

    #[test]
    fn test_text_size_variant() {
        let spec = SpecNode::from_value(json!({
            "type": "Text", "size": "sm", "children": "body"
        }))
        .unwrap();
        let output = render_with(&registry(), &spec, RenderOptions::default()).unwrap();
        let el = output.root.as_element().unwrap();
        assert!(el.classes.contains(&"text-sm".to_string()));
        assert!(el.classes.contains(&"text-default".to_string()));
    }
}
