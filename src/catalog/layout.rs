//! Layout containers: Box, Group, Stack, Separator, Card.

use super::host_element;
use crate::engine::registry::{Capability, ComponentRegistry};
use crate::rendered::Element;
use crate::theme::VariantRule;

const SPACING: VariantRule = VariantRule {
    prop: "spacing",
    default: "gap-4",
    classes: &[("none", "gap-0"), ("sm", "gap-2"), ("md", "gap-4"), ("lg", "gap-8")],
};

const STACK_ALIGN: VariantRule = VariantRule {
    prop: "align",
    default: "items-stretch",
    classes: &[
        ("start", "items-start"),
        ("center", "items-center"),
        ("end", "items-end"),
        ("stretch", "items-stretch"),
    ],
};

const GROUP_JUSTIFY: VariantRule = VariantRule {
    prop: "justify",
    default: "justify-start",
    classes: &[
        ("start", "justify-start"),
        ("center", "justify-center"),
        ("end", "justify-end"),
        ("between", "justify-between"),
    ],
};

const SEPARATOR_ORIENTATION: VariantRule = VariantRule {
    prop: "orientation",
    default: "separator-horizontal",
    classes: &[
        ("horizontal", "separator-horizontal"),
        ("vertical", "separator-vertical"),
    ],
};

pub(super) fn install(registry: &ComponentRegistry) {
    registry.register("Box", Capability::new(host_element("div", &[])));

    // Horizontal arrangement with a spacing tag.
    registry.register(
        "Group",
        Capability::new(host_element("div", &["flex", "flex-row"]))
            .variants(&[SPACING, GROUP_JUSTIFY]),
    );

    // Vertical arrangement.
    registry.register(
        "Stack",
        Capability::new(host_element("div", &["flex", "flex-col"]))
            .variants(&[SPACING, STACK_ALIGN]),
    );

    registry.register(
        "Separator",
        Capability::new(|final_props, children| {
            let mut el = Element::new("div");
            el.classes.push("separator".to_string());
            el.classes.extend(final_props.classes.iter().cloned());
            el.attrs = final_props.attrs.clone();
            el.attrs
                .entry("role".to_string())
                .or_insert_with(|| "separator".to_string());
            el.handlers = final_props.handlers.clone();
            el.children = children;
            el.into()
        })
        .variants(&[SEPARATOR_ORIENTATION]),
    );

    registry.register(
        "Card",
        Capability::new(host_element("div", &["card"])),
    );
}
