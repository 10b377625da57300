//! Controls: Button, Label, Input, HoverCard.

use super::host_element;
use crate::engine::registry::{Capability, ComponentRegistry};
use crate::rendered::Element;
use crate::theme::VariantRule;

const BUTTON_VARIANT: VariantRule = VariantRule {
    prop: "variant",
    default: "btn-default",
    classes: &[
        ("default", "btn-default"),
        ("primary", "btn-primary"),
        ("secondary", "btn-secondary"),
        ("destructive", "btn-destructive"),
        ("outline", "btn-outline"),
        ("ghost", "btn-ghost"),
        ("link", "btn-link"),
    ],
};

const BUTTON_SIZE: VariantRule = VariantRule {
    prop: "size",
    default: "btn-md",
    classes: &[
        ("sm", "btn-sm"),
        ("md", "btn-md"),
        ("lg", "btn-lg"),
        ("icon", "btn-icon"),
    ],
};

const INPUT_SIZE: VariantRule = VariantRule {
    prop: "size",
    default: "input-md",
    classes: &[("sm", "input-sm"), ("md", "input-md"), ("lg", "input-lg")],
};

pub(super) fn install(registry: &ComponentRegistry) {
    // Button renders a resolved icon, when one was referenced, ahead of its
    // children.
    registry.register(
        "Button",
        Capability::new(|final_props, children| {
            let mut el = Element::new("button");
            el.classes.push("btn".to_string());
            el.classes.extend(final_props.classes.iter().cloned());
            el.attrs = final_props.attrs.clone();
            el.handlers = final_props.handlers.clone();
            if let Some(icon) = final_props.icon("icon") {
                el.children.push(icon.clone());
            }
            el.children.extend(children);
            el.into()
        })
        .handler_props(&["onClick"])
        .icon_props(&["icon"])
        .variants(&[BUTTON_VARIANT, BUTTON_SIZE]),
    );

    registry.register("Label", Capability::new(host_element("label", &["label"])));

    registry.register(
        "Input",
        Capability::new(host_element("input", &["input"]))
            .handler_props(&["onChange", "onSubmit"])
            .variants(&[INPUT_SIZE]),
    );

    // Open/close transitions surface through the onOpenChange handler; the
    // host (or harness) simulates them by triggering that prop.
    registry.register(
        "HoverCard",
        Capability::new(host_element("div", &["hover-card"]))
            .handler_props(&["onOpenChange"]),
    );
}
