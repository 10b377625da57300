//! Display elements: Avatar, Image, Skeleton.

use super::host_element;
use crate::engine::registry::{Capability, ComponentRegistry};
use crate::theme::VariantRule;

const AVATAR_SIZE: VariantRule = VariantRule {
    prop: "size",
    default: "avatar-md",
    classes: &[("sm", "avatar-sm"), ("md", "avatar-md"), ("lg", "avatar-lg")],
};

pub(super) fn install(registry: &ComponentRegistry) {
    // Children act as the fallback when no `src` is supplied; the host
    // decides which to show.
    registry.register(
        "Avatar",
        Capability::new(host_element("span", &["avatar"])).variants(&[AVATAR_SIZE]),
    );

    registry.register("Image", Capability::new(host_element("img", &[])));

    registry.register(
        "Skeleton",
        Capability::new(host_element("div", &["skeleton"])),
    );
}
