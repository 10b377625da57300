//! Built-in capability catalog.
//!
//! The default component types a specification can name out of the box:
//! layout containers, typography, controls, and display elements. Factories
//! here produce generic host [`Element`]s; all visual behavior lives in the
//! host's styling pipeline, which consumes the class strings opaquely.
//!
//! Each capability declares its handler props, icon props, and variant
//! rules, and every addition is gated on the dual-mode parity tests in
//! `tests/parity.rs`.

mod controls;
mod display;
mod layout;
mod typography;

use crate::engine::registry::ComponentRegistry;
use crate::engine::FinalProps;
use crate::rendered::{Element, RenderedNode};

/// Register the whole catalog on a registry.
pub fn install(registry: &ComponentRegistry) {
    layout::install(registry);
    typography::install(registry);
    controls::install(registry);
    display::install(registry);
}

/// The standard factory body: a host element carrying the reconciled props
/// and the resolved children. Base classes come first so variant classes can
/// override them downstream.
pub(crate) fn host_element(
    tag: &'static str,
    base_classes: &'static [&'static str],
) -> impl Fn(&FinalProps, Vec<RenderedNode>) -> RenderedNode {
    move |final_props, children| {
        let mut el = Element::new(tag);
        el.classes
            .extend(base_classes.iter().map(|class| class.to_string()));
        el.classes.extend(final_props.classes.iter().cloned());
        el.attrs = final_props.attrs.clone();
        el.handlers = final_props.handlers.clone();
        el.children = children;
        el.into()
    }
}
