//! Component registry - type tag to view-producing capability.
//!
//! The registry is an explicit value rather than ambient module state, so
//! registration stays order-independent and testable in isolation. A
//! thread-local default instance, pre-populated with the built-in catalog,
//! backs the free-function API hosts use during initialization.
//!
//! Registration policy: last-write-wins. Re-registering a tag replaces the
//! previous capability, returns it, and emits a warning. The registry is
//! conceptually sealed by the first render that goes through it; later
//! mutation is unsupported (warned, tolerated).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use crate::engine::props::FinalProps;
use crate::rendered::RenderedNode;
use crate::theme::VariantRule;

// =============================================================================
// Capability
// =============================================================================

/// A view-producing factory: (final props, resolved children) -> one node.
///
/// Children arrive fully materialized; a factory never sees raw
/// specification data.
pub type Factory = Rc<dyn Fn(&FinalProps, Vec<RenderedNode>) -> RenderedNode>;

/// One registered component type: its factory plus the prop declarations the
/// prop reconciler needs (which keys are handler references, icon references,
/// and variant tags).
#[derive(Clone)]
pub struct Capability {
    factory: Factory,
    /// Props holding event-handler reference IDs, e.g. `onClick`.
    pub handler_props: &'static [&'static str],
    /// Props holding icon reference names, e.g. `icon`.
    pub icon_props: &'static [&'static str],
    /// Variant/size tag rules, keyed by prop name.
    pub variants: &'static [VariantRule],
}

impl Capability {
    pub fn new(factory: impl Fn(&FinalProps, Vec<RenderedNode>) -> RenderedNode + 'static) -> Self {
        Self {
            factory: Rc::new(factory),
            handler_props: &[],
            icon_props: &[],
            variants: &[],
        }
    }

    pub fn handler_props(mut self, props: &'static [&'static str]) -> Self {
        self.handler_props = props;
        self
    }

    pub fn icon_props(mut self, props: &'static [&'static str]) -> Self {
        self.icon_props = props;
        self
    }

    pub fn variants(mut self, rules: &'static [VariantRule]) -> Self {
        self.variants = rules;
        self
    }

    pub fn is_handler_prop(&self, key: &str) -> bool {
        self.handler_props.contains(&key)
    }

    pub fn is_icon_prop(&self, key: &str) -> bool {
        self.icon_props.contains(&key)
    }

    pub fn variant_rule(&self, key: &str) -> Option<&VariantRule> {
        self.variants.iter().find(|rule| rule.prop == key)
    }

    /// Invoke the factory.
    pub(crate) fn produce(&self, props: &FinalProps, children: Vec<RenderedNode>) -> RenderedNode {
        (self.factory)(props, children)
    }
}

impl std::fmt::Debug for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capability")
            .field("handler_props", &self.handler_props)
            .field("icon_props", &self.icon_props)
            .field("variants", &self.variants)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ComponentRegistry
// =============================================================================

/// Lookup table from `type` tag to [`Capability`].
#[derive(Default)]
pub struct ComponentRegistry {
    entries: RefCell<HashMap<String, Capability>>,
    sealed: Cell<bool>,
}

impl ComponentRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the built-in catalog.
    pub fn with_catalog() -> Self {
        let registry = Self::new();
        crate::catalog::install(&registry);
        registry
    }

    /// Add a mapping. Returns the capability it replaced, if any.
    pub fn register(&self, type_tag: impl Into<String>, capability: Capability) -> Option<Capability> {
        let type_tag = type_tag.into();
        if self.sealed.get() {
            warn!(%type_tag, "registering a component after the first render is unsupported");
        }
        let previous = self.entries.borrow_mut().insert(type_tag.clone(), capability);
        if previous.is_some() {
            warn!(%type_tag, "component type re-registered, previous capability replaced");
        }
        previous
    }

    /// Pure lookup, no side effects.
    pub fn resolve(&self, type_tag: &str) -> Option<Capability> {
        self.entries.borrow().get(type_tag).cloned()
    }

    /// Mark the registry sealed. Called by the first render through it.
    pub(crate) fn seal(&self) {
        self.sealed.set(true);
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.get()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Registered type tags, sorted for stable output.
    pub fn registered_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.entries.borrow().keys().cloned().collect();
        types.sort();
        types
    }
}

// =============================================================================
// Default Registry
// =============================================================================

thread_local! {
    /// Default registry used by [`crate::render`], pre-populated with the
    /// built-in catalog.
    static DEFAULT_REGISTRY: ComponentRegistry = ComponentRegistry::with_catalog();
}

/// Run a closure against the thread-local default registry.
pub fn with_default_registry<R>(f: impl FnOnce(&ComponentRegistry) -> R) -> R {
    DEFAULT_REGISTRY.with(f)
}

/// Register a component type on the default registry. Expected to happen
/// during application/library initialization, before the first render.
pub fn register_component(type_tag: impl Into<String>, capability: Capability) -> Option<Capability> {
    with_default_registry(|registry| registry.register(type_tag, capability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendered::Element;

    fn dummy_capability(tag: &'static str) -> Capability {
        Capability::new(move |_, children| {
            let mut el = Element::new(tag);
            el.children = children;
            el.into()
        })
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = ComponentRegistry::new();
        assert!(registry.resolve("Badge").is_none());

        registry.register("Badge", dummy_capability("span"));
        assert!(registry.resolve("Badge").is_some());
        assert!(registry.resolve("badge").is_none(), "lookup is case-sensitive");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reregister_last_write_wins() {
        let registry = ComponentRegistry::new();
        registry.register("Badge", dummy_capability("span"));
        let previous = registry.register(
            "Badge",
            dummy_capability("div").handler_props(&["onClick"]),
        );

        assert!(previous.is_some());
        let current = registry.resolve("Badge").unwrap();
        assert!(current.is_handler_prop("onClick"));
    }

    #[test]
    fn test_seal_is_observable() {
        let registry = ComponentRegistry::new();
        assert!(!registry.is_sealed());
        registry.seal();
        assert!(registry.is_sealed());
        // Unsupported but tolerated.
        registry.register("Late", dummy_capability("div"));
        assert!(registry.resolve("Late").is_some());
    }

    #[test]
    fn test_capability_prop_declarations() {
        let cap = dummy_capability("button")
            .handler_props(&["onClick", "onHover"])
            .icon_props(&["icon"]);

        assert!(cap.is_handler_prop("onClick"));
        assert!(!cap.is_handler_prop("icon"));
        assert!(cap.is_icon_prop("icon"));
        assert!(cap.variant_rule("variant").is_none());
    }

    #[test]
    fn test_default_registry_has_catalog() {
        with_default_registry(|registry| {
            assert!(registry.resolve("Button").is_some());
            assert!(registry.resolve("Box").is_some());
            assert!(registry.resolve("Frobnicator").is_none());
        });
    }

    #[test]
    fn test_registered_types_sorted() {
        let registry = ComponentRegistry::new();
        registry.register("Zed", dummy_capability("div"));
        registry.register("Alpha", dummy_capability("div"));
        assert_eq!(registry.registered_types(), vec!["Alpha", "Zed"]);
    }
}
