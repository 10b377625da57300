//! Variant rules - declarative variant/size-to-class resolution.
//!
//! Each component type declares which of its props are variant tags and how
//! each tag value maps to a concrete style-class string. The class strings
//! themselves come from the host's styling pipeline and are opaque to the
//! engine; resolution is a pure table lookup with a default fallback.
//!
//! # Example
//!
//! ```
//! use specui::theme::VariantRule;
//!
//! const SPACING: VariantRule = VariantRule {
//!     prop: "spacing",
//!     default: "gap-4",
//!     classes: &[("sm", "gap-2"), ("md", "gap-4"), ("lg", "gap-8")],
//! };
//!
//! assert_eq!(SPACING.resolve(Some("lg")), "gap-8");
//! // Unknown values fall back to the default instead of failing.
//! assert_eq!(SPACING.resolve(Some("enormous")), "gap-4");
//! assert_eq!(SPACING.resolve(None), "gap-4");
//! ```

use tracing::debug;

// =============================================================================
// VariantRule
// =============================================================================

/// One variant tag a component type understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRule {
    /// The prop key holding the tag, e.g. `"variant"`, `"size"`, `"spacing"`.
    pub prop: &'static str,
    /// Class used when the prop is absent or holds an unknown value.
    pub default: &'static str,
    /// (tag value, class) pairs.
    pub classes: &'static [(&'static str, &'static str)],
}

impl VariantRule {
    /// Resolve a tag value to its style class.
    pub fn resolve(&self, value: Option<&str>) -> &'static str {
        let Some(value) = value else {
            return self.default;
        };
        match self.classes.iter().find(|(tag, _)| *tag == value) {
            Some((_, class)) => class,
            None => {
                debug!(prop = self.prop, value, "unknown variant value, using default");
                self.default
            }
        }
    }

    /// All tag values this rule accepts.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().map(|(tag, _)| *tag)
    }
}
