//! Specification node - the serializable description of one view.
//!
//! A [`SpecNode`] is pure data: a `type` tag that is looked up in the
//! component registry, an opaque prop map, and a polymorphic `children`
//! value. The boundary JSON shape is
//!
//! ```json
//! { "type": "Button", "variant": "primary", "onClick": "save", "children": "Save" }
//! ```
//!
//! where everything that is not `type` or `children` flattens into props.
//! Event-handler props hold string IDs and icon props hold string names by
//! convention; the specification never embeds executable code.
//!
//! The model performs no validation. `children` is kept as a raw JSON value
//! and the structural check (is it text, a node, or an array of those?)
//! happens lazily when the resolver normalizes it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// SpecNode
// =============================================================================

/// One described view. Immutable data with no identity beyond its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecNode {
    /// Discriminant tag, resolved against the component registry.
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Polymorphic children: absent, text, a single node, or a mixed array.
    /// Kept raw; the resolver normalizes it at the node boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Value>,

    /// Everything else in the JSON object. The engine does not interpret
    /// prop semantics except for the reserved indirections declared by the
    /// node's capability (handler refs, icon refs, variant tags).
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl SpecNode {
    /// Create a node with the given type tag and no props or children.
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            children: None,
            props: Map::new(),
        }
    }

    /// Builder-style prop assignment.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Builder-style text children.
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children = Some(Value::String(content.into()));
        self
    }

    /// Builder-style single-node children.
    pub fn child(mut self, node: SpecNode) -> Self {
        self.children = Some(node.into_value());
        self
    }

    /// Builder-style array children. Accepts anything already in JSON form;
    /// use [`SpecNode::into_value`] for nested nodes.
    pub fn children(mut self, entries: Vec<Value>) -> Self {
        self.children = Some(Value::Array(entries));
        self
    }

    /// Convert back to the boundary JSON value.
    pub fn into_value(self) -> Value {
        // SpecNode serialization is infallible: string tag + JSON-native parts.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Parse a node from a boundary JSON value.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
