//! Component schema and invocation data model.
//!
//! A [`ComponentSchema`] describes one component type: its editable fields
//! with defaults, its declared child slots, and its known style variants.
//! Schemas are deserialized from one JSON document per component type:
//!
//! ```json
//! {
//!   "label": "Badge",
//!   "category": "content",
//!   "fields": [
//!     { "name": "text", "default": "", "type": "string" },
//!     { "name": "variant", "default": "default", "type": "select" }
//!   ],
//!   "variants": ["default", "accent", "warning"]
//! }
//! ```
//!
//! A [`ComponentInvocation`] is the node shape of a composition tree:
//! a component type plus a bag of props, where `props.children` is an
//! ordered list of further invocations. Invocation trees are built only
//! from deserialized data and are therefore acyclic by construction; the
//! renderer relies on that precondition and performs no cycle detection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RenderError;

/// A bag of component props: prop name to scalar, nested bag, or list.
///
/// Keys are unique; there are no ordering semantics beyond what the
/// underlying map provides.
pub type PropBag = serde_json::Map<String, Value>;

/// The prop name under which a component's children are stored.
pub const CHILDREN_PROP: &str = "children";

/// Schema for one component type.
///
/// Immutable once loaded; owned and cached by the
/// [`SchemaCatalog`](crate::SchemaCatalog).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSchema {
    /// Component type name. Not present in the JSON source (schemas are
    /// keyed by file or entry name); filled in by the catalog on load.
    #[serde(skip)]
    pub name: String,
    /// Human-readable label for editing surfaces.
    pub label: Option<String>,
    /// Grouping category for editing surfaces (e.g. "layout", "content").
    pub category: Option<String>,
    /// Field definitions with defaults.
    pub fields: Vec<Field>,
    /// Declared child slots, if this component owns children.
    pub children: Option<ChildSlots>,
    /// Known style variants for this component.
    pub variants: Vec<String>,
}

impl ComponentSchema {
    /// Creates an empty schema for the given name ("no constraints").
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Looks up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the slot declared at `index`, if any.
    pub fn slot(&self, index: usize) -> Option<&SlotSpec> {
        self.children.as_ref()?.slots.get(index)
    }
}

/// One editable field of a component schema.
///
/// The `default` is supplied whenever a caller omits the prop. The type
/// hint is advisory only; resolution never enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    pub default: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Field {
    /// Creates a field with a default value.
    pub fn new(name: impl Into<String>, default: Value) -> Self {
        Self {
            name: name.into(),
            default: Some(default),
            kind: None,
        }
    }
}

/// Declared child slots of a parent schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildSlots {
    pub slots: Vec<SlotSpec>,
}

/// Per-slot-index default props, merged under caller-supplied child props.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotSpec {
    pub defaults: PropBag,
}

/// One node of a composition tree: "render this kind of thing with these
/// values", possibly containing nested invocations as children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentInvocation {
    /// Component type name, dispatched against the component registry.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub props: PropBag,
}

impl ComponentInvocation {
    /// Creates an invocation with no props.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            props: PropBag::new(),
        }
    }

    /// Sets one prop, returning `self` for chaining.
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Sets the ordered children list, returning `self` for chaining.
    pub fn with_children(mut self, children: Vec<ComponentInvocation>) -> Self {
        let entries = children
            .into_iter()
            .map(|child| serde_json::to_value(child).unwrap_or(Value::Null))
            .collect();
        self.props.insert(CHILDREN_PROP.to_string(), Value::Array(entries));
        self
    }

    /// Returns the raw `children` value, if present.
    pub fn children(&self) -> Option<&Value> {
        self.props.get(CHILDREN_PROP)
    }

    /// Parses a child entry out of a `children` list.
    ///
    /// Child entries must be objects with a string `type`; anything else
    /// is a [`RenderError::MalformedInvocation`].
    pub fn from_value(value: &Value) -> Result<Self, RenderError> {
        let object = value.as_object().ok_or_else(|| {
            RenderError::MalformedInvocation("child entry is not an object".to_string())
        })?;
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                RenderError::MalformedInvocation("child entry has no \"type\"".to_string())
            })?;
        let props = object
            .get("props")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Ok(Self {
            kind: kind.to_string(),
            props,
        })
    }
}
