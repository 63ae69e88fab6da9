//! Composition rendering: registry dispatch and recursive tree rendering.
//!
//! This module provides the rendering half of the composition engine:
//!
//! - [`Component`]: the render-function contract, one implementation per
//!   known component type
//! - [`ComponentRegistry`]: name → render capability, populated at startup
//! - [`Composer`]: schema-aware dispatch plus recursive child rendering
//! - [`RenderContext`]: what a render function sees of the engine while it
//!   runs (its own schema, child rendering, shared pass-through props)
//!
//! # Rendering model
//!
//! Rendering is a pure recursive transform. Each [`Composer::render_component`]
//! call loads the component's schema, merges schema defaults under the
//! caller's props, dispatches to the registered render function, and returns
//! its markup. Render functions that own children call
//! [`RenderContext::render_children`], which resolves each child's slot
//! defaults by index against the *current* component's schema and recurses.
//!
//! Rendering is synchronous, side-effect-free, and fail-fast: a failing
//! child aborts the whole render and no partial output is retained. This is
//! deliberately different from interpolation, which is best-effort.
//!
//! Invocation trees must be finite and acyclic; the renderer performs no
//! cycle detection (trees built from deserialized data satisfy this by
//! construction).
//!
//! # Missing components
//!
//! An unknown component type is a registry-lookup failure, never a silent
//! skip. At the top-level dispatch ([`Composer::render_root`]) the failure
//! degrades to a visible placeholder so a page with one missing template
//! still renders observably. Nested dispatch follows the composer's
//! [`MissingPolicy`]: `Fail` (the default) aborts the render, `Placeholder`
//! degrades the child to the same visible marker.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::catalog::SchemaCatalog;
use crate::error::RenderError;
use crate::escape;
use crate::props::{merge_defaults, resolve_child_props, string_prop};
use crate::schema::{ComponentInvocation, ComponentSchema, PropBag};

/// The shared pass-through prop carrying an editing marker.
///
/// Render functions forward it as a `data-editable` attribute without
/// interpreting the value.
pub const EDITABLE_PROP: &str = "editable";

/// A render function for one component type.
///
/// Implementations must be pure given their input and must honor the
/// shared contract:
///
/// - produce **empty output** when required content fields are empty (a
///   component degrades to nothing rather than emitting broken markup)
/// - pass the [`EDITABLE_PROP`] marker through without interpreting it
/// - call [`RenderContext::render_children`] when owning a `children` prop
pub trait Component: Send + Sync {
    /// Renders resolved props to markup.
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError>;
}

impl<F> Component for F
where
    F: Fn(&PropBag, &RenderContext<'_>) -> Result<String, RenderError> + Send + Sync,
{
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        self(props, ctx)
    }
}

/// Registry of render capabilities, keyed by component type name.
///
/// Populated at startup from the known component set; lookup failure is an
/// [`RenderError::UnknownComponent`], not a dynamic call.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Box<dyn Component>>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a render capability under a type name.
    ///
    /// Re-registering a name replaces the previous capability.
    pub fn register(&mut self, name: impl Into<String>, component: impl Component + 'static) {
        self.components.insert(name.into(), Box::new(component));
    }

    /// Looks up the render capability for a type name.
    pub fn get(&self, name: &str) -> Result<&dyn Component, RenderError> {
        self.components
            .get(name)
            .map(|boxed| boxed.as_ref())
            .ok_or_else(|| RenderError::UnknownComponent(name.to_string()))
    }

    /// Returns true if a type name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Returns an iterator over registered type names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(|s| s.as_str())
    }
}

/// Policy for unknown component types during *nested* child rendering.
///
/// Applied uniformly to all nested dispatch. Top-level dispatch
/// ([`Composer::render_root`]) always degrades to a placeholder regardless
/// of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Abort the whole render (fail-fast). The default.
    #[default]
    Fail,
    /// Degrade the child to visible placeholder markup and continue.
    Placeholder,
}

/// Schema-aware component renderer.
///
/// Owns the schema catalog and the component registry. Every render call
/// is independent and referentially transparent given identical schemas
/// and props; the only shared state is the catalog's append-only cache.
///
/// # Example
///
/// ```rust
/// use weft_render::{Composer, ComponentRegistry, SchemaCatalog, RenderError};
/// use weft_render::{escape, PropBag, RenderContext};
/// use weft_render::props::string_prop;
/// use serde_json::json;
///
/// fn greeting(props: &PropBag, _ctx: &RenderContext<'_>) -> Result<String, RenderError> {
///     let name = string_prop(props, "name").unwrap_or_default();
///     if name.is_empty() {
///         return Ok(String::new());
///     }
///     Ok(format!("<p>Hello, {}</p>", escape::text(name)))
/// }
///
/// let mut registry = ComponentRegistry::new();
/// registry.register("greeting", greeting);
/// let composer = Composer::new(SchemaCatalog::new(), registry);
///
/// let props = json!({ "name": "Ada" }).as_object().unwrap().clone();
/// assert_eq!(composer.render_component("greeting", props).unwrap(), "<p>Hello, Ada</p>");
/// ```
pub struct Composer {
    catalog: SchemaCatalog,
    registry: ComponentRegistry,
    missing_policy: MissingPolicy,
}

impl Composer {
    /// Creates a composer with the default fail-fast missing policy.
    pub fn new(catalog: SchemaCatalog, registry: ComponentRegistry) -> Self {
        Self {
            catalog,
            registry,
            missing_policy: MissingPolicy::default(),
        }
    }

    /// Sets the nested missing-component policy, returning `self`.
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Returns the configured nested missing-component policy.
    pub fn missing_policy(&self) -> MissingPolicy {
        self.missing_policy
    }

    /// Returns the schema catalog.
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// Returns the component registry.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Renders one component with the given props.
    ///
    /// Loads the component's schema (absence means "no constraints"),
    /// merges schema defaults under `props`, and dispatches to the
    /// registered render function. Fail-fast: any error anywhere in the
    /// subtree aborts the render.
    pub fn render_component(&self, kind: &str, props: PropBag) -> Result<String, RenderError> {
        let schema = self.catalog.load_or_default(kind)?;
        let resolved = merge_defaults(&schema, props);
        let component = self.registry.get(kind)?;
        let ctx = RenderContext {
            composer: self,
            schema,
        };
        component.render(&resolved, &ctx)
    }

    /// Renders a top-level invocation, degrading an unknown type to a
    /// visible placeholder.
    ///
    /// Only the top-level dispatch degrades; failures inside a known
    /// component's subtree still propagate.
    pub fn render_root(&self, invocation: &ComponentInvocation) -> Result<String, RenderError> {
        if !self.registry.contains(&invocation.kind) {
            return Ok(missing_markup(&invocation.kind));
        }
        self.render_component(&invocation.kind, invocation.props.clone())
    }
}

/// What a render function sees of the engine while it runs.
///
/// Carries the schema of the component currently rendering (which is the
/// parent schema for its children) and the composer for recursion.
pub struct RenderContext<'a> {
    composer: &'a Composer,
    schema: Arc<ComponentSchema>,
}

impl RenderContext<'_> {
    /// The schema of the component currently rendering.
    pub fn schema(&self) -> &ComponentSchema {
        &self.schema
    }

    /// Renders an ordered `children` list, tracking per-slot index.
    ///
    /// For each entry: slot defaults are resolved by index against the
    /// current component's schema, then the child renders recursively.
    /// `None` or a non-list value renders nothing (a childless owner is
    /// not an error). Unknown child types follow the composer's
    /// [`MissingPolicy`].
    pub fn render_children(&self, children: Option<&Value>) -> Result<String, RenderError> {
        let Some(Value::Array(entries)) = children else {
            return Ok(String::new());
        };

        let mut out = String::new();
        for (index, entry) in entries.iter().enumerate() {
            let invocation = ComponentInvocation::from_value(entry)?;
            let props = resolve_child_props(&self.schema, index, invocation.props);
            match self.composer.render_component(&invocation.kind, props) {
                Ok(markup) => out.push_str(&markup),
                Err(RenderError::UnknownComponent(name))
                    if self.composer.missing_policy == MissingPolicy::Placeholder =>
                {
                    out.push_str(&missing_markup(&name));
                }
                Err(err) => return Err(err),
            }
        }
        Ok(out)
    }

    /// Renders the shared editable marker as a pass-through attribute.
    ///
    /// Returns ` data-editable="..."` (leading space included) when the
    /// prop is present, an empty string otherwise. The value is never
    /// interpreted.
    pub fn editable_attr(&self, props: &PropBag) -> String {
        match string_prop(props, EDITABLE_PROP) {
            Some(marker) => format!(" data-editable=\"{}\"", escape::attr(marker)),
            None => String::new(),
        }
    }
}

/// Visible placeholder markup for a missing component type.
fn missing_markup(kind: &str) -> String {
    format!(
        "<div class=\"weft-missing\">Missing component: {}</div>",
        escape::text(kind)
    )
}
