//! # Weft - Component Rendering with Design-Token Theming
//!
//! `weft` renders trees of named, reusable UI components into markup from
//! declarative definitions, and compiles hierarchical design-token
//! documents into CSS custom properties.
//!
//! It bundles the composition engine from [`weft-render`](weft_render) with
//! the token compiler from [`weft-tokens`](weft_tokens) and ships a
//! built-in component set with embedded schemas.
//!
//! ## Quick Start
//!
//! ```rust
//! use weft::{ComponentInvocation, Studio};
//! use serde_json::json;
//!
//! let studio = Studio::standard().unwrap();
//!
//! let page = vec![ComponentInvocation::new("container").with_children(vec![
//!     ComponentInvocation::new("heading").with_prop("text", "{post.title}"),
//!     ComponentInvocation::new("badge").with_prop("text", "New"),
//! ])];
//!
//! let row = json!({ "post": { "title": "Weaving 101" } });
//! let row = row.as_object().unwrap();
//!
//! let markup = studio.render_page(&page, row).unwrap();
//! assert!(markup.contains("<h2 class=\"heading heading-md\">Weaving 101</h2>"));
//! ```
//!
//! ## Token Compilation
//!
//! ```rust
//! use weft::{compile_css, TokenDocument};
//!
//! let doc = TokenDocument::from_json(r#"{
//!     "spacing": { "baseSize": 16, "scale": 1.5 }
//! }"#).unwrap();
//!
//! assert!(compile_css(&doc).contains("--spacing-lg: 24px;"));
//! ```
//!
//! ## Extending
//!
//! User components and schemas layer over the built-ins through
//! [`StudioBuilder`]: register render functions, add schema directories,
//! or override a built-in schema programmatically.

pub mod components;
pub mod schemas;

use std::path::Path;

use thiserror::Error;

use weft_render::props::resolve_invocation;

pub use schemas::BUILTIN_SCHEMAS;

// Core re-exports, mirroring the crate split.
pub use weft_render as render;
pub use weft_render::{
    escape, props, CatalogError, ChildSlots, Component, ComponentInvocation, ComponentRegistry,
    ComponentSchema, Composer, Field, MissingPolicy, PropBag, RenderContext, RenderError,
    SchemaCatalog, SlotSpec, CHILDREN_PROP, EDITABLE_PROP,
};
pub use weft_tokens as tokens;
pub use weft_tokens::{
    colorways, compile, compile_css, emit, Colorway, ResolvedTokenTable, TokenDocument,
    TokenError, TokenVar,
};

/// Error type for the framework pipeline.
#[derive(Debug, Error)]
pub enum WeftError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Tokens(#[from] TokenError),

    /// A page document failed to parse as a list of component invocations.
    #[error("invalid page document: {0}")]
    Page(String),
}

/// The assembled rendering pipeline: catalog + registry + composer.
///
/// A `Studio` is cheap to keep around for the lifetime of a process; its
/// only mutable state is the schema catalog's append-only cache.
pub struct Studio {
    composer: Composer,
}

impl Studio {
    /// A studio with the built-in component set and embedded schemas.
    pub fn standard() -> Result<Self, WeftError> {
        Self::builder().with_builtins()?.build()
    }

    /// An empty builder with no components registered.
    pub fn builder() -> StudioBuilder {
        StudioBuilder::default()
    }

    /// Returns the underlying composer.
    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Renders a single component with the given props.
    pub fn render_component(&self, kind: &str, props: PropBag) -> Result<String, WeftError> {
        Ok(self.composer.render_component(kind, props)?)
    }

    /// Renders a page: a sequence of top-level invocations against a
    /// row/data context.
    ///
    /// Each tree is first resolved top-down (placeholder interpolation at
    /// every node), then rendered top-down. A missing top-level component
    /// degrades to a visible placeholder; any failure deeper in a tree
    /// aborts the whole render.
    pub fn render_page(
        &self,
        invocations: &[ComponentInvocation],
        context: &PropBag,
    ) -> Result<String, WeftError> {
        let mut out = String::new();
        for invocation in invocations {
            let resolved = resolve_invocation(invocation, context);
            out.push_str(&self.composer.render_root(&resolved)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Renders a page from its JSON form: an array of `{type, props}`
    /// invocation objects.
    pub fn render_page_json(&self, json: &str, context: &PropBag) -> Result<String, WeftError> {
        let invocations: Vec<ComponentInvocation> =
            serde_json::from_str(json).map_err(|e| WeftError::Page(e.to_string()))?;
        self.render_page(&invocations, context)
    }
}

/// Builder for a [`Studio`].
#[derive(Default)]
pub struct StudioBuilder {
    catalog: SchemaCatalog,
    registry: ComponentRegistry,
    missing_policy: MissingPolicy,
}

impl StudioBuilder {
    /// Registers the built-in components and their embedded schemas.
    pub fn with_builtins(mut self) -> Result<Self, WeftError> {
        self.catalog.add_embedded_entries(BUILTIN_SCHEMAS)?;
        components::register_builtins(&mut self.registry);
        Ok(self)
    }

    /// Adds a directory of `<name>.json` schema files.
    ///
    /// Directory schemas are shadowed by embedded and programmatic ones.
    pub fn schema_dir<P: AsRef<Path>>(mut self, path: P) -> Result<Self, WeftError> {
        self.catalog.add_schema_dir(path)?;
        Ok(self)
    }

    /// Registers a schema programmatically, shadowing all other sources.
    pub fn schema(mut self, schema: ComponentSchema) -> Self {
        self.catalog.add_schema(schema);
        self
    }

    /// Registers a render function under a type name.
    pub fn component(
        mut self,
        name: impl Into<String>,
        component: impl Component + 'static,
    ) -> Self {
        self.registry.register(name, component);
        self
    }

    /// Sets the policy for unknown component types in nested children.
    pub fn missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Assembles the studio.
    pub fn build(self) -> Result<Studio, WeftError> {
        Ok(Studio {
            composer: Composer::new(self.catalog, self.registry)
                .with_missing_policy(self.missing_policy),
        })
    }
}
