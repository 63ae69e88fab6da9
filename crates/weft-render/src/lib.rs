//! # Weft Render - Component Composition Engine
//!
//! `weft-render` turns declarative component invocation trees into markup.
//! It provides schema-driven prop resolution, child-slot defaulting, string
//! interpolation, and recursive tree rendering.
//!
//! This crate is the composition foundation for the `weft` framework, but
//! can be used independently by any application that renders named,
//! reusable components from data.
//!
//! ## Core Concepts
//!
//! - [`ComponentSchema`]: field defaults, child slots, and known variants
//!   for one component type, loaded from JSON
//! - [`SchemaCatalog`]: multi-source schema resolution with an append-only
//!   read-through cache
//! - [`Component`]: the render-function contract, one per component type
//! - [`ComponentRegistry`]: type name → render capability
//! - [`Composer`]: schema-aware dispatch and recursive child rendering
//! - [`props`]: default merging, `{field}` interpolation, slot resolution
//!
//! ## Quick Start
//!
//! ```rust
//! use weft_render::{Composer, ComponentRegistry, RenderContext, RenderError, SchemaCatalog};
//! use weft_render::{escape, PropBag};
//! use weft_render::props::string_prop;
//! use serde_json::json;
//!
//! fn badge(props: &PropBag, _ctx: &RenderContext<'_>) -> Result<String, RenderError> {
//!     let text = string_prop(props, "text").unwrap_or_default();
//!     if text.is_empty() {
//!         return Ok(String::new());
//!     }
//!     Ok(format!("<span class=\"badge\">{}</span>", escape::text(text)))
//! }
//!
//! let catalog = SchemaCatalog::from_embedded_entries(&[(
//!     "badge.json",
//!     r#"{ "fields": [{ "name": "text", "default": "" }] }"#,
//! )])
//! .unwrap();
//!
//! let mut registry = ComponentRegistry::new();
//! registry.register("badge", badge);
//!
//! let composer = Composer::new(catalog, registry);
//! let props = json!({ "text": "New" }).as_object().unwrap().clone();
//! assert_eq!(
//!     composer.render_component("badge", props).unwrap(),
//!     "<span class=\"badge\">New</span>"
//! );
//! ```
//!
//! ## Interpolation
//!
//! Props may carry `{field}` placeholders resolved against a row/data
//! context before rendering. Lookup is flat or dotted field access only —
//! this is deliberately not a template language:
//!
//! ```rust
//! use weft_render::props::interpolate;
//! use serde_json::json;
//!
//! let row = json!({ "post": { "title": "Weaving" } });
//! let row = row.as_object().unwrap();
//!
//! assert_eq!(interpolate("{post.title}", row), "Weaving");
//! // Unresolvable placeholders stay verbatim: best-effort, never an error.
//! assert_eq!(interpolate("{post.author}", row), "{post.author}");
//! ```

pub mod catalog;
pub mod compose;
mod error;
pub mod escape;
pub mod props;
pub mod schema;

// Error types
pub use error::{CatalogError, RenderError};

// Schema model exports
pub use schema::{
    ChildSlots, ComponentInvocation, ComponentSchema, Field, PropBag, SlotSpec, CHILDREN_PROP,
};

// Catalog exports
pub use catalog::{SchemaCatalog, SCHEMA_EXTENSIONS};

// Composition exports
pub use compose::{
    Component, ComponentRegistry, Composer, MissingPolicy, RenderContext, EDITABLE_PROP,
};

// Resolution exports
pub use props::{
    interpolate, interpolate_props, merge_defaults, resolve_child_props, resolve_invocation,
};
