//! # Weft Tokens - Design Token Compiler
//!
//! `weft-tokens` compiles a hierarchical design-token document into CSS
//! custom properties: a `:root` block of resolved variables plus scoped
//! `[data-colorway="..."]` override blocks.
//!
//! ## Core Concepts
//!
//! - [`TokenDocument`]: the token source (JSON or YAML) — spacing,
//!   typography, colors, borders, shadows, radius
//! - Scale resolution: `round(baseSize * scale^position)` over
//!   schema-declared named positions, with explicit per-size overrides
//!   winning verbatim
//! - [`ResolvedTokenTable`]: the flat, ordered variable table
//! - [`emit`]: pure serialization into CSS text
//!
//! ## Quick Start
//!
//! ```rust
//! use weft_tokens::{compile_css, TokenDocument};
//!
//! let doc = TokenDocument::from_json(r#"{
//!     "spacing": { "baseSize": 16, "scale": 1.5 },
//!     "shadows": { "card": { "x": 0, "y": 2, "blur": 4, "spread": 0, "opacity": 0.1 } }
//! }"#).unwrap();
//!
//! let css = compile_css(&doc);
//! assert!(css.contains("--spacing-lg: 24px;"));
//! assert!(css.contains("--shadow-card: 0px 2px 4px 0px rgba(0,0,0,0.1);"));
//! ```
//!
//! ## Error Model
//!
//! A document that fails to parse is fatal ([`TokenError::Parse`]): the
//! whole compile aborts and no partial CSS is emitted. Entries inside a
//! valid document that are missing or partial are "not configured" and are
//! skipped silently.

pub mod compile;
pub mod css;
pub mod document;
mod error;
pub mod scale;

pub use compile::{
    colorways, compile, shadow_css, Colorway, ResolvedTokenTable, TokenCategory, TokenVar,
};
pub use css::emit;
pub use document::{
    ColorConfig, ColorEntry, ColorSection, ScaleSection, ShadowEntry, SizeOverride, SizedSection,
    TokenDocument, Typography,
};
pub use error::TokenError;
pub use scale::{
    round_value, Rounding, ScaleDefinition, ScalePosition, HEADING_POSITIONS, SPACING_POSITIONS,
    TEXT_POSITIONS,
};

/// Compiles a token document straight to CSS text.
///
/// Convenience for the common pipeline:
/// [`compile`] → [`colorways`] → [`emit`].
pub fn compile_css(doc: &TokenDocument) -> String {
    emit(&compile(doc), &colorways(doc))
}
