//! CSS emission: resolved tokens → custom-property text.
//!
//! Emission is pure string formatting. Values are trusted as pre-formatted
//! CSS strings (`16px`, `#ff0000`, a full shadow string); no validation
//! happens here.

use std::fmt::Write;

use crate::compile::{Colorway, ResolvedTokenTable};

/// Serializes a resolved table and its colorways into CSS text.
///
/// Produces a single `:root { ... }` block in the table's insertion order,
/// followed by one `[data-colorway="name"] { ... }` block per colorway.
/// An empty table yields an empty `:root {}` block and no colorway blocks.
///
/// # Example
///
/// ```rust
/// use weft_tokens::{compile, colorways, emit, TokenDocument};
///
/// let doc = TokenDocument::from_json(r#"{ "spacing": { "baseSize": 16, "scale": 1.5 } }"#).unwrap();
/// let css = emit(&compile(&doc), &colorways(&doc));
/// assert!(css.starts_with(":root {\n"));
/// assert!(css.contains("  --spacing-md: 16px;\n"));
/// ```
pub fn emit(table: &ResolvedTokenTable, colorways: &[Colorway]) -> String {
    let mut css = String::new();

    css.push_str(":root {\n");
    for var in table.iter() {
        let _ = writeln!(css, "  {}: {};", var.name, var.value);
    }
    css.push_str("}\n");

    for colorway in colorways {
        let _ = writeln!(css, "\n[data-colorway=\"{}\"] {{", colorway.name);
        for var in &colorway.vars {
            let _ = writeln!(css, "  {}: {};", var.name, var.value);
        }
        css.push_str("}\n");
    }

    css
}
