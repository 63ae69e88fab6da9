//! Token compilation: document → resolved variable table.
//!
//! [`compile`] walks a [`TokenDocument`] in a fixed section order — spacing,
//! typography text, typography headings, colors, borders, shadows, radius —
//! and produces a flat, ordered [`ResolvedTokenTable`]. The order is part of
//! the contract: it drives the emitted CSS and any reference listing.
//!
//! Scale-based categories resolve every schema-declared position through
//! the scale formula unless the document carries an explicit enabled
//! override, which wins verbatim (never blended). Flat categories emit only
//! entries carrying a concrete value; missing or partial entries are
//! skipped silently as "not configured".

use crate::document::{ScaleSection, ShadowEntry, TokenDocument};
use crate::scale::{
    round_value, Rounding, ScaleDefinition, ScalePosition, HEADING_DEFAULTS, HEADING_POSITIONS,
    SPACING_DEFAULTS, SPACING_POSITIONS, TEXT_DEFAULTS, TEXT_POSITIONS,
};

/// Category of a resolved token variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Spacing,
    TextSize,
    HeadingSize,
    Color,
    Border,
    Shadow,
    Radius,
}

/// One resolved CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenVar {
    /// Variable name including the `--` prefix, e.g. `--spacing-md`.
    pub name: String,
    pub category: TokenCategory,
    /// Pre-formatted CSS value, e.g. `16px` or `#ff0000`.
    pub value: String,
}

/// Flat ordered sequence of resolved token variables.
///
/// Insertion order is fixed by the section processing order and is
/// preserved through emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTokenTable {
    vars: Vec<TokenVar>,
}

impl ResolvedTokenTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a variable, preserving insertion order.
    pub fn push(&mut self, var: TokenVar) {
        self.vars.push(var);
    }

    /// Iterates variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenVar> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Looks up a variable by name.
    pub fn get(&self, name: &str) -> Option<&TokenVar> {
        self.vars.iter().find(|var| var.name == name)
    }
}

/// A named palette override emitted as a scoped CSS block, independent of
/// the `:root` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colorway {
    pub name: String,
    pub vars: Vec<TokenVar>,
}

/// Compiles a token document into the resolved `:root` variable table.
pub fn compile(doc: &TokenDocument) -> ResolvedTokenTable {
    let mut table = ResolvedTokenTable::new();

    if let Some(section) = &doc.spacing {
        push_scale(
            &mut table,
            section,
            SPACING_POSITIONS,
            SPACING_DEFAULTS,
            Rounding::WholePixel,
            "spacing",
            TokenCategory::Spacing,
        );
    }

    if let Some(typography) = &doc.typography {
        if let Some(section) = &typography.text {
            push_scale(
                &mut table,
                section,
                TEXT_POSITIONS,
                TEXT_DEFAULTS,
                Rounding::Tenth,
                "text-size",
                TokenCategory::TextSize,
            );
        }
        if let Some(section) = &typography.headings {
            push_scale(
                &mut table,
                section,
                HEADING_POSITIONS,
                HEADING_DEFAULTS,
                Rounding::WholePixel,
                "heading-size",
                TokenCategory::HeadingSize,
            );
        }
    }

    if let Some(color) = &doc.color {
        for section in color.sections.iter().filter(|s| !s.colorway) {
            for (name, entry) in &section.colors {
                let Some(value) = concrete(&entry.color) else {
                    continue;
                };
                table.push(TokenVar {
                    name: color_var(section.name.as_deref(), name),
                    category: TokenCategory::Color,
                    value: value.to_string(),
                });
            }
        }
    }

    if let Some(borders) = &doc.borders {
        for (name, entry) in &borders.sizes {
            if let Some(value) = entry.flat_value() {
                table.push(TokenVar {
                    name: format!("--border-{}", name),
                    category: TokenCategory::Border,
                    value: px(value),
                });
            }
        }
    }

    for (name, entry) in &doc.shadows {
        if let Some(value) = shadow_css(entry) {
            table.push(TokenVar {
                name: format!("--shadow-{}", name),
                category: TokenCategory::Shadow,
                value,
            });
        }
    }

    if let Some(radius) = &doc.radius {
        for (name, entry) in &radius.sizes {
            if let Some(value) = entry.flat_value() {
                table.push(TokenVar {
                    name: format!("--radius-{}", name),
                    category: TokenCategory::Radius,
                    value: px(value),
                });
            }
        }
    }

    table
}

/// Extracts the colorway blocks of a document.
///
/// A colorway is a color section flagged `colorway: true` with a name;
/// flagged sections without a name are skipped as unconfigured.
pub fn colorways(doc: &TokenDocument) -> Vec<Colorway> {
    let Some(color) = &doc.color else {
        return Vec::new();
    };

    color
        .sections
        .iter()
        .filter(|section| section.colorway)
        .filter_map(|section| {
            let name = section.name.as_deref()?;
            let vars = section
                .colors
                .iter()
                .filter_map(|(color_name, entry)| {
                    let value = concrete(&entry.color)?;
                    Some(TokenVar {
                        name: format!("--color-{}", color_name),
                        category: TokenCategory::Color,
                        value: value.to_string(),
                    })
                })
                .collect();
            Some(Colorway {
                name: name.to_string(),
                vars,
            })
        })
        .collect()
}

/// Serializes a shadow entry as a single CSS shadow string.
///
/// Requires the full quadruple plus opacity; partial entries yield `None`.
pub fn shadow_css(entry: &ShadowEntry) -> Option<String> {
    let (x, y, blur, spread, opacity) =
        (entry.x?, entry.y?, entry.blur?, entry.spread?, entry.opacity?);
    Some(format!(
        "{}px {}px {}px {}px rgba(0,0,0,{})",
        x, y, blur, spread, opacity
    ))
}

fn push_scale(
    table: &mut ResolvedTokenTable,
    section: &ScaleSection,
    positions: &[ScalePosition],
    defaults: ScaleDefinition,
    rounding: Rounding,
    prefix: &str,
    category: TokenCategory,
) {
    let definition = ScaleDefinition {
        base_size: section.base_size.unwrap_or(defaults.base_size),
        scale: section.scale.unwrap_or(defaults.scale),
    };

    for position in positions {
        // Override wins verbatim; the formula is skipped, never blended.
        let value = match section.sizes.get(position.name).and_then(|o| o.scale_override()) {
            Some(explicit) => explicit,
            None => round_value(definition.value_at(position.position), rounding),
        };
        table.push(TokenVar {
            name: format!("--{}-{}", prefix, position.css_key()),
            category,
            value: px(value),
        });
    }
}

fn color_var(section: Option<&str>, name: &str) -> String {
    match section {
        Some(section) => format!("--color-{}-{}", section, name),
        None => format!("--color-{}", name),
    }
}

/// Formats a pixel value, dropping a trailing `.0`.
fn px(value: f64) -> String {
    format!("{}px", value)
}

/// A present, non-blank string value.
fn concrete(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TokenDocument;

    fn names(table: &ResolvedTokenTable) -> Vec<&str> {
        table.iter().map(|var| var.name.as_str()).collect()
    }

    #[test]
    fn test_empty_document_compiles_to_empty_table() {
        let table = compile(&TokenDocument::default());
        assert!(table.is_empty());
        assert!(colorways(&TokenDocument::default()).is_empty());
    }

    #[test]
    fn test_spacing_scale_values() {
        let doc = TokenDocument::from_json(
            r#"{ "spacing": { "baseSize": 16, "scale": 1.5 } }"#,
        )
        .unwrap();
        let table = compile(&doc);

        assert_eq!(table.get("--spacing-md").unwrap().value, "16px");
        assert_eq!(table.get("--spacing-lg").unwrap().value, "24px");
        assert_eq!(table.get("--spacing-xl").unwrap().value, "36px");
        // 16 / 1.5 = 10.666..., whole-pixel rounding
        assert_eq!(table.get("--spacing-sm").unwrap().value, "11px");
        assert_eq!(table.get("--spacing-xs").unwrap().value, "7px");
    }

    #[test]
    fn test_override_bypasses_formula() {
        let doc = TokenDocument::from_json(
            r#"{ "spacing": {
                "baseSize": 16, "scale": 1.5,
                "sizes": { "lg": { "enabled": true, "value": 99 } }
            } }"#,
        )
        .unwrap();
        let table = compile(&doc);
        assert_eq!(table.get("--spacing-lg").unwrap().value, "99px");
        // Neighbors still follow the formula.
        assert_eq!(table.get("--spacing-xl").unwrap().value, "36px");
    }

    #[test]
    fn test_disabled_override_falls_back_to_formula() {
        let doc = TokenDocument::from_json(
            r#"{ "spacing": {
                "baseSize": 16, "scale": 1.5,
                "sizes": { "lg": { "enabled": false, "value": 99 } }
            } }"#,
        )
        .unwrap();
        let table = compile(&doc);
        assert_eq!(table.get("--spacing-lg").unwrap().value, "24px");
    }

    #[test]
    fn test_text_sizes_round_to_one_decimal() {
        let doc = TokenDocument::from_json(
            r#"{ "typography": { "text": { "baseSize": 16, "scale": 1.25 } } }"#,
        )
        .unwrap();
        let table = compile(&doc);

        // 16 / 1.25^2 = 10.24 -> 10.2; base key comes from the css key
        assert_eq!(table.get("--text-size-xs").unwrap().value, "10.2px");
        assert_eq!(table.get("--text-size-sm").unwrap().value, "12.8px");
        assert_eq!(table.get("--text-size-base").unwrap().value, "16px");
        assert_eq!(table.get("--text-size-lg").unwrap().value, "20px");
    }

    #[test]
    fn test_heading_sizes_round_to_whole_pixels() {
        let doc = TokenDocument::from_json(
            r#"{ "typography": { "headings": { "baseSize": 16, "scale": 1.25 } } }"#,
        )
        .unwrap();
        let table = compile(&doc);

        assert_eq!(table.get("--heading-size-h6").unwrap().value, "16px");
        // 16 * 1.25^2 = 25
        assert_eq!(table.get("--heading-size-h4").unwrap().value, "25px");
        // 16 * 1.25^3 = 31.25 -> 31
        assert_eq!(table.get("--heading-size-h3").unwrap().value, "31px");
        // 16 * 1.25^5 = 48.8... -> 49
        assert_eq!(table.get("--heading-size-h1").unwrap().value, "49px");
    }

    #[test]
    fn test_section_processing_order() {
        let doc = TokenDocument::from_json(
            r##"{
                "radius": { "sizes": { "md": { "value": 8 } } },
                "spacing": { },
                "color": { "sections": [ { "colors": { "ink": { "color": "#111" } } } ] },
                "typography": { "text": { }, "headings": { } }
            }"##,
        )
        .unwrap();
        let table = compile(&doc);
        let names = names(&table);

        let index_of = |name: &str| names.iter().position(|n| *n == name).unwrap();
        assert!(index_of("--spacing-md") < index_of("--text-size-base"));
        assert!(index_of("--text-size-base") < index_of("--heading-size-h1"));
        assert!(index_of("--heading-size-h1") < index_of("--color-ink"));
        assert!(index_of("--color-ink") < index_of("--radius-md"));
    }

    #[test]
    fn test_color_sections_and_skipped_entries() {
        let doc = TokenDocument::from_json(
            r##"{ "color": { "sections": [
                { "name": "brand", "colors": {
                    "accent": { "color": "#6644cc" },
                    "unset": { },
                    "blank": { "color": "   " }
                } }
            ] } }"##,
        )
        .unwrap();
        let table = compile(&doc);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("--color-brand-accent").unwrap().value, "#6644cc");
    }

    #[test]
    fn test_borders_and_radius() {
        let doc = TokenDocument::from_json(
            r#"{
                "borders": { "sizes": {
                    "thin": { "enabled": true, "value": 1 },
                    "off": { "enabled": false, "value": 4 },
                    "unset": { }
                } },
                "radius": { "sizes": { "pill": { "value": 999 } } }
            }"#,
        )
        .unwrap();
        let table = compile(&doc);

        assert_eq!(table.get("--border-thin").unwrap().value, "1px");
        assert!(table.get("--border-off").is_none());
        assert!(table.get("--border-unset").is_none());
        assert_eq!(table.get("--radius-pill").unwrap().value, "999px");
    }

    #[test]
    fn test_shadow_serialization() {
        let entry = ShadowEntry {
            x: Some(0.0),
            y: Some(2.0),
            blur: Some(4.0),
            spread: Some(0.0),
            opacity: Some(0.1),
        };
        assert_eq!(
            shadow_css(&entry).unwrap(),
            "0px 2px 4px 0px rgba(0,0,0,0.1)"
        );
    }

    #[test]
    fn test_partial_shadow_skipped() {
        let doc = TokenDocument::from_json(
            r#"{ "shadows": {
                "card": { "x": 0, "y": 2, "blur": 4, "spread": 0, "opacity": 0.1 },
                "half": { "x": 0, "y": 2 }
            } }"#,
        )
        .unwrap();
        let table = compile(&doc);

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("--shadow-card").unwrap().value,
            "0px 2px 4px 0px rgba(0,0,0,0.1)"
        );
    }

    #[test]
    fn test_colorways_extracted_not_in_root() {
        let doc = TokenDocument::from_json(
            r##"{ "color": { "sections": [
                { "name": "brand", "colors": { "accent": { "color": "#6644cc" } } },
                { "name": "dusk", "colorway": true, "colors": { "accent": { "color": "#aa3311" } } },
                { "colorway": true, "colors": { "accent": { "color": "#ffffff" } } }
            ] } }"##,
        )
        .unwrap();

        let table = compile(&doc);
        assert_eq!(table.len(), 1);
        assert!(table.get("--color-brand-accent").is_some());

        let ways = colorways(&doc);
        // The unnamed flagged section is skipped.
        assert_eq!(ways.len(), 1);
        assert_eq!(ways[0].name, "dusk");
        assert_eq!(ways[0].vars[0].name, "--color-accent");
        assert_eq!(ways[0].vars[0].value, "#aa3311");
    }
}
