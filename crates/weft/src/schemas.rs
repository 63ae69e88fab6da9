//! Built-in component schema definitions.
//!
//! Schemas are stored as `(name.json, content)` pairs for registration
//! with the schema catalog.

/// Framework-supplied component schemas.
///
/// Each entry is `(name_with_extension, content)`. The catalog makes them
/// available both with and without extension.
pub const BUILTIN_SCHEMAS: &[(&str, &str)] = &[
    ("container.json", CONTAINER_SCHEMA),
    ("hero.json", HERO_SCHEMA),
    ("heading.json", HEADING_SCHEMA),
    ("text.json", TEXT_SCHEMA),
    ("badge.json", BADGE_SCHEMA),
    ("button.json", BUTTON_SCHEMA),
    ("image.json", IMAGE_SCHEMA),
    ("divider.json", DIVIDER_SCHEMA),
];

const CONTAINER_SCHEMA: &str = r#"{
  "label": "Container",
  "category": "layout",
  "fields": [
    { "name": "width", "default": "normal", "type": "select" }
  ],
  "children": { "slots": [] },
  "variants": ["normal", "wide", "full"]
}"#;

/// Hero: first slot is a heading, second a lead paragraph.
const HERO_SCHEMA: &str = r#"{
  "label": "Hero",
  "category": "layout",
  "fields": [],
  "children": { "slots": [
    { "defaults": { "level": 1, "size": "xl" } },
    { "defaults": { "variant": "lead" } }
  ] }
}"#;

const HEADING_SCHEMA: &str = r#"{
  "label": "Heading",
  "category": "content",
  "fields": [
    { "name": "text", "default": "", "type": "string" },
    { "name": "level", "default": 2, "type": "number" },
    { "name": "size", "default": "md", "type": "select" }
  ]
}"#;

const TEXT_SCHEMA: &str = r#"{
  "label": "Text",
  "category": "content",
  "fields": [
    { "name": "text", "default": "", "type": "string" },
    { "name": "variant", "default": "body", "type": "select" }
  ],
  "variants": ["body", "lead", "muted"]
}"#;

const BADGE_SCHEMA: &str = r#"{
  "label": "Badge",
  "category": "content",
  "fields": [
    { "name": "text", "default": "", "type": "string" },
    { "name": "variant", "default": "default", "type": "select" }
  ],
  "variants": ["default", "accent", "warning"]
}"#;

const BUTTON_SCHEMA: &str = r#"{
  "label": "Button",
  "category": "content",
  "fields": [
    { "name": "label", "default": "", "type": "string" },
    { "name": "href", "default": "", "type": "string" },
    { "name": "variant", "default": "primary", "type": "select" }
  ],
  "variants": ["primary", "secondary", "ghost"]
}"#;

const IMAGE_SCHEMA: &str = r#"{
  "label": "Image",
  "category": "media",
  "fields": [
    { "name": "src", "default": "", "type": "string" },
    { "name": "alt", "default": "", "type": "string" }
  ]
}"#;

const DIVIDER_SCHEMA: &str = r#"{
  "label": "Divider",
  "category": "layout",
  "fields": []
}"#;
