//! Prop resolution: default merging, interpolation, and slot defaults.
//!
//! Three independent responsibilities, composed by the renderer:
//!
//! 1. [`merge_defaults`] fills schema defaults under caller-supplied props.
//! 2. [`interpolate`] / [`interpolate_props`] substitute `{field}`
//!    placeholders against a row/data context.
//! 3. [`resolve_child_props`] layers a parent's per-slot defaults under a
//!    child's raw props.
//!
//! # Interpolation syntax
//!
//! Placeholders are `{identifier}` or `{identifier.identifier...}` where
//! identifiers use letters, digits, underscore, and dot. Dotted paths walk
//! nested mappings. This is deliberately not a template language: no
//! expressions, loops, conditionals, filters, or array indexing.
//!
//! Resolution is best-effort: when any path segment is missing, an
//! intermediate value is not a mapping, or the final value is not a scalar,
//! the placeholder text is left verbatim. Templates stay valid when the
//! context is incomplete; nothing errors and nothing is partially
//! substituted.

use serde_json::Value;

use crate::schema::{ComponentInvocation, ComponentSchema, PropBag};

/// Merges schema defaults under caller-supplied props.
///
/// For every schema field with a default, the default is inserted when the
/// caller omitted the prop. Keys already present are never overwritten, and
/// caller keys unknown to the schema pass through unchanged (the schema is
/// not a whitelist).
pub fn merge_defaults(schema: &ComponentSchema, props: PropBag) -> PropBag {
    let mut merged = props;
    for field in &schema.fields {
        if let Some(default) = &field.default {
            if !merged.contains_key(&field.name) {
                merged.insert(field.name.clone(), default.clone());
            }
        }
    }
    merged
}

/// Substitutes `{field}` placeholders in a template string.
///
/// Unresolvable placeholders stay verbatim; text that doesn't form a
/// placeholder (stray braces, disallowed characters) is copied through
/// untouched.
///
/// # Example
///
/// ```rust
/// use weft_render::props::interpolate;
/// use serde_json::json;
///
/// let context = json!({ "post": { "title": "Hello" } });
/// let context = context.as_object().unwrap();
///
/// assert_eq!(interpolate("{post.title}!", context), "Hello!");
/// assert_eq!(interpolate("{post.author}", context), "{post.author}");
/// ```
pub fn interpolate(template: &str, context: &PropBag) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_brace = &rest[open + 1..];

        let body_len = after_brace
            .char_indices()
            .find(|(_, c)| !is_path_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(after_brace.len());

        if body_len > 0 && after_brace[body_len..].starts_with('}') {
            let path = &after_brace[..body_len];
            match lookup_scalar(context, path) {
                Some(text) => out.push_str(&text),
                None => {
                    out.push('{');
                    out.push_str(path);
                    out.push('}');
                }
            }
            rest = &after_brace[body_len + 1..];
        } else {
            out.push('{');
            rest = after_brace;
        }
    }

    out.push_str(rest);
    out
}

/// Interpolates every string-valued entry of a prop bag.
///
/// Nested prop bags are recursed into. List entries are recursed
/// element-wise into their object elements (so the props of nested
/// component invocations resolve too); all other values are untouched.
pub fn interpolate_props(props: &PropBag, context: &PropBag) -> PropBag {
    props
        .iter()
        .map(|(name, value)| (name.clone(), interpolate_value(value, context)))
        .collect()
}

fn interpolate_value(value: &Value, context: &PropBag) -> Value {
    match value {
        Value::String(s) => Value::String(interpolate(s, context)),
        Value::Object(bag) => Value::Object(interpolate_props(bag, context)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(bag) => Value::Object(interpolate_props(bag, context)),
                    other => other.clone(),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Resolves an invocation tree against a row/data context.
///
/// This is the top-down resolution pass: every node's props are
/// interpolated (including the props of nested children) before rendering
/// begins, so rendering itself is context-free.
pub fn resolve_invocation(
    invocation: &ComponentInvocation,
    context: &PropBag,
) -> ComponentInvocation {
    ComponentInvocation {
        kind: invocation.kind.clone(),
        props: interpolate_props(&invocation.props, context),
    }
}

/// Layers a parent's slot defaults under a child's raw props.
///
/// When the parent schema declares a slot at `slot_index`, the slot's
/// defaults are merged under `raw` (raw wins on key collision). With no
/// slot at that index, `raw` is returned unchanged.
pub fn resolve_child_props(
    parent: &ComponentSchema,
    slot_index: usize,
    raw: PropBag,
) -> PropBag {
    let Some(slot) = parent.slot(slot_index) else {
        return raw;
    };
    let mut merged = slot.defaults.clone();
    for (name, value) in raw {
        merged.insert(name, value);
    }
    merged
}

/// Returns a string prop, if present and actually a string.
pub fn string_prop<'a>(props: &'a PropBag, name: &str) -> Option<&'a str> {
    props.get(name).and_then(Value::as_str)
}

/// Returns an integer prop, accepting JSON numbers only.
pub fn integer_prop(props: &PropBag, name: &str) -> Option<i64> {
    props.get(name).and_then(Value::as_i64)
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Walks a dotted path through nested mappings, yielding the scalar text.
///
/// `null` counts as unconfigured, like a missing key.
fn lookup_scalar(context: &PropBag, path: &str) -> Option<String> {
    let mut segments = path.split('.');
    let mut current = context.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    match current {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;
    use serde_json::json;

    fn bag(value: Value) -> PropBag {
        value.as_object().unwrap().clone()
    }

    // =========================================================================
    // merge_defaults
    // =========================================================================

    #[test]
    fn test_merge_fills_missing_defaults() {
        let mut schema = ComponentSchema::empty("badge");
        schema.fields = vec![
            Field::new("text", json!("")),
            Field::new("variant", json!("default")),
        ];

        let merged = merge_defaults(&schema, bag(json!({ "text": "New" })));
        assert_eq!(merged.get("text"), Some(&json!("New")));
        assert_eq!(merged.get("variant"), Some(&json!("default")));
    }

    #[test]
    fn test_merge_never_overwrites() {
        let mut schema = ComponentSchema::empty("badge");
        schema.fields = vec![Field::new("variant", json!("default"))];

        let merged = merge_defaults(&schema, bag(json!({ "variant": "accent" })));
        assert_eq!(merged.get("variant"), Some(&json!("accent")));
    }

    #[test]
    fn test_merge_passes_unknown_keys_through() {
        let schema = ComponentSchema::empty("badge");
        let merged = merge_defaults(&schema, bag(json!({ "custom": 7 })));
        assert_eq!(merged.get("custom"), Some(&json!(7)));
    }

    #[test]
    fn test_merge_skips_fields_without_default() {
        let mut schema = ComponentSchema::empty("badge");
        schema.fields = vec![Field {
            name: "text".to_string(),
            default: None,
            kind: None,
        }];

        let merged = merge_defaults(&schema, PropBag::new());
        assert!(merged.is_empty());
    }

    // =========================================================================
    // interpolate
    // =========================================================================

    #[test]
    fn test_interpolate_identity_without_placeholders() {
        let context = bag(json!({ "a": "x" }));
        assert_eq!(interpolate("plain text", &context), "plain text");
    }

    #[test]
    fn test_interpolate_simple_and_dotted() {
        let context = bag(json!({ "name": "Ada", "a": { "b": "x" } }));
        assert_eq!(interpolate("Hi {name}", &context), "Hi Ada");
        assert_eq!(interpolate("{a.b}", &context), "x");
    }

    #[test]
    fn test_interpolate_missing_stays_verbatim() {
        let context = bag(json!({ "a": {} }));
        assert_eq!(interpolate("{a.b}", &context), "{a.b}");
        assert_eq!(interpolate("{missing}", &context), "{missing}");
    }

    #[test]
    fn test_interpolate_non_scalar_stays_verbatim() {
        let context = bag(json!({ "a": { "b": { "c": 1 } }, "list": [1, 2] }));
        assert_eq!(interpolate("{a.b}", &context), "{a.b}");
        assert_eq!(interpolate("{list}", &context), "{list}");
    }

    #[test]
    fn test_interpolate_null_counts_as_unconfigured() {
        let context = bag(json!({ "a": null }));
        assert_eq!(interpolate("{a}", &context), "{a}");
    }

    #[test]
    fn test_interpolate_numbers_and_booleans() {
        let context = bag(json!({ "count": 42, "price": 19.99, "live": true }));
        assert_eq!(
            interpolate("{count} at {price}, live: {live}", &context),
            "42 at 19.99, live: true"
        );
    }

    #[test]
    fn test_interpolate_leaves_non_placeholder_braces() {
        let context = bag(json!({ "a": "x" }));
        assert_eq!(interpolate("{ a }", &context), "{ a }");
        assert_eq!(interpolate("{a", &context), "{a");
        assert_eq!(interpolate("{}", &context), "{}");
        assert_eq!(interpolate("} {a} {", &context), "} x {");
    }

    #[test]
    fn test_interpolate_adjacent_placeholders() {
        let context = bag(json!({ "a": "1", "b": "2" }));
        assert_eq!(interpolate("{a}{b}", &context), "12");
    }

    #[test]
    fn test_interpolate_empty_path_segment_is_missing() {
        let context = bag(json!({ "a": { "b": "x" } }));
        assert_eq!(interpolate("{a..b}", &context), "{a..b}");
        assert_eq!(interpolate("{.a}", &context), "{.a}");
    }

    #[test]
    fn test_interpolate_multibyte_text() {
        let context = bag(json!({ "name": "Æon" }));
        assert_eq!(interpolate("héllo {name} — bye", &context), "héllo Æon — bye");
    }

    // =========================================================================
    // interpolate_props
    // =========================================================================

    #[test]
    fn test_interpolate_props_recurses_into_bags_and_lists() {
        let context = bag(json!({ "title": "Hello", "n": 3 }));
        let props = bag(json!({
            "heading": "{title}",
            "meta": { "caption": "{title} ({n})" },
            "children": [
                { "type": "badge", "props": { "text": "{title}" } },
                "loose string stays"
            ],
            "count": 7
        }));

        let resolved = interpolate_props(&props, &context);
        assert_eq!(resolved.get("heading"), Some(&json!("Hello")));
        assert_eq!(resolved["meta"]["caption"], json!("Hello (3)"));
        assert_eq!(
            resolved["children"][0]["props"]["text"],
            json!("Hello")
        );
        assert_eq!(resolved["children"][1], json!("loose string stays"));
        assert_eq!(resolved.get("count"), Some(&json!(7)));
    }

    // =========================================================================
    // resolve_child_props
    // =========================================================================

    fn parent_with_slot() -> ComponentSchema {
        serde_json::from_str(
            r#"{
                "children": { "slots": [
                    { "defaults": { "variant": "lead", "size": "lg" } }
                ] }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_slot_defaults_merge_under_raw() {
        let parent = parent_with_slot();
        let resolved = resolve_child_props(&parent, 0, bag(json!({ "variant": "muted" })));
        assert_eq!(resolved.get("variant"), Some(&json!("muted")));
        assert_eq!(resolved.get("size"), Some(&json!("lg")));
    }

    #[test]
    fn test_no_slot_is_identity() {
        let parent = parent_with_slot();
        let raw = bag(json!({ "variant": "muted" }));
        assert_eq!(resolve_child_props(&parent, 5, raw.clone()), raw);

        let slotless = ComponentSchema::empty("text");
        assert_eq!(resolve_child_props(&slotless, 0, raw.clone()), raw);
    }

    // =========================================================================
    // prop accessors
    // =========================================================================

    #[test]
    fn test_prop_accessors() {
        let props = bag(json!({ "text": "hi", "level": 3 }));
        assert_eq!(string_prop(&props, "text"), Some("hi"));
        assert_eq!(string_prop(&props, "level"), None);
        assert_eq!(integer_prop(&props, "level"), Some(3));
        assert_eq!(integer_prop(&props, "missing"), None);
    }
}
