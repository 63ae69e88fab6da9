//! Layout components: children owners and structure.

use weft_render::props::string_prop;
use weft_render::{escape, Component, PropBag, RenderContext, RenderError};

/// A width-constrained wrapper around arbitrary children.
///
/// Renders its wrapper even when the children list is empty or every child
/// degrades to nothing.
pub struct Container;

impl Component for Container {
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let width = string_prop(props, "width").unwrap_or("normal");
        let children = ctx.render_children(props.get("children"))?;
        Ok(format!(
            "<div class=\"container container-{}\"{}>{}</div>",
            escape::attr(width),
            ctx.editable_attr(props),
            children
        ))
    }
}

/// A page header section with slotted children.
///
/// Slot 0 defaults to a level-1 extra-large heading, slot 1 to a lead
/// paragraph (see the hero schema).
pub struct Hero;

impl Component for Hero {
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let children = ctx.render_children(props.get("children"))?;
        Ok(format!(
            "<section class=\"hero\"{}>{}</section>",
            ctx.editable_attr(props),
            children
        ))
    }
}

/// A horizontal rule.
pub struct Divider;

impl Component for Divider {
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(format!("<hr class=\"divider\"{}>", ctx.editable_attr(props)))
    }
}

#[cfg(test)]
mod tests {
    use crate::Studio;
    use serde_json::json;
    use weft_render::PropBag;

    fn props(value: serde_json::Value) -> PropBag {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_container_renders_wrapper_without_children() {
        let studio = Studio::standard().unwrap();
        let markup = studio
            .render_component("container", PropBag::new())
            .unwrap();
        assert_eq!(markup, "<div class=\"container container-normal\"></div>");
    }

    #[test]
    fn test_container_width_variant() {
        let studio = Studio::standard().unwrap();
        let markup = studio
            .render_component("container", props(json!({ "width": "wide" })))
            .unwrap();
        assert!(markup.contains("container-wide"));
    }

    #[test]
    fn test_divider_is_constant() {
        let studio = Studio::standard().unwrap();
        let markup = studio.render_component("divider", PropBag::new()).unwrap();
        assert_eq!(markup, "<hr class=\"divider\">");
    }

    #[test]
    fn test_hero_slot_defaults() {
        let studio = Studio::standard().unwrap();
        let markup = studio
            .render_component(
                "hero",
                props(json!({
                    "children": [
                        { "type": "heading", "props": { "text": "Welcome" } },
                        { "type": "text", "props": { "text": "A fine loom." } }
                    ]
                })),
            )
            .unwrap();

        // Slot 0 promotes the heading to level 1, size xl.
        assert!(markup.contains("<h1 class=\"heading heading-xl\">Welcome</h1>"));
        // Slot 1 promotes the paragraph to the lead variant.
        assert!(markup.contains("<p class=\"text text-lead\">A fine loom.</p>"));
    }
}
