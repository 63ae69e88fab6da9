//! Content components: headings, text, badges, buttons, images.

use weft_render::props::{integer_prop, string_prop};
use weft_render::{escape, Component, PropBag, RenderContext, RenderError};

/// A section heading. Empty text renders nothing.
pub struct Heading;

impl Component for Heading {
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let text = string_prop(props, "text").unwrap_or_default();
        if text.is_empty() {
            return Ok(String::new());
        }
        let level = integer_prop(props, "level").unwrap_or(2).clamp(1, 6);
        let size = string_prop(props, "size").unwrap_or("md");
        Ok(format!(
            "<h{level} class=\"heading heading-{}\"{}>{}</h{level}>",
            escape::attr(size),
            ctx.editable_attr(props),
            escape::text(text),
        ))
    }
}

/// A paragraph of body text. Empty text renders nothing.
pub struct Text;

impl Component for Text {
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let text = string_prop(props, "text").unwrap_or_default();
        if text.is_empty() {
            return Ok(String::new());
        }
        let variant = string_prop(props, "variant").unwrap_or("body");
        Ok(format!(
            "<p class=\"text text-{}\"{}>{}</p>",
            escape::attr(variant),
            ctx.editable_attr(props),
            escape::text(text)
        ))
    }
}

/// A small inline label. Empty text renders nothing.
pub struct Badge;

impl Component for Badge {
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let text = string_prop(props, "text").unwrap_or_default();
        if text.is_empty() {
            return Ok(String::new());
        }
        let variant = string_prop(props, "variant").unwrap_or("default");
        Ok(format!(
            "<span class=\"badge badge-{}\"{}>{}</span>",
            escape::attr(variant),
            ctx.editable_attr(props),
            escape::text(text)
        ))
    }
}

/// A call-to-action. Renders an anchor when `href` is set, a plain button
/// otherwise; an empty label renders nothing.
pub struct Button;

impl Component for Button {
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let label = string_prop(props, "label").unwrap_or_default();
        if label.is_empty() {
            return Ok(String::new());
        }
        let variant = string_prop(props, "variant").unwrap_or("primary");
        let href = string_prop(props, "href").unwrap_or_default();

        if href.is_empty() {
            Ok(format!(
                "<button class=\"button button-{}\"{}>{}</button>",
                escape::attr(variant),
                ctx.editable_attr(props),
                escape::text(label)
            ))
        } else {
            Ok(format!(
                "<a class=\"button button-{}\" href=\"{}\"{}>{}</a>",
                escape::attr(variant),
                escape::attr(href),
                ctx.editable_attr(props),
                escape::text(label)
            ))
        }
    }
}

/// An image. An empty `src` renders nothing.
pub struct Image;

impl Component for Image {
    fn render(&self, props: &PropBag, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let src = string_prop(props, "src").unwrap_or_default();
        if src.is_empty() {
            return Ok(String::new());
        }
        let alt = string_prop(props, "alt").unwrap_or_default();
        Ok(format!(
            "<img class=\"image\" src=\"{}\" alt=\"{}\"{}>",
            escape::attr(src),
            escape::attr(alt),
            ctx.editable_attr(props)
        ))
    }
}
