//! Built-in component render functions.
//!
//! Each component honors the shared render contract: schema defaults fill
//! omitted fields before dispatch, empty required content renders to
//! nothing, the editable marker passes through uninterpreted, and children
//! owners delegate to [`RenderContext::render_children`].

mod content;
mod layout;

pub use content::{Badge, Button, Heading, Image, Text};
pub use layout::{Container, Divider, Hero};

use weft_render::ComponentRegistry;

/// Registers every built-in component under its canonical type name.
pub fn register_builtins(registry: &mut ComponentRegistry) {
    registry.register("container", Container);
    registry.register("hero", Hero);
    registry.register("heading", Heading);
    registry.register("text", Text);
    registry.register("badge", Badge);
    registry.register("button", Button);
    registry.register("image", Image);
    registry.register("divider", Divider);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_has_a_schema() {
        let mut registry = ComponentRegistry::new();
        register_builtins(&mut registry);

        let schema_names: Vec<&str> = crate::schemas::BUILTIN_SCHEMAS
            .iter()
            .map(|(name, _)| name.trim_end_matches(".json"))
            .collect();

        for name in registry.names() {
            assert!(
                schema_names.contains(&name),
                "component {} has no schema",
                name
            );
        }
    }
}
