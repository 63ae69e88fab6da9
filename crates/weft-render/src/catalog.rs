//! Schema catalog: multi-source component schema resolution with caching.
//!
//! This module provides [`SchemaCatalog`], which resolves component type
//! names to their [`ComponentSchema`] from multiple sources:
//!
//! 1. Programmatic schemas (added via [`SchemaCatalog::add_schema`]) have
//!    highest priority
//! 2. Embedded schemas (for release builds, via
//!    [`SchemaCatalog::add_embedded_entries`])
//! 3. Schema directories, searched in registration order (first directory
//!    wins)
//!
//! Names can be specified with or without the `.json` extension: both
//! `"badge"` and `"badge.json"` resolve to the same schema.
//!
//! # Caching
//!
//! File-backed schemas are parsed once and memoized per name. The cache is
//! append-only for the lifetime of the catalog: populate-on-miss, no
//! eviction. Repeated lookups within a render pass are O(1) after the first
//! load. Entries are handed out as `Arc<ComponentSchema>` and are immutable
//! once inserted.
//!
//! # Thread Safety
//!
//! The catalog is not thread-safe; each render pipeline owns its own
//! instance. For shared use, wrap in appropriate synchronization.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::CatalogError;
use crate::schema::ComponentSchema;

/// Recognized schema file extensions.
///
/// Schemas are one JSON document per component type; no alternative
/// formats are searched.
pub const SCHEMA_EXTENSIONS: &[&str] = &[".json"];

/// Resolves component names to schemas, caching file loads.
///
/// # Example
///
/// ```rust
/// use weft_render::SchemaCatalog;
///
/// let mut catalog = SchemaCatalog::new();
/// catalog
///     .add_embedded_entries(&[("badge.json", r#"{ "fields": [{ "name": "text", "default": "" }] }"#)])
///     .unwrap();
///
/// let schema = catalog.load("badge").unwrap();
/// assert_eq!(schema.fields.len(), 1);
/// ```
#[derive(Default)]
pub struct SchemaCatalog {
    /// Programmatic schemas (highest priority).
    inline: HashMap<String, Arc<ComponentSchema>>,
    /// Embedded schemas, parsed eagerly at registration.
    embedded: HashMap<String, Arc<ComponentSchema>>,
    /// Schema directories in registration order.
    dirs: Vec<PathBuf>,
    /// Read-through cache for file-backed schemas. Append-only; no eviction.
    cache: RefCell<HashMap<String, Arc<ComponentSchema>>>,
}

impl SchemaCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from embedded `(name_with_ext, json)` entries.
    ///
    /// This is the primary entry point for compile-time embedded schemas.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if any entry is not a valid schema
    /// document.
    pub fn from_embedded_entries(entries: &[(&str, &str)]) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.add_embedded_entries(entries)?;
        Ok(catalog)
    }

    /// Registers a schema programmatically.
    ///
    /// Programmatic schemas have the highest priority and shadow embedded
    /// and file-based schemas with the same name.
    pub fn add_schema(&mut self, schema: ComponentSchema) {
        self.inline.insert(schema.name.clone(), Arc::new(schema));
    }

    /// Registers pre-embedded schema documents (for release builds).
    ///
    /// Each entry is `(name_with_extension, content)`, e.g.
    /// `("badge.json", "{...}")`. Entries are parsed eagerly so that a
    /// malformed embedded schema fails at startup rather than mid-render.
    pub fn add_embedded_entries(&mut self, entries: &[(&str, &str)]) -> Result<(), CatalogError> {
        for (name, content) in entries {
            let base = strip_extension(name);
            let schema = parse_schema(base, content)?;
            self.embedded.insert(base.to_string(), Arc::new(schema));
        }
        Ok(())
    }

    /// Adds a directory to search for `<name>.json` schema files.
    ///
    /// Directories are searched in registration order; the first directory
    /// containing the file wins.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotADirectory`] if the path doesn't exist or
    /// isn't a directory.
    pub fn add_schema_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CatalogError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(CatalogError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    /// Loads the schema for a component name.
    ///
    /// Resolution order: programmatic, embedded, cached file loads, then
    /// schema directories in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no source has the name,
    /// [`CatalogError::Parse`] / [`CatalogError::Read`] when a file source
    /// exists but cannot be used.
    pub fn load(&self, name: &str) -> Result<Arc<ComponentSchema>, CatalogError> {
        let base = strip_extension(name);

        if let Some(schema) = self.inline.get(base) {
            return Ok(Arc::clone(schema));
        }
        if let Some(schema) = self.embedded.get(base) {
            return Ok(Arc::clone(schema));
        }
        if let Some(schema) = self.cache.borrow().get(base) {
            return Ok(Arc::clone(schema));
        }

        for dir in &self.dirs {
            let path = dir.join(format!("{}.json", base));
            if !path.is_file() {
                continue;
            }
            let content = std::fs::read_to_string(&path).map_err(|e| CatalogError::Read {
                path: path.clone(),
                message: e.to_string(),
            })?;
            let schema = Arc::new(parse_schema(base, &content)?);
            self.cache
                .borrow_mut()
                .insert(base.to_string(), Arc::clone(&schema));
            return Ok(schema);
        }

        Err(CatalogError::NotFound {
            name: base.to_string(),
        })
    }

    /// Loads the schema for a component name, treating absence as "no
    /// constraints".
    ///
    /// A missing schema yields [`ComponentSchema::empty`]; a schema that
    /// exists but cannot be read or parsed still fails.
    pub fn load_or_default(&self, name: &str) -> Result<Arc<ComponentSchema>, CatalogError> {
        match self.load(name) {
            Ok(schema) => Ok(schema),
            Err(CatalogError::NotFound { name }) => Ok(Arc::new(ComponentSchema::empty(name))),
            Err(err) => Err(err),
        }
    }

    /// Returns the known style variants for a component.
    ///
    /// Empty when the component is unknown or declares none.
    pub fn variants(&self, name: &str) -> Vec<String> {
        self.load(name)
            .map(|schema| schema.variants.clone())
            .unwrap_or_default()
    }

    /// Returns true if any source has a schema for the name.
    pub fn contains(&self, name: &str) -> bool {
        self.load(name).is_ok()
    }
}

/// Strips a recognized schema extension from a name, if present.
fn strip_extension(name: &str) -> &str {
    for ext in SCHEMA_EXTENSIONS {
        if let Some(base) = name.strip_suffix(ext) {
            return base;
        }
    }
    name
}

/// Parses one schema document, stamping it with its resolution name.
fn parse_schema(name: &str, content: &str) -> Result<ComponentSchema, CatalogError> {
    let mut schema: ComponentSchema =
        serde_json::from_str(content).map_err(|e| CatalogError::Parse {
            name: name.to_string(),
            message: e.to_string(),
        })?;
    schema.name = name.to_string();
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const BADGE: &str = r#"{
        "label": "Badge",
        "fields": [
            { "name": "text", "default": "" },
            { "name": "variant", "default": "default" }
        ],
        "variants": ["default", "accent"]
    }"#;

    fn write_schema(dir: &Path, file: &str, content: &str) {
        let path = dir.join(file);
        let mut f = std::fs::File::create(path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_not_found() {
        let catalog = SchemaCatalog::new();
        let result = catalog.load("missing");
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
    }

    #[test]
    fn test_load_or_default_is_empty_schema() {
        let catalog = SchemaCatalog::new();
        let schema = catalog.load_or_default("missing").unwrap();
        assert_eq!(schema.name, "missing");
        assert!(schema.fields.is_empty());
    }

    #[test]
    fn test_embedded_entries() {
        let catalog = SchemaCatalog::from_embedded_entries(&[("badge.json", BADGE)]).unwrap();

        let schema = catalog.load("badge").unwrap();
        assert_eq!(schema.name, "badge");
        assert_eq!(schema.label.as_deref(), Some("Badge"));

        // With or without extension
        assert!(catalog.load("badge.json").is_ok());
    }

    #[test]
    fn test_embedded_parse_error_fails_at_registration() {
        let result = SchemaCatalog::from_embedded_entries(&[("broken.json", "{ not json")]);
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_programmatic_shadows_embedded() {
        let mut catalog = SchemaCatalog::from_embedded_entries(&[("badge.json", BADGE)]).unwrap();

        let mut custom = ComponentSchema::empty("badge");
        custom.label = Some("Custom badge".to_string());
        catalog.add_schema(custom);

        let schema = catalog.load("badge").unwrap();
        assert_eq!(schema.label.as_deref(), Some("Custom badge"));
    }

    #[test]
    fn test_dir_loading_and_memoization() {
        let temp = TempDir::new().unwrap();
        write_schema(temp.path(), "badge.json", BADGE);

        let mut catalog = SchemaCatalog::new();
        catalog.add_schema_dir(temp.path()).unwrap();

        let first = catalog.load("badge").unwrap();
        assert_eq!(first.fields.len(), 2);

        // Remove the file: the cached entry must keep resolving.
        std::fs::remove_file(temp.path().join("badge.json")).unwrap();
        let second = catalog.load("badge").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dir_order_first_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_schema(first.path(), "badge.json", r#"{ "label": "First" }"#);
        write_schema(second.path(), "badge.json", r#"{ "label": "Second" }"#);

        let mut catalog = SchemaCatalog::new();
        catalog.add_schema_dir(first.path()).unwrap();
        catalog.add_schema_dir(second.path()).unwrap();

        let schema = catalog.load("badge").unwrap();
        assert_eq!(schema.label.as_deref(), Some("First"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        write_schema(temp.path(), "broken.json", "{ nope");

        let mut catalog = SchemaCatalog::new();
        catalog.add_schema_dir(temp.path()).unwrap();

        assert!(matches!(
            catalog.load("broken"),
            Err(CatalogError::Parse { .. })
        ));
        // load_or_default only absorbs absence, not malformed sources.
        assert!(matches!(
            catalog.load_or_default("broken"),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_dir_rejected() {
        let mut catalog = SchemaCatalog::new();
        let result = catalog.add_schema_dir("/nonexistent/path/that/does/not/exist");
        assert!(matches!(result, Err(CatalogError::NotADirectory { .. })));
    }

    #[test]
    fn test_variants() {
        let catalog = SchemaCatalog::from_embedded_entries(&[("badge.json", BADGE)]).unwrap();
        assert_eq!(catalog.variants("badge"), vec!["default", "accent"]);
        assert!(catalog.variants("missing").is_empty());
    }
}
