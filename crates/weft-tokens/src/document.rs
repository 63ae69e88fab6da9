//! Token document model and loading.
//!
//! A [`TokenDocument`] is the hierarchical design-token source: spacing,
//! typography, colors, borders, shadows, and radii, each section optional.
//! Scale-based sections (spacing, text sizes, heading sizes) carry an
//! optional `baseSize`/`scale` pair plus a `sizes` map of named overrides;
//! flat sections carry concrete values.
//!
//! Documents load from JSON or YAML. A document that fails to parse is
//! fatal ([`TokenError::Parse`]); entries inside a valid document that are
//! missing or partial are simply "not configured" and skipped downstream.
//!
//! ```json
//! {
//!   "spacing": { "baseSize": 16, "scale": 1.5, "sizes": { "lg": { "enabled": true, "value": 28 } } },
//!   "typography": { "text": { "baseSize": 16, "scale": 1.25 }, "headings": { "scale": 1.3 } },
//!   "color": { "sections": [
//!     { "name": "brand", "colors": { "accent": { "color": "#6644cc" } } },
//!     { "name": "dusk", "colorway": true, "colors": { "accent": { "color": "#aa3311" } } }
//!   ] },
//!   "borders": { "sizes": { "thin": { "enabled": true, "value": 1 } } },
//!   "shadows": { "card": { "x": 0, "y": 2, "blur": 4, "spread": 0, "opacity": 0.1 } },
//!   "radius": { "sizes": { "md": { "enabled": true, "value": 8 } } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::TokenError;

/// A hierarchical design-token document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenDocument {
    pub spacing: Option<ScaleSection>,
    pub typography: Option<Typography>,
    pub color: Option<ColorConfig>,
    pub borders: Option<SizedSection>,
    pub shadows: BTreeMap<String, ShadowEntry>,
    pub radius: Option<SizedSection>,
}

impl TokenDocument {
    /// Parses a document from JSON text.
    pub fn from_json(content: &str) -> Result<Self, TokenError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses a document from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, TokenError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Loads a document from a file, dispatching on extension.
    ///
    /// `.yaml`/`.yml` parse as YAML; everything else parses as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TokenError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }
}

/// Typography splits into body text and heading scales.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub text: Option<ScaleSection>,
    pub headings: Option<ScaleSection>,
}

/// A scale-based section: geometric progression plus named overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleSection {
    /// Base value at position 0. Falls back to the category default.
    pub base_size: Option<f64>,
    /// Multiplier per position step. Falls back to the category default.
    pub scale: Option<f64>,
    /// Named per-size overrides, keyed by position name.
    pub sizes: BTreeMap<String, SizeOverride>,
}

/// One explicit per-size override.
///
/// For scale positions the override applies only with `enabled: true` and
/// a present value, in which case the value is used verbatim and the scale
/// formula is skipped entirely. For flat sized sections (borders, radius)
/// an entry is emitted when it has a value and is not explicitly disabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SizeOverride {
    pub enabled: Option<bool>,
    pub value: Option<f64>,
}

impl SizeOverride {
    /// The override value, when it applies to a scale position.
    pub fn scale_override(&self) -> Option<f64> {
        if self.enabled == Some(true) {
            self.value
        } else {
            None
        }
    }

    /// The concrete value of a flat sized entry, when configured.
    pub fn flat_value(&self) -> Option<f64> {
        if self.enabled == Some(false) {
            None
        } else {
            self.value
        }
    }
}

/// The color part of a token document: an ordered list of named sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub sections: Vec<ColorSection>,
}

/// One color section.
///
/// A section flagged `colorway: true` is a named palette override emitted
/// as a scoped block instead of contributing to the `:root` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorSection {
    pub name: Option<String>,
    pub colorway: bool,
    pub colors: BTreeMap<String, ColorEntry>,
}

/// One color entry; emitted only when `color` carries a concrete value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorEntry {
    pub color: Option<String>,
}

/// A flat sized section (borders, radius): just named entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SizedSection {
    pub sizes: BTreeMap<String, SizeOverride>,
}

/// One shadow definition; emitted only when the full quadruple-plus-opacity
/// is present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShadowEntry {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub blur: Option<f64>,
    pub spread: Option<f64>,
    pub opacity: Option<f64>,
}
