//! Scale definitions: geometric progressions over named positions.
//!
//! Each scale-based category (spacing, text sizes, heading sizes) declares
//! an ordered list of named positions. A position's value is
//! `base_size * scale ^ position`, rounded per the category's rounding
//! rule, unless the token document supplies an explicit override for that
//! position name.
//!
//! The rounding asymmetry is load-bearing: spacing and heading sizes round
//! to the nearest integer pixel while text sizes round to one decimal
//! place. Existing output depends on it for visual parity.

/// A named position on a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalePosition {
    /// Position name, also the override key in the token document.
    pub name: &'static str,
    /// Exponent applied to the scale multiplier.
    pub position: i32,
    /// Optional CSS-facing key when it differs from `name`.
    pub css_key: Option<&'static str>,
}

impl ScalePosition {
    /// The key used when forming the CSS variable name.
    pub fn css_key(&self) -> &'static str {
        self.css_key.unwrap_or(self.name)
    }
}

/// Rounding rule for a scale category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Nearest integer pixel (spacing, heading sizes).
    WholePixel,
    /// Nearest tenth (text sizes).
    Tenth,
}

/// Applies a category's rounding rule to a computed value.
pub fn round_value(value: f64, rounding: Rounding) -> f64 {
    match rounding {
        Rounding::WholePixel => value.round(),
        Rounding::Tenth => (value * 10.0).round() / 10.0,
    }
}

/// A resolved base/multiplier pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleDefinition {
    pub base_size: f64,
    pub scale: f64,
}

impl ScaleDefinition {
    /// The raw (unrounded) value at an exponent position.
    pub fn value_at(&self, position: i32) -> f64 {
        self.base_size * self.scale.powi(position)
    }
}

/// Spacing positions: `md` is the base step.
pub static SPACING_POSITIONS: &[ScalePosition] = &[
    ScalePosition { name: "xs", position: -2, css_key: None },
    ScalePosition { name: "sm", position: -1, css_key: None },
    ScalePosition { name: "md", position: 0, css_key: None },
    ScalePosition { name: "lg", position: 1, css_key: None },
    ScalePosition { name: "xl", position: 2, css_key: None },
    ScalePosition { name: "2xl", position: 3, css_key: None },
    ScalePosition { name: "3xl", position: 4, css_key: None },
];

/// Body text positions: `md` is the base step, emitted as `base`.
pub static TEXT_POSITIONS: &[ScalePosition] = &[
    ScalePosition { name: "xs", position: -2, css_key: None },
    ScalePosition { name: "sm", position: -1, css_key: None },
    ScalePosition { name: "md", position: 0, css_key: Some("base") },
    ScalePosition { name: "lg", position: 1, css_key: None },
    ScalePosition { name: "xl", position: 2, css_key: None },
];

/// Heading positions: `h6` sits on the text base, `h1` four steps up.
pub static HEADING_POSITIONS: &[ScalePosition] = &[
    ScalePosition { name: "h6", position: 0, css_key: None },
    ScalePosition { name: "h5", position: 1, css_key: None },
    ScalePosition { name: "h4", position: 2, css_key: None },
    ScalePosition { name: "h3", position: 3, css_key: None },
    ScalePosition { name: "h2", position: 4, css_key: None },
    ScalePosition { name: "h1", position: 5, css_key: None },
];

/// Default spacing definition when the document omits `baseSize`/`scale`.
pub const SPACING_DEFAULTS: ScaleDefinition = ScaleDefinition {
    base_size: 16.0,
    scale: 1.5,
};

/// Default text-size definition.
pub const TEXT_DEFAULTS: ScaleDefinition = ScaleDefinition {
    base_size: 16.0,
    scale: 1.25,
};

/// Default heading-size definition.
pub const HEADING_DEFAULTS: ScaleDefinition = ScaleDefinition {
    base_size: 16.0,
    scale: 1.25,
};
