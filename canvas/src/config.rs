//! Colors, palettes, and per-tool stroke styling.
//!
//! A `SurfaceConfig` is the single source of styling for the engine. It can be
//! built from one of the two [`Theme`] presets or loaded from JSON, where any
//! missing field falls back to its default:
//!
//! ```json
//! { "palette": { "foreground": "#000000", "background": "#ffffff" }, "eraser_width": 30 }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{ERASER_WIDTH_PX, PENCIL_WIDTH_PX};
use crate::error::ConfigError;
use crate::input::Tool;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, or one of the named colors
    /// `black`, `white`, `transparent`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] for anything else.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let s = input.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        let invalid = || ConfigError::InvalidColor(input.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
        let short = |i: usize| channel(i..i + 1).map(|v| v * 17);

        match hex.len() {
            3 => Ok(Self::rgb(short(0)?, short(1)?, short(2)?)),
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?)),
            _ => Err(invalid()),
        }
    }

    /// CSS representation suitable for `strokeStyle` / `fillStyle`.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, f64::from(self.a) / 255.0)
        }
    }

    /// Hex form accepted back by [`Color::parse`]: `#rrggbb`, or `#rrggbbaa`
    /// when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    #[must_use]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Foreground (ink) and background (paper) colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
}

impl Palette {
    /// White ink on black paper.
    #[must_use]
    pub fn dark() -> Self {
        Self { foreground: Color::WHITE, background: Color::BLACK }
    }

    /// Black ink on white paper.
    #[must_use]
    pub fn light() -> Self {
        Self { foreground: Color::BLACK, background: Color::WHITE }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

/// The two built-in color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette::dark(),
            Self::Light => Palette::light(),
        }
    }
}

/// Everything a backend needs to stroke one segment. Segments always have
/// round caps and round joins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    #[must_use]
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Engine styling and resize behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub palette: Palette,
    /// Pencil stroke width in pixels.
    pub pencil_width: f64,
    /// Eraser stroke width in pixels.
    pub eraser_width: f64,
    /// Fill area exposed by growing the surface with the background color.
    /// When `false` that area is left as the backend leaves it (transparent).
    pub fill_exposed: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            pencil_width: PENCIL_WIDTH_PX,
            eraser_width: ERASER_WIDTH_PX,
            fill_exposed: true,
        }
    }
}

impl SurfaceConfig {
    /// Defaults with the palette of `theme`.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { palette: theme.palette(), ..Self::default() }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or colors and
    /// [`ConfigError::InvalidWidth`] for non-positive or non-finite widths.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::default().merge_json(json)
    }

    /// Overlay a JSON config onto `self` and validate the result.
    ///
    /// Objects merge field by field, so `{"palette":{"foreground":"#f00"}}`
    /// keeps this config's background.
    ///
    /// # Errors
    ///
    /// Same as [`SurfaceConfig::from_json`].
    pub fn merge_json(&self, json: &str) -> Result<Self, ConfigError> {
        let mut merged = serde_json::to_value(self)?;
        overlay(&mut merged, serde_json::from_str(json)?);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both tool widths are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] naming the offending tool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tool in [Tool::Pencil, Tool::Eraser] {
            let width = self.width_for(tool);
            if !width.is_finite() || width <= 0.0 {
                return Err(ConfigError::InvalidWidth { tool, width });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn width_for(&self, tool: Tool) -> f64 {
        match tool {
            Tool::Pencil => self.pencil_width,
            Tool::Eraser => self.eraser_width,
        }
    }

    /// The style new segments are drawn with while `tool` is active.
    ///
    /// The eraser paints with the background color rather than clearing pixels.
    #[must_use]
    pub fn style_for(&self, tool: Tool) -> StrokeStyle {
        let color = match tool {
            Tool::Pencil => self.palette.foreground,
            Tool::Eraser => self.palette.background,
        };
        StrokeStyle::new(color, self.width_for(tool))
    }
}

fn overlay(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                overlay(base.entry(key).or_insert(serde_json::Value::Null), value);
            }
        }
        (slot, value) => *slot = value,
    }
}
