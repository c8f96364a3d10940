//! Style descriptors exchanged with the rendering collaborator
//!
//! The core never paints anything. It resolves, for every tile, a `Style`
//! (fill + outline values) and emits `StyleUpdate`s whenever the resolved
//! style of a tile changes.

use std::fmt;
use std::str::FromStr;

use crate::spatial::coordinate::GridCoordinate;

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);

    /// Create a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parses `#RRGGBB` or `#RRGGBBAA`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{s}' must start with '#'"))?;

        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(format!("color '{s}' must have 6 or 8 hex digits"));
        }

        let channel = |index: usize| {
            hex.get(index..index + 2)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| format!("color '{s}' contains invalid hex digits"))
        };

        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// Dash pattern of an outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Continuous line
    Solid,
    /// Dashed line
    Dash,
    /// Dotted line
    Dot,
    /// No outline drawn
    None,
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Solid => "solid",
            Self::Dash => "dash",
            Self::Dot => "dot",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "dash" | "dashed" => Ok(Self::Dash),
            "dot" | "dotted" => Ok(Self::Dot),
            "none" => Ok(Self::None),
            other => Err(format!("unknown line style '{other}'")),
        }
    }
}

/// Outline descriptor: color, width and dash pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    /// Line color
    pub color: Color,
    /// Line width in screen units
    pub width: f64,
    /// Dash pattern
    pub line: LineStyle,
}

impl Outline {
    /// Create an outline
    pub const fn new(color: Color, width: f64, line: LineStyle) -> Self {
        Self { color, width, line }
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.color, self.width, self.line)
    }
}

/// Fully resolved visual style of a tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Interior fill color
    pub fill: Color,
    /// Outline descriptor
    pub outline: Outline,
}

impl Style {
    /// Style of a tile with no overlay or highlight: white fill, thin black outline
    pub const BASE: Self = Self {
        fill: Color::WHITE,
        outline: Outline::new(Color::BLACK, 1.0, LineStyle::Solid),
    };

    /// Return this style with the parts set in `patch` replaced
    #[must_use]
    pub fn patched(self, patch: &StylePatch) -> Self {
        Self {
            fill: patch.fill.unwrap_or(self.fill),
            outline: patch.outline.unwrap_or(self.outline),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::BASE
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fill={} outline={}", self.fill, self.outline)
    }
}

/// Partial style: unset parts leave the underlying style untouched
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StylePatch {
    /// Replacement fill, if any
    pub fill: Option<Color>,
    /// Replacement outline, if any
    pub outline: Option<Outline>,
}

impl StylePatch {
    /// Patch that only replaces the fill
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            outline: None,
        }
    }

    /// Patch that only replaces the outline
    pub const fn outline(outline: Outline) -> Self {
        Self {
            fill: None,
            outline: Some(outline),
        }
    }

    /// Patch that changes nothing
    pub const fn is_empty(&self) -> bool {
        self.fill.is_none() && self.outline.is_none()
    }
}

/// Distinguished visual category given to tiles by the selection state
///
/// Variants are ordered by precedence: when a tile has several roles, the
/// highest one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Highlight {
    /// Tile crossed by the line of sight
    Colliding,
    /// Neighbor of the selected tile
    Adjacent,
    /// Current target
    Target,
    /// Current selection
    Selected,
}

impl Highlight {
    /// Fill-only patch applied on top of the tile's overlay style
    pub const fn patch(self) -> StylePatch {
        match self {
            Self::Selected => StylePatch::fill(Color::rgba(0, 0, 255, 255)),
            Self::Adjacent => StylePatch::fill(Color::rgba(0, 0, 255, 100)),
            Self::Target => StylePatch::fill(Color::rgba(255, 255, 0, 100)),
            Self::Colliding => StylePatch::fill(Color::rgba(50, 50, 50, 100)),
        }
    }
}

/// One output instruction for the renderer: paint `coordinate` with `style`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleUpdate {
    /// Tile to repaint
    pub coordinate: GridCoordinate,
    /// Style to paint it with
    pub style: Style,
}

impl fmt::Display for StyleUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coordinate, self.style)
    }
}
