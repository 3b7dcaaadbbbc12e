//! Annotation types - a single positioned, styled text item on the canvas

use std::fmt;
use std::str::FromStr;

use crate::error::PlacardError;

/// Unique identifier for an annotation
///
/// Allocated by [`super::CanvasModel`] from a session-scoped monotonic
/// counter, so ids stay unique even when undo removes annotations from the
/// live collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnotationId(pub u64);

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, PlacardError> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || PlacardError::InvalidColor(s.to_string());
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        match hex.len() {
            6 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    /// Formats as "#RRGGBB", with an alpha suffix only when not opaque
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = PlacardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

/// The closed set of font families an annotation can use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Arial,
    CourierNew,
    Georgia,
    TimesNewRoman,
    Verdana,
}

impl FontFamily {
    /// All supported families, in display order
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Arial,
        FontFamily::CourierNew,
        FontFamily::Georgia,
        FontFamily::TimesNewRoman,
        FontFamily::Verdana,
    ];

    /// The CSS-style family name
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Verdana => "Verdana",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontFamily {
    type Err = PlacardError;

    /// Case-insensitive; tolerates missing spaces ("timesnewroman")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "arial" => Ok(FontFamily::Arial),
            "couriernew" | "courier" => Ok(FontFamily::CourierNew),
            "georgia" => Ok(FontFamily::Georgia),
            "timesnewroman" | "times" => Ok(FontFamily::TimesNewRoman),
            "verdana" => Ok(FontFamily::Verdana),
            _ => Err(PlacardError::UnknownFontFamily(s.to_string())),
        }
    }
}

/// A single placed text item
///
/// `id` is immutable for the annotation's lifetime. `x`/`y` change only
/// through drag messages; the remaining fields change only through tracked
/// edits.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub id: AnnotationId,
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub color: Color,
    pub font_family: FontFamily,
}

/// Partial update applied to the selected annotation
///
/// Position is deliberately absent: `x`/`y` move only via untracked drag,
/// never through the tracked edit path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    pub content: Option<String>,
    pub font_size: Option<f32>,
    pub color: Option<Color>,
    pub font_family: Option<FontFamily>,
}

impl StylePatch {
    /// Patch that replaces the text content
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Patch that replaces the font size
    pub fn font_size(size: f32) -> Self {
        Self {
            font_size: Some(size),
            ..Self::default()
        }
    }

    /// Patch that replaces the color
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Patch that replaces the font family
    pub fn font_family(family: FontFamily) -> Self {
        Self {
            font_family: Some(family),
            ..Self::default()
        }
    }

    /// True if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.font_size.is_none()
            && self.color.is_none()
            && self.font_family.is_none()
    }

    /// Reject patches that would leave an annotation in an invalid state
    ///
    /// Must be called before any state mutation so a failed edit records no
    /// history checkpoint.
    pub fn validate(&self) -> Result<(), PlacardError> {
        if let Some(ref content) = self.content {
            if content.trim().is_empty() {
                return Err(PlacardError::EmptyContent);
            }
        }
        if let Some(size) = self.font_size {
            validate_font_size(size)?;
        }
        Ok(())
    }
}

/// Font sizes must be finite and strictly positive
pub fn validate_font_size(size: f32) -> Result<(), PlacardError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(PlacardError::InvalidFontSize(size));
    }
    Ok(())
}
