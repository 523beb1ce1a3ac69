//! RGBA color type, hex parsing, and the studio palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use design_guardian::draw::Color;
/// let red = Color::from_hex("#ff0000").unwrap();
/// assert_eq!(red, Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Errors produced while parsing a color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("color '{0}' must have 3 or 6 hex digits")]
    BadLength(String),

    #[error("color '{0}' contains a non-hex digit")]
    BadDigit(String),

    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rgb` or `#rrggbb` (case-insensitive) into an opaque color.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(input.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(input.to_string()));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::BadDigit(input.to_string()));

        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, ch) in out.iter_mut().zip(digits.chars()) {
                    let doubled: String = [ch, ch].iter().collect();
                    *slot = channel(&doubled)?;
                }
                Ok(Self::from_rgb8(out[0], out[1], out[2]))
            }
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ColorError::BadLength(input.to_string())),
        }
    }

    /// Parses either a hex string or one of the named colors.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        if input.trim_start().starts_with('#') {
            Self::from_hex(input)
        } else {
            name_to_color(input).ok_or_else(|| ColorError::UnknownName(input.to_string()))
        }
    }

    /// Formats the color as lower-case `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Sets this color as the Cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Maps color name strings to Color values (case-insensitive).
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_ascii_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "indigo" => Some(INDIGO),
        "violet" => Some(VIOLET),
        "pink" => Some(PINK),
        "orange" => Some(ORANGE),
        "yellow" => Some(YELLOW),
        "cyan" => Some(CYAN),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// Studio default pen color (#6366f1)
pub const INDIGO: Color = Color::new(99.0 / 255.0, 102.0 / 255.0, 241.0 / 255.0, 1.0);
/// #8b5cf6
pub const VIOLET: Color = Color::new(139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0, 1.0);
/// #ec4899
pub const PINK: Color = Color::new(236.0 / 255.0, 72.0 / 255.0, 153.0 / 255.0, 1.0);
/// #f97316
pub const ORANGE: Color = Color::new(249.0 / 255.0, 115.0 / 255.0, 22.0 / 255.0, 1.0);
/// #eab308
pub const YELLOW: Color = Color::new(234.0 / 255.0, 179.0 / 255.0, 8.0 / 255.0, 1.0);
/// #06b6d4
pub const CYAN: Color = Color::new(6.0 / 255.0, 182.0 / 255.0, 212.0 / 255.0, 1.0);

/// Swatches offered by the studio toolbar, in display order.
pub const PALETTE: [&str; 12] = [
    "#6366f1", "#8b5cf6", "#ec4899", "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4",
    "#3b82f6", "#6366f1", "#000000", "#ffffff",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::from_hex("#00ff00").unwrap(), GREEN);
        assert_eq!(Color::from_hex("#0F0").unwrap(), GREEN);
        assert_eq!(Color::from_hex("#6366f1").unwrap().to_hex(), "#6366f1");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!(Color::from_hex("ff0000"), Err(ColorError::MissingHash(_))));
        assert!(matches!(Color::from_hex("#ff00"), Err(ColorError::BadLength(_))));
        assert!(matches!(Color::from_hex("#gg0000"), Err(ColorError::BadDigit(_))));
    }

    #[test]
    fn palette_entries_all_parse() {
        for swatch in PALETTE {
            let color = Color::from_hex(swatch).expect("palette swatch should parse");
            assert_eq!(color.to_hex(), swatch);
        }
    }

    #[test]
    fn parse_accepts_names() {
        assert_eq!("Indigo".parse::<Color>().unwrap().to_hex(), "#6366f1");
        assert!(matches!(Color::parse("mauve"), Err(ColorError::UnknownName(_))));
    }
}
