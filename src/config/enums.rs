//! Configuration enum types.

use crate::draw::{Color, color::INDIGO};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "indigo"
///
/// # Hex string
/// default_color = "#ec4899"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color or `#rrggbb` / `#rgb` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown names and malformed hex fall back to the studio indigo with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::parse(name).unwrap_or_else(|err| {
                warn!("Invalid color '{}' ({}), using #6366f1", name, err);
                INDIGO
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

/// Which identity provider the login flow should target.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkKind {
    /// Local development replica
    Local,
    /// Public network (default)
    #[default]
    Mainnet,
}

impl NetworkKind {
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("local") {
            NetworkKind::Local
        } else {
            NetworkKind::Mainnet
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::GREEN;

    #[test]
    fn color_spec_accepts_hex_names_and_rgb() {
        assert_eq!(ColorSpec::Name("#00ff00".into()).to_color(), GREEN);
        assert_eq!(ColorSpec::Name("green".into()).to_color(), GREEN);
        assert_eq!(ColorSpec::Rgb([0, 255, 0]).to_color(), GREEN);
    }

    #[test]
    fn color_spec_falls_back_on_garbage() {
        assert_eq!(ColorSpec::Name("#zzz".into()).to_color(), INDIGO);
    }

    #[test]
    fn network_kind_only_matches_local() {
        assert_eq!(NetworkKind::from_env_value("LOCAL"), NetworkKind::Local);
        assert_eq!(NetworkKind::from_env_value("ic"), NetworkKind::Mainnet);
    }
}
