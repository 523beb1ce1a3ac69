//! Drawing tool selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines how pointer-down/move/up events are interpreted.
/// Exactly one tool is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand painting with the current color (default)
    #[default]
    Brush,
    /// Freehand erasing at twice the brush width
    Eraser,
    /// Filled square stamped on release
    Square,
    /// Filled circle stamped on release
    Circle,
    /// Filled upward triangle stamped on release
    Triangle,
    /// Straight segment from press point to release point
    Line,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Square,
        Tool::Circle,
        Tool::Triangle,
        Tool::Line,
    ];

    /// Tools that composite incrementally while the pointer moves.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }

    /// Tools that stamp a fixed-size filled shape on release.
    pub fn is_shape(self) -> bool {
        matches!(self, Tool::Square | Tool::Circle | Tool::Triangle)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "brush",
            Tool::Eraser => "eraser",
            Tool::Square => "square",
            Tool::Circle => "circle",
            Tool::Triangle => "triangle",
            Tool::Line => "line",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == lowered)
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tool_name() {
        for tool in Tool::ALL {
            assert_eq!(tool.name().parse::<Tool>().unwrap(), tool);
        }
        assert_eq!(" Circle ".parse::<Tool>().unwrap(), Tool::Circle);
        assert!("lasso".parse::<Tool>().is_err());
    }

    #[test]
    fn classification_is_exclusive() {
        for tool in Tool::ALL {
            assert!(!(tool.is_freehand() && tool.is_shape()));
        }
        assert!(!Tool::Line.is_freehand() && !Tool::Line.is_shape());
    }
}
