//! Transient stroke state for the pattern canvas.

use crate::input::{Point, Tool};

/// Current gesture state machine.
///
/// A stroke is created on pointer-down, mutated on pointer-move, and consumed
/// on pointer-up (or on pointer leave).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawingState {
    /// No pointer button held
    #[default]
    Idle,
    /// Pointer-down seen, no matching up/leave yet
    Drawing {
        /// Tool locked in when the stroke began
        tool: Tool,
        /// Most recent pointer position
        current: Point,
        /// Anchor for the line tool's second endpoint
        start: Option<Point>,
        /// Most recent position that fell inside the surface
        last_in_bounds: Point,
    },
}

impl DrawingState {
    /// Starts a stroke at `point` with `tool` locked in.
    pub fn begin(tool: Tool, point: Point, last_in_bounds: Point) -> Self {
        DrawingState::Drawing {
            tool,
            current: point,
            start: (tool == Tool::Line).then_some(point),
            last_in_bounds,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, DrawingState::Drawing { .. })
    }

    /// Tool of the stroke in progress, if any.
    pub fn tool(&self) -> Option<Tool> {
        match self {
            DrawingState::Drawing { tool, .. } => Some(*tool),
            DrawingState::Idle => None,
        }
    }
}

/// Filled shape placed by a shape tool on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampShape {
    Square,
    Circle,
    Triangle,
}

impl StampShape {
    /// The shape `tool` stamps; `None` for freehand and line tools.
    pub fn for_tool(tool: Tool) -> Option<Self> {
        match tool {
            Tool::Square => Some(StampShape::Square),
            Tool::Circle => Some(StampShape::Circle),
            Tool::Triangle => Some(StampShape::Triangle),
            Tool::Brush | Tool::Eraser | Tool::Line => None,
        }
    }
}
