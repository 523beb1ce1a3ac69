//! Replayable canvas command scripts.
//!
//! A script is a JSON array of commands, e.g.
//!
//! ```json
//! [
//!   { "op": "select_tool", "tool": "brush" },
//!   { "op": "set_color", "color": "#ff0000" },
//!   { "op": "begin", "x": 10, "y": 10 },
//!   { "op": "move", "x": 50, "y": 10 },
//!   { "op": "end", "x": 50, "y": 10 }
//! ]
//! ```

use super::{CanvasError, PatternCanvas};
use crate::draw::{Color, Overlay};
use crate::input::{Point, Tool};
use serde::{Deserialize, Serialize};

/// One canvas operation in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CanvasCommand {
    SelectTool { tool: Tool },
    SetColor { color: String },
    SetBrushSize { size: u32 },
    SetOverlay { overlay: Overlay, visible: bool },
    Begin { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    End { x: f64, y: f64 },
    Leave,
    Clear,
}

impl CanvasCommand {
    /// Applies this command to `canvas`.
    ///
    /// Only `set_color` can fail (unparseable color).
    pub fn apply(&self, canvas: &mut PatternCanvas) -> Result<(), CanvasError> {
        match self {
            CanvasCommand::SelectTool { tool } => canvas.select_tool(*tool),
            CanvasCommand::SetColor { color } => canvas.set_color(Color::parse(color)?),
            CanvasCommand::SetBrushSize { size } => {
                canvas.set_brush_size(*size);
            }
            CanvasCommand::SetOverlay { overlay, visible } => canvas.set_overlay(*overlay, *visible),
            CanvasCommand::Begin { x, y } => canvas.begin_stroke(Point::new(*x, *y)),
            CanvasCommand::Move { x, y } => canvas.continue_stroke(Point::new(*x, *y)),
            CanvasCommand::End { x, y } => canvas.end_stroke(Point::new(*x, *y)),
            CanvasCommand::Leave => canvas.leave(),
            CanvasCommand::Clear => canvas.clear(),
        }
        Ok(())
    }
}

/// Applies `commands` in order, stopping at the first failure.
pub fn replay(canvas: &mut PatternCanvas, commands: &[CanvasCommand]) -> Result<(), CanvasError> {
    for (index, command) in commands.iter().enumerate() {
        command.apply(canvas).inspect_err(|err| {
            log::warn!("Canvas script stopped at command {}: {}", index, err);
        })?;
    }
    Ok(())
}

/// Parses a JSON script.
pub fn parse_script(json: &str) -> Result<Vec<CanvasCommand>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasSettings;

    #[test]
    fn parses_tagged_commands() {
        let commands = parse_script(
            r##"[
                {"op": "select_tool", "tool": "circle"},
                {"op": "set_overlay", "overlay": "grid", "visible": false},
                {"op": "end", "x": 20, "y": 30.5},
                {"op": "leave"}
            ]"##,
        )
        .unwrap();

        assert_eq!(commands[0], CanvasCommand::SelectTool { tool: Tool::Circle });
        assert_eq!(
            commands[1],
            CanvasCommand::SetOverlay {
                overlay: Overlay::Grid,
                visible: false
            }
        );
        assert_eq!(commands[2], CanvasCommand::End { x: 20.0, y: 30.5 });
        assert_eq!(commands[3], CanvasCommand::Leave);
    }

    #[test]
    fn replay_stops_on_bad_color() {
        let mut canvas = PatternCanvas::new(CanvasSettings::default()).unwrap();
        let commands = vec![
            CanvasCommand::SetBrushSize { size: 9 },
            CanvasCommand::SetColor {
                color: "not-a-color".to_string(),
            },
            CanvasCommand::SetBrushSize { size: 3 },
        ];
        assert!(matches!(
            replay(&mut canvas, &commands),
            Err(CanvasError::Color(_))
        ));
        assert_eq!(canvas.brush_size(), 9);
    }
}
