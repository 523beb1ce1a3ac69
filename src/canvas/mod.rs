//! Pattern canvas engine.
//!
//! Translates pointer input into persistent raster mutations under the current
//! tool and style, and exports the result as PNG on demand. The canvas is
//! single-threaded: the host serializes input events and calls into it from its
//! UI thread.

mod engine;
pub mod export;
pub mod script;
mod stroke;
#[cfg(test)]
mod tests;

pub use engine::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, PatternCanvas};
pub use export::{decode_data_uri, encode_data_uri, save_png, write_png};
pub use script::{CanvasCommand, parse_script, replay};
pub use stroke::DrawingState;

use crate::config::Config;
use crate::draw::{Color, ColorError, OverlayState, OverlayStyle, color};
use thiserror::Error;

/// Errors raised by the canvas and its export path.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("canvas surface was never initialized")]
    Uninitialized,

    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("malformed data URI: {0}")]
    DataUri(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything needed to mount a [`PatternCanvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub color: Color,
    pub brush_size: u32,
    pub stamp_size: f64,
    pub overlays: OverlayState,
    pub overlay_style: OverlayStyle,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: color::WHITE,
            color: color::INDIGO,
            brush_size: 5,
            stamp_size: 50.0,
            overlays: OverlayState {
                grid: true,
                ruler: true,
            },
            overlay_style: OverlayStyle::default(),
        }
    }
}

impl CanvasSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.canvas.width,
            height: config.canvas.height,
            background: config.canvas.background.to_color(),
            color: config.canvas.default_color.to_color(),
            brush_size: config.canvas.default_brush_size,
            stamp_size: config.canvas.stamp_size,
            overlays: OverlayState {
                grid: config.overlays.show_grid,
                ruler: config.overlays.show_ruler,
            },
            overlay_style: OverlayStyle {
                grid_spacing: config.overlays.grid_spacing,
                ruler_thickness: config.overlays.ruler_thickness,
                ruler_tick_spacing: config.overlays.ruler_tick_spacing,
            },
        }
    }

    /// Same settings with both overlays hidden.
    pub fn without_overlays(mut self) -> Self {
        self.overlays = OverlayState {
            grid: false,
            ruler: false,
        };
        self
    }
}
