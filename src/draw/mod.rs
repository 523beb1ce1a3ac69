//! Rendering primitives for the pattern canvas (Cairo-based).
//!
//! - [`Color`]: RGBA color with hex parsing and the studio palette
//! - [`overlay`]: grid and ruler reference overlays
//! - [`RasterSnapshot`]: pixel read-back for export checks and tests

pub mod color;
pub mod overlay;
pub mod raster;

pub use color::{Color, ColorError, PALETTE};
pub use overlay::{Overlay, OverlayState, OverlayStyle, render_grid, render_ruler};
pub use raster::{RasterSnapshot, Rgba};
