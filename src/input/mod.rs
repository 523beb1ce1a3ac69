//! Input types and the tool state selection.
//!
//! Hosts translate their native pointer callbacks into [`PointerEvent`]s and
//! feed them to the canvas; the active [`Tool`] decides what each event means.

pub mod events;
pub mod tool;

pub use crate::draw::Overlay;
pub use events::{Point, PointerEvent};
pub use tool::Tool;
