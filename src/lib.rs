//! Design Guardian core: the pattern canvas, the gallery scene composer, and
//! the session and backend plumbing behind the studio pages.
//!
//! The crate is host-agnostic. A UI shell feeds pointer events into
//! [`canvas::PatternCanvas`], renders the [`gallery::Scene`] descriptions, and
//! displays the [`studio::Toasts`] the flows queue up.

pub mod backend;
pub mod canvas;
pub mod config;
pub mod design;
pub mod draw;
pub mod gallery;
pub mod input;
pub mod session;
pub mod studio;
pub mod views;

pub use config::Config;
