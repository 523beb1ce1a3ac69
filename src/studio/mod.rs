//! Design studio: the canvas page, its save dialog, and model import.

mod designer;
mod import;
mod toast;

pub use designer::DesignStudio;
pub use import::ImportDialog;
pub use toast::{MAX_TOASTS, Toast, ToastLevel, Toasts};

use crate::backend::BackendError;
use crate::canvas::CanvasError;
use crate::design::{AssetError, ValidationError};
use thiserror::Error;

/// Generic notice shown whenever a save reaches the backend and fails.
pub const SAVE_FAILED: &str = "Failed to save pattern";

/// Why a studio action did not complete. A matching toast has already been
/// queued by the time this is returned.
#[derive(Debug, Error)]
pub enum StudioError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
