use super::{SAVE_FAILED, StudioError, Toasts};
use crate::backend::{BackendClient, DesignId};
use crate::canvas::{CanvasError, CanvasSettings, PatternCanvas, decode_data_uri};
use crate::design::{DesignForm, FileAsset, NewDesign};

/// The design studio page: a mounted canvas plus the save dialog flow.
#[derive(Debug, Default)]
pub struct DesignStudio {
    canvas: Option<PatternCanvas>,
}

impl DesignStudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the drawing surface. Remounting discards the previous canvas.
    pub fn mount(&mut self, settings: CanvasSettings) -> Result<&mut PatternCanvas, CanvasError> {
        let canvas = PatternCanvas::new(settings)?;
        Ok(self.canvas.insert(canvas))
    }

    pub fn unmount(&mut self) {
        self.canvas = None;
    }

    pub fn canvas(&self) -> Option<&PatternCanvas> {
        self.canvas.as_ref()
    }

    pub fn canvas_mut(&mut self) -> Option<&mut PatternCanvas> {
        self.canvas.as_mut()
    }

    /// Exports the canvas as a PNG data URI.
    pub fn export_image(&self) -> Result<String, CanvasError> {
        self.canvas
            .as_ref()
            .ok_or(CanvasError::Uninitialized)?
            .export_data_uri()
    }

    /// Validates `form`, exports the canvas, and creates the design with the
    /// PNG as both source file and cover image.
    ///
    /// Validation failures are reported without calling the backend. The form
    /// is reset only after a successful save.
    pub async fn save_pattern(
        &self,
        client: &BackendClient,
        form: &mut DesignForm,
        toasts: &mut Toasts,
    ) -> Result<DesignId, StudioError> {
        let valid = form.validate().inspect_err(|err| toasts.error(err.to_string()))?;

        let image = match self.export_cover(&valid.name) {
            Ok(image) => image,
            Err(err) => {
                log::error!("Failed to export pattern: {}", err);
                toasts.error(SAVE_FAILED);
                return Err(err.into());
            }
        };

        let design = NewDesign::from_form(valid, vec![image.clone()], image);
        match client.create_design(design).await {
            Ok(id) => {
                toasts.success(format!("Pattern saved successfully! {}", id));
                form.reset();
                Ok(id)
            }
            Err(err) => {
                log::error!("Failed to save pattern: {}", err);
                toasts.error(SAVE_FAILED);
                Err(err.into())
            }
        }
    }

    fn export_cover(&self, name: &str) -> Result<FileAsset, CanvasError> {
        let uri = self.export_image()?;
        let (mime_type, data) = decode_data_uri(&uri)?;
        Ok(FileAsset {
            name: format!("{}.png", name),
            mime_type,
            data,
        })
    }
}
