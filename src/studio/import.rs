use super::{SAVE_FAILED, StudioError, Toasts};
use crate::backend::{BackendClient, DesignId};
use crate::design::asset::{self, DEFAULT_MAX_ASSET_BYTES, ModelAsset};
use crate::design::{DesignForm, FileAsset, NewDesign, ValidationError};
use std::path::Path;

/// The import dialog: a selected GLB model plus the design form.
#[derive(Debug)]
pub struct ImportDialog {
    pub form: DesignForm,
    file: Option<ModelAsset>,
    max_bytes: u64,
}

impl Default for ImportDialog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ASSET_BYTES)
    }
}

impl ImportDialog {
    pub fn new(max_bytes: u64) -> Self {
        Self {
            form: DesignForm::default(),
            file: None,
            max_bytes,
        }
    }

    pub fn selected_file(&self) -> Option<&ModelAsset> {
        self.file.as_ref()
    }

    /// Validates and keeps a picked file. A rejected file clears the selection.
    pub fn select_file(
        &mut self,
        name: &str,
        bytes: Vec<u8>,
        toasts: &mut Toasts,
    ) -> Result<&ModelAsset, StudioError> {
        self.file = None;
        match asset::validate_model(name, bytes, self.max_bytes) {
            Ok(model) => Ok(self.file.insert(model)),
            Err(err) => {
                toasts.error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Reads and selects a model from disk.
    pub fn select_path(&mut self, path: &Path, toasts: &mut Toasts) -> Result<&ModelAsset, StudioError> {
        self.file = None;
        match asset::load_model_file(path, self.max_bytes) {
            Ok(model) => Ok(self.file.insert(model)),
            Err(err) => {
                toasts.error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Sends the selected model as the design's single source file, with an
    /// empty cover image. Resets the dialog on success.
    pub async fn submit(&mut self, client: &BackendClient, toasts: &mut Toasts) -> Result<DesignId, StudioError> {
        let valid = self
            .form
            .validate()
            .inspect_err(|err| toasts.error(err.to_string()))?;
        let Some(model) = self.file.as_ref() else {
            let err = ValidationError::MissingFile;
            toasts.error(err.to_string());
            return Err(err.into());
        };

        let design = NewDesign::from_form(valid, vec![model.file.clone()], FileAsset::empty());
        match client.create_design(design).await {
            Ok(id) => {
                toasts.success(format!("Pattern saved successfully! {}", id));
                self.reset();
                Ok(id)
            }
            Err(err) => {
                log::error!("Failed to import pattern: {}", err);
                toasts.error(SAVE_FAILED);
                Err(err.into())
            }
        }
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.file = None;
    }
}
