//! Design records, dialog forms, and importable model assets.

pub mod asset;
pub mod forms;
mod kind;

pub use asset::{AssetError, ModelAsset, load_model_file, validate_model};
pub use forms::{DesignForm, RegisterForm, ValidDesignForm, ValidationError};
pub use kind::DesignKind;

use serde::{Deserialize, Serialize};

/// A file attached to a design: a source file or a cover image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAsset {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl FileAsset {
    /// The "no cover image" placeholder sent by the import dialog.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Payload for creating a design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDesign {
    pub name: String,
    pub description: String,
    pub kind: DesignKind,
    #[serde(rename = "visible3DRendering")]
    pub visible_3d_rendering: bool,
    pub source_files: Vec<FileAsset>,
    pub cover_image: FileAsset,
}

impl NewDesign {
    /// Builds the payload from validated dialog fields.
    pub fn from_form(form: ValidDesignForm, source_files: Vec<FileAsset>, cover_image: FileAsset) -> Self {
        Self {
            name: form.name,
            description: form.description,
            kind: form.kind,
            visible_3d_rendering: form.visible_3d_rendering,
            source_files,
            cover_image,
        }
    }
}
