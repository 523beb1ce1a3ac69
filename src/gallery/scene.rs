use super::layout::{self, Room, Vec3};
use super::motion::{Camera, CameraControls, DEFAULT_ROTATION_RATE, Motion};
use crate::backend::{DesignId, DesignPreview};
use crate::config::{Config, expand_tilde};
use crate::design::asset::{self, AssetError, DEFAULT_MAX_ASSET_BYTES};
use crate::design::FileAsset;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where a garment's model comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelRef {
    /// File on disk, relative paths resolved against the model root
    Path(PathBuf),
    /// Model bytes attached to a design record
    Embedded(FileAsset),
}

/// One entry to place in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRecord {
    pub id: Option<DesignId>,
    pub name: String,
    pub model: Option<ModelRef>,
}

impl From<&DesignPreview> for GalleryRecord {
    fn from(preview: &DesignPreview) -> Self {
        Self {
            id: Some(preview.id),
            name: preview.name.clone(),
            model: preview.model_file().cloned().map(ModelRef::Embedded),
        }
    }
}

/// A model that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedModel {
    pub name: String,
    pub bytes: usize,
    pub version: u32,
}

/// Resolves and validates garment models.
pub trait AssetLoader: Send + Sync {
    fn load(&self, model: &ModelRef) -> Result<LoadedModel, AssetError>;
}

/// Loads models from disk or from embedded bytes, checking the GLB header.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
    max_bytes: u64,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            expand_tilde(&config.gallery.model_root),
            config.import.max_asset_bytes,
        )
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for FsAssetLoader {
    fn default() -> Self {
        Self::new(".", DEFAULT_MAX_ASSET_BYTES)
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, model: &ModelRef) -> Result<LoadedModel, AssetError> {
        let asset = match model {
            ModelRef::Path(path) => asset::load_model_file(&self.resolve(path), self.max_bytes)?,
            ModelRef::Embedded(file) => {
                asset::validate_model(&file.name, file.data.clone(), self.max_bytes)?
            }
        };
        Ok(LoadedModel {
            name: asset.file.name.clone(),
            bytes: asset.size(),
            version: asset.version,
        })
    }
}

/// What a garment node displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSource {
    Model(LoadedModel),
    /// Stand-in shown when the record has no usable model
    Placeholder { reason: String },
}

impl ModelSource {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ModelSource::Placeholder { .. })
    }
}

/// A rotating garment on an island.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GarmentNode {
    pub record_id: Option<DesignId>,
    pub name: String,
    pub position: Vec3,
    pub motion: Motion,
    pub source: ModelSource,
}

/// Garment pose at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GarmentPose {
    pub name: String,
    pub position: Vec3,
    pub rotation_y: f64,
}

/// Scene composition knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub rotation_rate: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            rotation_rate: DEFAULT_ROTATION_RATE,
        }
    }
}

impl SceneSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            rotation_rate: config.gallery.rotation_rate,
        }
    }
}

/// The composed gallery: static room, camera, and garments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub camera: Camera,
    pub controls: CameraControls,
    pub room: Room,
    pub garments: Vec<GarmentNode>,
}

impl Scene {
    /// Every garment's rotation after `seconds`.
    pub fn at(&self, seconds: f64) -> Vec<GarmentPose> {
        self.garments
            .iter()
            .map(|garment| GarmentPose {
                name: garment.name.clone(),
                position: garment.position,
                rotation_y: garment.motion.rotation(seconds),
            })
            .collect()
    }

    pub fn placeholder_count(&self) -> usize {
        self.garments
            .iter()
            .filter(|garment| garment.source.is_placeholder())
            .count()
    }
}

/// Places `records` on the islands in order.
///
/// A record whose model is missing or invalid gets a placeholder node and a
/// logged warning; composition itself never fails.
pub fn compose_scene(records: &[GalleryRecord], loader: &dyn AssetLoader, settings: &SceneSettings) -> Scene {
    let garments = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let source = match &record.model {
                Some(model) => match loader.load(model) {
                    Ok(loaded) => ModelSource::Model(loaded),
                    Err(err) => {
                        log::warn!("Failed to load model for '{}': {}", record.name, err);
                        ModelSource::Placeholder {
                            reason: err.to_string(),
                        }
                    }
                },
                None => {
                    log::debug!("Design '{}' has no 3D model, using placeholder", record.name);
                    ModelSource::Placeholder {
                        reason: "no model attached".to_string(),
                    }
                }
            };

            GarmentNode {
                record_id: record.id,
                name: record.name.clone(),
                position: layout::placement_for(index),
                motion: Motion {
                    initial: 0.0,
                    rate: settings.rotation_rate,
                },
                source,
            }
        })
        .collect();

    Scene {
        camera: Camera::default(),
        controls: CameraControls::default(),
        room: layout::room(),
        garments,
    }
}
