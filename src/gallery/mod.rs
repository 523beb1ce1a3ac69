//! Gallery scene composer.
//!
//! Produces a renderer-agnostic description of the 3D exhibition room: islands
//! on a fixed grid, walls, ceiling light strips, lights, the camera, and one
//! slowly rotating garment per published design. Rendering is left to the host.

pub mod layout;
pub mod motion;
mod scene;

pub use layout::{island_positions, placement_for, room};
pub use motion::{Camera, CameraControls, Motion};
pub use scene::{
    AssetLoader, FsAssetLoader, GalleryRecord, GarmentNode, GarmentPose, LoadedModel, ModelRef,
    ModelSource, Scene, SceneSettings, compose_scene,
};
