//! Configuration type definitions.

use super::enums::{ColorSpec, NetworkKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing surface settings.
///
/// Controls the canvas the studio mounts and the style it starts with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background painted beneath overlays and content
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Initial brush color
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial brush size (valid range: 1 - 20)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,

    /// Edge length / diameter of stamped shapes in pixels
    #[serde(default = "default_stamp_size")]
    pub stamp_size: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            default_color: default_color(),
            default_brush_size: default_brush_size(),
            stamp_size: default_stamp_size(),
        }
    }
}

/// Grid and ruler settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OverlayConfig {
    /// Show the grid when the canvas opens
    #[serde(default = "default_true")]
    pub show_grid: bool,

    /// Show the rulers when the canvas opens
    #[serde(default = "default_true")]
    pub show_ruler: bool,

    /// Grid spacing in pixels
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f64,

    /// Ruler band thickness in pixels
    #[serde(default = "default_ruler_thickness")]
    pub ruler_thickness: f64,

    /// Distance between labelled ruler ticks
    #[serde(default = "default_ruler_tick_spacing")]
    pub ruler_tick_spacing: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_ruler: true,
            grid_spacing: default_grid_spacing(),
            ruler_thickness: default_ruler_thickness(),
            ruler_tick_spacing: default_ruler_tick_spacing(),
        }
    }
}

/// Remote backend settings.
///
/// `endpoint` and `canister_id` are usually supplied through the
/// `DESIGN_GUARDIAN_BACKEND_URL` / `DESIGN_GUARDIAN_CANISTER_ID` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BackendConfig {
    /// Base URL of the backend gateway
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Identifier of the backend service behind the gateway
    #[serde(default)]
    pub canister_id: String,

    /// Which identity provider to authenticate against
    #[serde(default)]
    pub network: NetworkKind,

    /// Per-call timeout in seconds (valid range: 1 - 300)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            canister_id: String::new(),
            network: NetworkKind::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// 3D model import limits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ImportConfig {
    /// Largest accepted `.glb` upload in bytes
    #[serde(default = "default_max_asset_bytes")]
    pub max_asset_bytes: u64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_asset_bytes: default_max_asset_bytes(),
        }
    }
}

/// Where exported patterns are written by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Output directory (supports ~ expansion)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template with chrono format specifiers
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

/// Gallery scene settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GalleryConfig {
    /// Garment turntable speed in radians per second
    #[serde(default = "default_rotation_rate")]
    pub rotation_rate: f64,

    /// Directory that model references are resolved against
    #[serde(default = "default_model_root")]
    pub model_root: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            rotation_rate: default_rotation_rate(),
            model_root: default_model_root(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("#ffffff".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#6366f1".to_string())
}

fn default_brush_size() -> u32 {
    5
}

fn default_stamp_size() -> f64 {
    50.0
}

fn default_grid_spacing() -> f64 {
    20.0
}

fn default_ruler_thickness() -> f64 {
    20.0
}

fn default_ruler_tick_spacing() -> f64 {
    50.0
}

fn default_endpoint() -> String {
    "http://localhost:4943".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_asset_bytes() -> u64 {
    1024 * 1024
}

fn default_export_directory() -> String {
    "~/Pictures/DesignGuardian".to_string()
}

fn default_filename_template() -> String {
    "pattern_%Y-%m-%d_%H%M%S".to_string()
}

fn default_rotation_rate() -> f64 {
    // 0.005 rad per frame at 60 fps
    0.3
}

fn default_model_root() -> String {
    ".".to_string()
}
