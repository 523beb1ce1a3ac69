//! Configuration file support for design-guardian.
//!
//! Settings are loaded from `~/.config/design-guardian/config.toml`, then
//! environment overrides for the backend endpoint and identifier are applied.
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::{ColorSpec, NetworkKind};
pub use types::{
    BackendConfig, CanvasConfig, ExportConfig, GalleryConfig, ImportConfig, OverlayConfig,
};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`BackendConfig::endpoint`].
pub const ENV_BACKEND_URL: &str = "DESIGN_GUARDIAN_BACKEND_URL";
/// Environment variable overriding [`BackendConfig::canister_id`].
pub const ENV_CANISTER_ID: &str = "DESIGN_GUARDIAN_CANISTER_ID";
/// Environment variable selecting the identity provider network (`local` or anything else).
pub const ENV_NETWORK: &str = "DESIGN_GUARDIAN_NETWORK";

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// default_color = "#6366f1"
/// default_brush_size = 5
///
/// [overlays]
/// show_grid = true
/// show_ruler = false
///
/// [backend]
/// endpoint = "http://localhost:4943"
/// canister_id = "bkyz2-fmaaa-aaaaa-qaaaq-cai"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Drawing surface size and initial style
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Grid and ruler overlays
    #[serde(default)]
    pub overlays: OverlayConfig,

    /// Remote backend connection
    #[serde(default)]
    pub backend: BackendConfig,

    /// Model import limits
    #[serde(default)]
    pub import: ImportConfig,

    /// CLI export destination
    #[serde(default)]
    pub export: ExportConfig,

    /// Gallery scene tuning
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    /// - `canvas.default_brush_size`: 1 - 20
    /// - `canvas.stamp_size`: 1.0 - 500.0
    /// - `overlays.grid_spacing` / `overlays.ruler_tick_spacing`: 2.0 - 1000.0
    /// - `overlays.ruler_thickness`: 5.0 - 100.0
    /// - `backend.timeout_secs`: 1 - 300
    /// - `import.max_asset_bytes`: at least 1
    pub fn validate_and_clamp(&mut self) {
        if !(1..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }

        if !(1..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }

        if !(1..=20).contains(&self.canvas.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {}, clamping to 1-20 range",
                self.canvas.default_brush_size
            );
            self.canvas.default_brush_size = self.canvas.default_brush_size.clamp(1, 20);
        }

        if !(1.0..=500.0).contains(&self.canvas.stamp_size) {
            log::warn!(
                "Invalid stamp_size {:.1}, clamping to 1.0-500.0 range",
                self.canvas.stamp_size
            );
            self.canvas.stamp_size = clamp_or(self.canvas.stamp_size, 1.0, 500.0, 50.0);
        }

        if !(2.0..=1000.0).contains(&self.overlays.grid_spacing) {
            log::warn!(
                "Invalid grid_spacing {:.1}, clamping to 2.0-1000.0 range",
                self.overlays.grid_spacing
            );
            self.overlays.grid_spacing = clamp_or(self.overlays.grid_spacing, 2.0, 1000.0, 20.0);
        }

        if !(2.0..=1000.0).contains(&self.overlays.ruler_tick_spacing) {
            log::warn!(
                "Invalid ruler_tick_spacing {:.1}, clamping to 2.0-1000.0 range",
                self.overlays.ruler_tick_spacing
            );
            self.overlays.ruler_tick_spacing =
                clamp_or(self.overlays.ruler_tick_spacing, 2.0, 1000.0, 50.0);
        }

        if !(5.0..=100.0).contains(&self.overlays.ruler_thickness) {
            log::warn!(
                "Invalid ruler_thickness {:.1}, clamping to 5.0-100.0 range",
                self.overlays.ruler_thickness
            );
            self.overlays.ruler_thickness =
                clamp_or(self.overlays.ruler_thickness, 5.0, 100.0, 20.0);
        }

        if !(1..=300).contains(&self.backend.timeout_secs) {
            log::warn!(
                "Invalid backend timeout_secs {}, clamping to 1-300 range",
                self.backend.timeout_secs
            );
            self.backend.timeout_secs = self.backend.timeout_secs.clamp(1, 300);
        }

        if self.import.max_asset_bytes == 0 {
            log::warn!("import.max_asset_bytes cannot be 0, falling back to 1 MiB");
            self.import.max_asset_bytes = 1024 * 1024;
        }

        if !self.gallery.rotation_rate.is_finite() {
            log::warn!("gallery.rotation_rate must be finite, falling back to 0.3");
            self.gallery.rotation_rate = 0.3;
        }
    }

    /// Applies backend overrides from the environment.
    ///
    /// `lookup` abstracts `std::env::var` so tests can supply their own values.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty()) {
            debug!("Backend endpoint overridden by {}", ENV_BACKEND_URL);
            self.backend.endpoint = url.trim().to_string();
        }
        if let Some(id) = lookup(ENV_CANISTER_ID).filter(|v| !v.trim().is_empty()) {
            debug!("Backend identifier overridden by {}", ENV_CANISTER_ID);
            self.backend.canister_id = id.trim().to_string();
        }
        if let Some(network) = lookup(ENV_NETWORK) {
            self.backend.network = NetworkKind::from_env_value(&network);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("design-guardian");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// Environment overrides are applied in both cases.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        let mut config = if config_path.exists() {
            Self::read_file(&config_path)?
        } else {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate_and_clamp();
        Ok(config)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses TOML text without touching the filesystem or environment.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text).context("Failed to parse config")?;
        config.validate_and_clamp();
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    /// Serializes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Expands a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
