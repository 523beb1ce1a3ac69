//! Garment rotation and first-person camera settings.

use serde::Serialize;
use std::f64::consts::PI;

/// Rotation speed matching 0.005 rad per frame at 60 fps.
pub const DEFAULT_ROTATION_RATE: f64 = 0.3;

/// Yaw applied per frame while Q or E is held.
pub const KEY_YAW_PER_FRAME: f64 = 0.03;

/// Continuous rotation about the vertical axis.
///
/// Rotation is a pure function of elapsed time, so frame rate never changes
/// how fast garments turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    /// Rotation at `t = 0`, radians
    pub initial: f64,
    /// Radians per second
    pub rate: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            initial: 0.0,
            rate: DEFAULT_ROTATION_RATE,
        }
    }
}

impl Motion {
    pub fn rotation(&self, seconds: f64) -> f64 {
        self.initial + self.rate * seconds
    }
}

/// Perspective camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub position: [f64; 3],
    pub fov: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: [0.0, 1.7, 10.0],
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// First-person controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraControls {
    pub movement_speed: f64,
    /// Look speed while the pointer is over the viewport
    pub hover_look_speed: f64,
    pub vertical_min: f64,
    pub vertical_max: f64,
    pub height_min: f64,
    pub height_max: f64,
}

impl Default for CameraControls {
    fn default() -> Self {
        Self {
            movement_speed: 2.0,
            hover_look_speed: 0.02,
            vertical_min: 0.1,
            vertical_max: PI - 0.1,
            height_min: 0.5,
            height_max: 2.5,
        }
    }
}

impl CameraControls {
    /// Mouse look only works while the pointer hovers the viewport.
    pub fn look_speed(&self, hovered: bool) -> f64 {
        if hovered { self.hover_look_speed } else { 0.0 }
    }

    /// Yaw accumulated after `frames` frames with Q and/or E held.
    /// Q turns left (positive), E turns right; holding both cancels out.
    pub fn yaw_at(&self, held_q: bool, held_e: bool, frames: u32) -> f64 {
        let direction = f64::from(u8::from(held_q)) - f64::from(u8::from(held_e));
        direction * KEY_YAW_PER_FRAME * f64::from(frames)
    }

    pub fn clamp_pitch(&self, polar: f64) -> f64 {
        polar.clamp(self.vertical_min, self.vertical_max)
    }

    pub fn clamp_height(&self, height: f64) -> f64 {
        height.clamp(self.height_min, self.height_max)
    }
}
