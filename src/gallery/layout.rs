//! Fixed geometry of the gallery room.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI};

pub const ISLAND_SIZE: f64 = 5.0;
pub const ISLAND_HEIGHT: f64 = 0.12;
/// Distance between island centers.
pub const SPACING: f64 = ISLAND_SIZE + 3.0;
pub const CEILING_HEIGHT: f64 = 3.5;
pub const ROOM_SIZE: f64 = 50.0;
/// Islands are laid out over `-GRID_BOUND..=GRID_BOUND` on both axes.
pub const GRID_BOUND: f64 = 15.0;
/// Sideways shift applied per full lap when there are more records than islands.
pub const LAP_OFFSET: f64 = 1.5;

const ISLAND_COLOR: &str = "#681d6e";
const SKIRTING_COLOR: &str = "#e9e8c3";
const SKIRTING_HEIGHT: f64 = 0.05;
const FLOOR_COLOR: &str = "#270870";
const WALL_COLOR: &str = "#000000";
const CEILING_COLOR: &str = "#f8d8ea";
const STRIP_COLOR: &str = "#ffffff";
const POINT_LIGHT_COLOR: &str = "#ebdf79";
const POINT_LIGHT_HEIGHT: f64 = 2.8;

pub type Vec3 = [f64; 3];

/// Axis-aligned box, positioned by its center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slab {
    pub position: Vec3,
    pub size: Vec3,
    pub color: &'static str,
}

/// A display island and the glowing skirting beneath it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Island {
    pub top: Slab,
    pub skirting: Slab,
}

/// Flat rectangle; `rotation` is Euler XYZ in radians.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plane {
    pub position: Vec3,
    pub rotation: Vec3,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f64,
    pub color: &'static str,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lighting {
    pub ambient_intensity: f64,
    pub directional_position: Vec3,
    pub directional_intensity: f64,
    pub points: Vec<PointLight>,
}

/// Everything in the room except the garments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub floor: Plane,
    pub walls: Vec<Plane>,
    pub ceiling: Plane,
    pub light_strips: Vec<Plane>,
    pub islands: Vec<Island>,
    pub lighting: Lighting,
}

/// Island centers in layout order: x outer, z inner, each stepping by
/// [`SPACING`] from `-GRID_BOUND` while within the bound.
pub fn island_positions() -> Vec<Vec3> {
    let steps = grid_steps();
    steps
        .iter()
        .flat_map(|&x| steps.iter().map(move |&z| [x, ISLAND_HEIGHT / 2.0, z]))
        .collect()
}

fn grid_steps() -> Vec<f64> {
    let mut steps = Vec::new();
    let mut value = -GRID_BOUND;
    while value <= GRID_BOUND {
        steps.push(value);
        value += SPACING;
    }
    steps
}

/// Where the record at `index` stands.
///
/// Depends only on the index: records fill islands in layout order and each
/// further lap shifts by [`LAP_OFFSET`] along x.
pub fn placement_for(index: usize) -> Vec3 {
    let islands = island_positions();
    let count = islands.len().max(1);
    let [x, _, z] = islands.get(index % count).copied().unwrap_or([0.0; 3]);
    let lap = (index / count) as f64;
    [x + lap * LAP_OFFSET, ISLAND_HEIGHT, z]
}

fn island_at(position: Vec3) -> Island {
    let [x, y, z] = position;
    Island {
        top: Slab {
            position,
            size: [ISLAND_SIZE, ISLAND_HEIGHT, ISLAND_SIZE],
            color: ISLAND_COLOR,
        },
        skirting: Slab {
            position: [x, y - ISLAND_HEIGHT / 2.0 - SKIRTING_HEIGHT / 2.0, z],
            size: [ISLAND_SIZE, SKIRTING_HEIGHT, ISLAND_SIZE],
            color: SKIRTING_COLOR,
        },
    }
}

fn wall(position: Vec3, rotation_y: f64) -> Plane {
    Plane {
        position,
        rotation: [0.0, rotation_y, 0.0],
        width: ROOM_SIZE,
        height: CEILING_HEIGHT + 0.1,
        color: WALL_COLOR,
    }
}

fn light_strips() -> Vec<Plane> {
    let strip_y = CEILING_HEIGHT - 0.05;
    (0..SPACING as usize)
        .flat_map(|i| {
            let offset = (i as f64 - 2.0) * SPACING - 3.5;
            [
                Plane {
                    position: [0.5, strip_y, offset],
                    rotation: [FRAC_PI_2, 0.0, 0.0],
                    width: 40.0,
                    height: 0.5,
                    color: STRIP_COLOR,
                },
                Plane {
                    position: [offset, strip_y, 0.5],
                    rotation: [FRAC_PI_2, 0.0, FRAC_PI_2],
                    width: 40.5,
                    height: 0.5,
                    color: STRIP_COLOR,
                },
            ]
        })
        .collect()
}

fn lighting() -> Lighting {
    let lights_per_side = SPACING as usize;
    let start = -3.5 * SPACING;
    let points = (0..lights_per_side)
        .flat_map(|i| {
            (0..lights_per_side).map(move |j| PointLight {
                position: [
                    start + i as f64 * SPACING,
                    POINT_LIGHT_HEIGHT,
                    start + j as f64 * SPACING,
                ],
                intensity: 2.0,
                color: POINT_LIGHT_COLOR,
                distance: SPACING,
            })
        })
        .collect();

    Lighting {
        ambient_intensity: 0.2,
        directional_position: [10.0, 10.0, 8.0],
        directional_intensity: 0.5,
        points,
    }
}

/// Builds the static room.
pub fn room() -> Room {
    let half = ROOM_SIZE / 2.0;
    let wall_y = CEILING_HEIGHT / 2.0;
    Room {
        floor: Plane {
            position: [0.0, -0.1, 0.0],
            rotation: [-FRAC_PI_2, 0.0, 0.0],
            width: ROOM_SIZE,
            height: ROOM_SIZE,
            color: FLOOR_COLOR,
        },
        walls: vec![
            wall([0.0, wall_y, -half], 0.0),
            wall([0.0, wall_y, half], PI),
            wall([-half, wall_y, 0.0], FRAC_PI_2),
            wall([half, wall_y, 0.0], -FRAC_PI_2),
        ],
        ceiling: Plane {
            position: [0.0, CEILING_HEIGHT, 0.0],
            rotation: [FRAC_PI_2, 0.0, 0.0],
            width: ROOM_SIZE,
            height: ROOM_SIZE,
            color: CEILING_COLOR,
        },
        light_strips: light_strips(),
        islands: island_positions().into_iter().map(island_at).collect(),
        lighting: lighting(),
    }
}
