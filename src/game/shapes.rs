//! Shape geometry
//!
//! Static vertex and colour data for every drawable on the range. All shapes
//! are authored in local range coordinates (lower-left corner at the origin)
//! or, for movable parts, around their own pivot.

use std::f32::consts::TAU;

use crate::render::{FillMode, MeshData, PrimitiveKind};

use super::config::RangeConfig;
use super::frame::MeshId;

/// Rim segments per disc.
pub const CIRCLE_SEGMENTS: usize = 100;

const CANNON_BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const PIVOT_RED: [f32; 3] = [1.0, 0.0, 0.0];
const BALL_GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const HUB_RADIUS: f32 = 0.2;

/// Filled disc centred on the origin, as a triangle fan.
pub fn circle(label: &'static str, radius: f32, color: [f32; 3]) -> MeshData {
    let mut positions = Vec::with_capacity(CIRCLE_SEGMENTS + 2);
    positions.push([0.0, 0.0, 0.0]);
    for i in 0..=CIRCLE_SEGMENTS {
        let angle = TAU * i as f32 / CIRCLE_SEGMENTS as f32;
        positions.push([radius * angle.cos(), radius * angle.sin(), 0.0]);
    }
    MeshData::uniform_color(label, PrimitiveKind::TriangleFan, positions, color, FillMode::Fill)
}

fn triangles(label: &'static str, positions: Vec<[f32; 3]>, color: [f32; 3]) -> MeshData {
    MeshData::uniform_color(label, PrimitiveKind::Triangles, positions, color, FillMode::Fill)
}

/// Geometry for one mesh slot.
pub fn mesh_for(id: MeshId, config: &RangeConfig) -> MeshData {
    match id {
        MeshId::Spire => triangles(
            "Spire",
            vec![[7.0, 0.0, 0.0], [7.6, 0.0, 0.0], [7.3, 1.0, 0.0]],
            [0.5; 3],
        ),
        MeshId::Column => triangles(
            "Column",
            vec![
                [2.0, 0.0, 0.0],
                [2.5, 0.0, 0.0],
                [2.5, 3.0, 0.0],
                [2.5, 3.0, 0.0],
                [2.0, 3.0, 0.0],
                [2.0, 0.0, 0.0],
            ],
            [0.2; 3],
        ),
        MeshId::Ledge => {
            let grey = [0.4; 3];
            MeshData::new(
                "Ledge",
                PrimitiveKind::Triangles,
                vec![
                    [3.7, 2.0, 0.0],
                    [4.7, 2.0, 0.0],
                    [4.5, 2.5, 0.0],
                    [4.5, 2.5, 0.0],
                    [4.1, 2.5, 0.0],
                    [3.7, 2.0, 0.0],
                ],
                // The upper right corner of the second triangle is tinted olive
                vec![grey, grey, grey, [0.4, 0.4, 0.0], grey, grey],
                FillMode::Fill,
            )
        }
        MeshId::Target0 | MeshId::Target1 | MeshId::Target2 => {
            let label = match id {
                MeshId::Target0 => "Target 0",
                MeshId::Target1 => "Target 1",
                _ => "Target 2",
            };
            let target = id
                .target_index()
                .and_then(|index| config.targets.get(index))
                .copied()
                .unwrap_or(config.targets[0]);
            circle(label, target.radius, target.color)
        }
        MeshId::Cannon => triangles(
            "Cannon",
            vec![
                [0.1, 0.5, 0.0],
                [-0.1, 0.5, 0.0],
                [-0.2, -0.5, 0.0],
                [-0.2, -0.5, 0.0],
                [0.2, -0.5, 0.0],
                [0.1, 0.5, 0.0],
            ],
            CANNON_BLUE,
        ),
        MeshId::Hub => circle("Hub", HUB_RADIUS, CANNON_BLUE),
        MeshId::Pivot => triangles(
            "Pivot",
            vec![[0.0, -0.4, 0.0], [-0.2, -0.8, 0.0], [0.2, -0.8, 0.0]],
            PIVOT_RED,
        ),
        MeshId::Projectile => circle("Projectile", config.projectile_radius, BALL_GREEN),
    }
}
