//! Level domain: turns a tile grid into ordered collision geometry.

use bevy::prelude::*;

use super::geometry::{CollisionGeometry, LevelGeometry, TileDimensions, WORLD_SCALE, WorldBounds};
use crate::content::{EMPTY_TILE, LevelDef};

/// Build collision tiles row by row, left to right.
///
/// Cells whose id has no shape are skipped; `validate_level` reports them.
pub fn build_geometry(level: &LevelDef) -> LevelGeometry {
    let cell = level.tile_size * WORLD_SCALE;
    let mut tiles = Vec::new();

    for (row, cells) in level.grid.iter().enumerate() {
        for (column, &id) in cells.iter().enumerate() {
            if id == EMPTY_TILE {
                continue;
            }
            let Some(shape) = level.shape(id) else {
                continue;
            };

            let outline = shape
                .outline
                .iter()
                .map(|&(x, y)| Vec2::new(x, y))
                .collect();
            tiles.push(CollisionGeometry::new(
                Vec2::new(column as f32 * cell, row as f32 * cell),
                outline,
                TileDimensions {
                    width: shape.width,
                    height: shape.height,
                },
            ));
        }
    }

    LevelGeometry {
        tiles,
        bounds: WorldBounds {
            width: level.columns() as f32 * cell,
            height: level.rows() as f32 * cell,
        },
    }
}
