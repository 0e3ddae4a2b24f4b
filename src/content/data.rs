//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron and are only used for
//! deserialization; the level builder turns them into runtime geometry.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Level (level.ron)
// ============================================================================

/// Tile id reserved for empty cells.
pub const EMPTY_TILE: u32 = 0;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    /// Edge length of one grid cell in tile units.
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    /// Row-major grid of tile ids, top row first.
    pub grid: Vec<Vec<u32>>,
    pub shapes: Vec<TileShapeDef>,
}

fn default_tile_size() -> f32 {
    16.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TileShapeDef {
    pub id: u32,
    /// Outline vertices in tile-local units. The first one anchors the
    /// collision rectangle.
    pub outline: Vec<(f32, f32)>,
    pub width: f32,
    pub height: f32,
}

impl LevelDef {
    pub fn shape(&self, id: u32) -> Option<&TileShapeDef> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    pub fn columns(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }
}

impl Default for LevelDef {
    /// A floor, a low ledge of full blocks, a thin high ledge and one
    /// sloped tile that still collides as a full cell.
    fn default() -> Self {
        const COLUMNS: usize = 16;
        let mut grid = vec![vec![EMPTY_TILE; COLUMNS]; 9];
        grid[8] = vec![1; COLUMNS];
        for cell in &mut grid[6][3..6] {
            *cell = 1;
        }
        grid[7][12] = 3;
        for cell in &mut grid[4][8..12] {
            *cell = 2;
        }

        Self {
            tile_size: default_tile_size(),
            grid,
            shapes: vec![
                TileShapeDef {
                    id: 1,
                    outline: vec![(0.0, 0.0), (16.0, 0.0), (16.0, 16.0), (0.0, 16.0)],
                    width: 16.0,
                    height: 16.0,
                },
                TileShapeDef {
                    id: 2,
                    outline: vec![(0.0, 0.0), (16.0, 0.0), (16.0, 4.0), (0.0, 4.0)],
                    width: 16.0,
                    height: 4.0,
                },
                TileShapeDef {
                    id: 3,
                    outline: vec![(0.0, 0.0), (16.0, 16.0), (0.0, 16.0)],
                    width: 16.0,
                    height: 16.0,
                },
            ],
        }
    }
}
