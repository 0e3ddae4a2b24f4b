//! Level domain: static collision tiles and their two read-only views.
//!
//! A tile carries an outline polygon for drawing and a rectangle for physics.
//! Only the first outline vertex feeds the rectangle, so sloped or irregular
//! outlines still collide as their bounding box.

use bevy::prelude::*;

/// Converts tile units to world units. Shared by every tile.
pub const WORLD_SCALE: f32 = 4.0;

/// Axis-aligned rectangle in world units, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Rectangle from a top-left corner and a size.
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self {
            left: corner.x,
            right: corner.x + size.x,
            top: corner.y,
            bottom: corner.y + size.y,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Inclusive AABB overlap: touching edges count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }
}

/// Extent of a tile in tile units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDimensions {
    pub width: f32,
    pub height: f32,
}

/// A static collidable tile. Immutable after the level builder creates it.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionGeometry {
    position: Vec2,
    outline: Vec<Vec2>,
    dimensions: TileDimensions,
}

impl CollisionGeometry {
    /// An empty outline is replaced by a single origin vertex so the
    /// rectangle always has a reference corner.
    pub fn new(position: Vec2, outline: Vec<Vec2>, dimensions: TileDimensions) -> Self {
        let outline = if outline.is_empty() {
            vec![Vec2::ZERO]
        } else {
            outline
        };
        Self {
            position,
            outline,
            dimensions,
        }
    }

    /// Physics view: rectangle anchored at the first outline vertex.
    pub fn bounding_rect(&self) -> Aabb {
        let corner = self.outline[0];
        let left = self.position.x + corner.x * WORLD_SCALE;
        let top = self.position.y + corner.y * WORLD_SCALE;
        Aabb {
            left,
            right: left + self.dimensions.width * WORLD_SCALE,
            top,
            bottom: top + self.dimensions.height * WORLD_SCALE,
        }
    }

    /// Render view: every outline vertex in world units, in outline order.
    pub fn outline_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.outline
            .iter()
            .map(move |point| self.position + *point * WORLD_SCALE)
    }
}

/// Level extent in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 576.0,
        }
    }
}

/// The ordered tile set plus bounds for the active level.
///
/// Tile order is the iteration order of both collision passes.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelGeometry {
    pub tiles: Vec<CollisionGeometry>,
    pub bounds: WorldBounds,
}
