//! Level domain: static collision geometry and its startup wiring.

mod builder;
mod geometry;

#[cfg(test)]
mod tests;

pub use builder::build_geometry;
pub use geometry::{
    Aabb, CollisionGeometry, LevelGeometry, TileDimensions, WORLD_SCALE, WorldBounds,
};

use bevy::prelude::*;

use crate::content::{LevelDef, validate_level};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelDef>()
            .init_resource::<LevelGeometry>()
            .add_systems(Startup, setup_level_geometry);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, draw_tile_outlines);
    }
}

fn setup_level_geometry(level_def: Res<LevelDef>, mut geometry: ResMut<LevelGeometry>) {
    for error in validate_level(&level_def) {
        warn!("Level data: {}", error);
    }

    *geometry = build_geometry(&level_def);
    info!(
        "Built level geometry: {} tiles, bounds {}x{}",
        geometry.tiles.len(),
        geometry.bounds.width,
        geometry.bounds.height
    );
}

/// Screen-space (y down) to Bevy world-space (y up).
pub fn to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

#[cfg(feature = "dev-tools")]
fn draw_tile_outlines(geometry: Res<LevelGeometry>, mut gizmos: Gizmos) {
    use bevy::math::Isometry2d;

    let outline_color = Color::srgb(0.9, 0.3, 0.3);
    let rect_color = Color::srgba(0.3, 0.6, 0.9, 0.5);

    for tile in &geometry.tiles {
        let mut points: Vec<Vec2> = tile.outline_points().map(to_world).collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        gizmos.linestrip_2d(points, outline_color);

        let rect = tile.bounding_rect();
        let center = to_world(Vec2::new(
            (rect.left + rect.right) / 2.0,
            (rect.top + rect.bottom) / 2.0,
        ));
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            Vec2::new(rect.width(), rect.height()),
            rect_color,
        );
    }
}
