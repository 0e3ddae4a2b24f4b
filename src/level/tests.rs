//! Level domain: tests for tile geometry and the grid builder.

use bevy::prelude::Vec2;

use super::{Aabb, CollisionGeometry, TileDimensions, WORLD_SCALE, build_geometry};
use crate::content::{LevelDef, TileShapeDef, parse_ron};

fn square_outline() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(16.0, 0.0),
        Vec2::new(16.0, 16.0),
        Vec2::new(0.0, 16.0),
    ]
}

// -----------------------------------------------------------------------------
// CollisionGeometry tests
// -----------------------------------------------------------------------------

#[test]
fn test_bounding_rect_uses_first_vertex_and_dimensions() {
    let tile = CollisionGeometry::new(
        Vec2::new(64.0, 128.0),
        vec![Vec2::new(2.0, 3.0), Vec2::new(10.0, 3.0), Vec2::new(10.0, 7.0)],
        TileDimensions {
            width: 16.0,
            height: 4.0,
        },
    );

    let rect = tile.bounding_rect();
    assert_eq!(rect.left, 72.0);
    assert_eq!(rect.right, 72.0 + 16.0 * WORLD_SCALE);
    assert_eq!(rect.top, 140.0);
    assert_eq!(rect.bottom, 156.0);
}

#[test]
fn test_bounding_rect_ignores_later_outline_vertices() {
    let dimensions = TileDimensions {
        width: 16.0,
        height: 16.0,
    };
    let square = CollisionGeometry::new(Vec2::new(0.0, 64.0), square_outline(), dimensions);
    let slope = CollisionGeometry::new(
        Vec2::new(0.0, 64.0),
        vec![Vec2::ZERO, Vec2::new(16.0, 16.0), Vec2::new(0.0, 16.0)],
        dimensions,
    );

    assert_eq!(square.bounding_rect(), slope.bounding_rect());
    assert_ne!(
        square.outline_points().collect::<Vec<_>>(),
        slope.outline_points().collect::<Vec<_>>()
    );
}

#[test]
fn test_outline_points_are_scaled_into_world_space() {
    let tile = CollisionGeometry::new(
        Vec2::new(10.0, 20.0),
        square_outline(),
        TileDimensions {
            width: 16.0,
            height: 16.0,
        },
    );

    let points: Vec<Vec2> = tile.outline_points().collect();
    assert_eq!(
        points,
        vec![
            Vec2::new(10.0, 20.0),
            Vec2::new(74.0, 20.0),
            Vec2::new(74.0, 84.0),
            Vec2::new(10.0, 84.0),
        ]
    );
}

#[test]
fn test_empty_outline_anchors_at_position() {
    let tile = CollisionGeometry::new(
        Vec2::new(32.0, 32.0),
        Vec::new(),
        TileDimensions {
            width: 1.0,
            height: 1.0,
        },
    );

    let rect = tile.bounding_rect();
    assert_eq!(rect.left, 32.0);
    assert_eq!(rect.top, 32.0);
    assert_eq!(rect.width(), WORLD_SCALE);
}

// -----------------------------------------------------------------------------
// Aabb tests
// -----------------------------------------------------------------------------

#[test]
fn test_touching_edges_overlap() {
    let a = Aabb::from_corner(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let right = Aabb::from_corner(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
    let below = Aabb::from_corner(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));

    assert!(a.overlaps(&right));
    assert!(a.overlaps(&below));
}

#[test]
fn test_separated_boxes_do_not_overlap() {
    let a = Aabb::from_corner(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let gap = Aabb::from_corner(Vec2::new(10.01, 0.0), Vec2::new(10.0, 10.0));
    let diagonal = Aabb::from_corner(Vec2::new(11.0, 11.0), Vec2::new(10.0, 10.0));

    assert!(!a.overlaps(&gap));
    assert!(!a.overlaps(&diagonal));
}

// -----------------------------------------------------------------------------
// Builder tests
// -----------------------------------------------------------------------------

fn small_level() -> LevelDef {
    LevelDef {
        tile_size: 16.0,
        grid: vec![vec![0, 2, 0], vec![1, 9, 1]],
        shapes: vec![
            TileShapeDef {
                id: 1,
                outline: vec![(0.0, 0.0), (16.0, 0.0), (16.0, 16.0), (0.0, 16.0)],
                width: 16.0,
                height: 16.0,
            },
            TileShapeDef {
                id: 2,
                outline: vec![(0.0, 12.0), (16.0, 12.0), (16.0, 16.0), (0.0, 16.0)],
                width: 16.0,
                height: 4.0,
            },
        ],
    }
}

#[test]
fn test_build_geometry_is_row_major_and_skips_unknown_ids() {
    let geometry = build_geometry(&small_level());

    let corners: Vec<Vec2> = geometry
        .tiles
        .iter()
        .map(|t| {
            let rect = t.bounding_rect();
            Vec2::new(rect.left, rect.top)
        })
        .collect();
    // The thin tile's outline starts 12 units down, scaled by four.
    assert_eq!(
        corners,
        vec![
            Vec2::new(64.0, 48.0),
            Vec2::new(0.0, 64.0),
            Vec2::new(128.0, 64.0),
        ]
    );
}

#[test]
fn test_build_geometry_bounds_cover_grid() {
    let geometry = build_geometry(&small_level());
    assert_eq!(geometry.bounds.width, 192.0);
    assert_eq!(geometry.bounds.height, 128.0);
}

#[test]
fn test_build_geometry_offsets_rect_by_first_vertex() {
    let geometry = build_geometry(&small_level());
    let ledge = geometry.tiles[0].bounding_rect();

    assert_eq!(ledge.top, 48.0);
    assert_eq!(ledge.bottom, 64.0);
}

#[test]
fn test_default_level_builds() {
    let geometry = build_geometry(&LevelDef::default());

    assert_eq!(geometry.tiles.len(), 16 + 3 + 4 + 1);
    assert_eq!(geometry.bounds.width, 1024.0);
    assert_eq!(geometry.bounds.height, 576.0);
}

#[test]
fn test_level_def_parses_from_ron() {
    let level: LevelDef = parse_ron(
        "level.ron",
        r#"(
            grid: [[0, 1], [1, 1]],
            shapes: [(id: 1, outline: [(0.0, 0.0), (16.0, 0.0)], width: 16.0, height: 16.0)],
        )"#,
    )
    .unwrap();

    assert_eq!(level.tile_size, 16.0);
    assert_eq!(build_geometry(&level).tiles.len(), 3);
}
