//! Core domain: camera follow clamped to the level.

use bevy::prelude::*;

use crate::level::{LevelGeometry, to_world};
use crate::movement::PlayerSnapshot;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Center the camera on the player, keeping the view inside the level when
/// the level is larger than the window.
pub(crate) fn follow_player(
    snapshot: Res<PlayerSnapshot>,
    level: Res<LevelGeometry>,
    windows: Query<&Window>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let view = windows
        .iter()
        .next()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::new(1280.0, 720.0));

    let target = camera_target(
        snapshot.position + snapshot.box_size / 2.0,
        view,
        Vec2::new(level.bounds.width, level.bounds.height),
    );
    let target = to_world(target);

    for mut transform in &mut cameras {
        transform.translation.x = target.x;
        transform.translation.y = target.y;
    }
}

/// Screen-space camera center for a focus point. On an axis where the level
/// is smaller than the view, the level is centered instead.
pub(crate) fn camera_target(focus: Vec2, view: Vec2, level: Vec2) -> Vec2 {
    let axis = |focus: f32, view: f32, level: f32| {
        if level <= view {
            level / 2.0
        } else {
            focus.clamp(view / 2.0, level - view / 2.0)
        }
    };
    Vec2::new(axis(focus.x, view.x, level.x), axis(focus.y, view.y, level.y))
}
