//! Core domain: camera and app-wide wiring.

mod systems;

use bevy::prelude::*;
use bevy::transform::TransformSystems;

use systems::{follow_player, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(PostUpdate, follow_player.before(TransformSystems::Propagate));
    }
}
