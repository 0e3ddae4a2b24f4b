//! Movement domain: per-frame locomotion, gravity and tile collision.

mod components;
mod resolver;
mod resources;
mod stepper;
mod systems;


pub use components::{Facing, MovementState, Player, SpriteMetrics};
pub use resolver::{CollisionResolver, Contact};
pub use resources::{HORIZONTAL_DOUBLE_STEP, MovementInput, MovementTuning, PlayerSnapshot};
pub use stepper::{FrameOutcome, advance, apply_gravity, step_frame};

use bevy::prelude::*;

use crate::sprites::{AnimationClip, AnimationController, SpriteManifest, clip_tint};
use systems::{read_input, sync_player_sprite, tick_player};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<PlayerSnapshot>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, tick_player, sync_player_sprite).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, systems::draw_player_debug.after(tick_player));
    }
}

fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    manifest: Res<SpriteManifest>,
) {
    let state = MovementState {
        position: Vec2::new(tuning.spawn.0, tuning.spawn.1),
        max_jump_count: tuning.max_jump_count,
        health: tuning.starting_health,
        ..default()
    };
    let metrics = manifest.metrics();
    let animation = AnimationController::new(
        AnimationClip::IdleRight,
        manifest.clip_spec(AnimationClip::IdleRight),
    );

    info!(
        "Spawning player at ({}, {}), box {}x{}, max_jump_count={}, health={}",
        state.position.x,
        state.position.y,
        metrics.box_size().x,
        metrics.box_size().y,
        state.max_jump_count,
        state.health
    );

    commands.spawn((
        Player,
        state,
        metrics,
        animation,
        Sprite {
            color: clip_tint(AnimationClip::IdleRight),
            custom_size: Some(metrics.box_size()),
            ..default()
        },
        Transform::default(),
    ));
}
