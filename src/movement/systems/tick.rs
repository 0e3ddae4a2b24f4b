//! Movement domain: per-frame tick and presentation sync.

use bevy::prelude::*;

use crate::level::{LevelGeometry, to_world};
use crate::movement::{
    Contact, Facing, FrameOutcome, MovementInput, MovementState, MovementTuning, Player,
    PlayerSnapshot, SpriteMetrics, step_frame,
};
use crate::sprites::{AnimationClipChanged, AnimationController, SpriteManifest, clip_tint};

/// The only writer of movement state. Publishes a snapshot for render-side
/// systems once the frame is resolved.
pub(crate) fn tick_player(
    level: Res<LevelGeometry>,
    tuning: Res<MovementTuning>,
    manifest: Res<SpriteManifest>,
    mut input: ResMut<MovementInput>,
    mut snapshot: ResMut<PlayerSnapshot>,
    mut clip_changes: MessageWriter<AnimationClipChanged>,
    mut query: Query<
        (
            Entity,
            &mut MovementState,
            &mut AnimationController,
            &SpriteMetrics,
        ),
        With<Player>,
    >,
) {
    for (entity, mut state, mut animation, metrics) in &mut query {
        let from = animation.clip;
        let was_grounded = state.is_grounded;
        let outcome = step_frame(
            &mut state,
            &mut animation,
            &mut input,
            &level,
            metrics,
            &tuning,
            &manifest,
        );
        log_outcome(&outcome, &state, was_grounded);

        if outcome.clip_changed {
            clip_changes.write(AnimationClipChanged {
                entity,
                from,
                to: outcome.clip,
            });
        }

        *snapshot = PlayerSnapshot {
            position: state.position,
            velocity: state.velocity,
            box_size: metrics.box_size(),
            facing: state.facing,
            is_grounded: state.is_grounded,
            clip: outcome.clip,
        };
    }
}

fn log_outcome(outcome: &FrameOutcome, state: &MovementState, was_grounded: bool) {
    if outcome.jumped {
        debug!(
            "Jump: jump_count={}/{}",
            state.jump_count, state.max_jump_count
        );
    }

    if let Some(contact) = outcome.horizontal_contact {
        debug!("Blocked {:?} at x={:.2}", contact, state.position.x);
    }

    match outcome.vertical_contact {
        Some(Contact::Ground | Contact::LevelFloor) if !was_grounded => {
            debug!(
                "Landed: position=({:.2}, {:.2})",
                state.position.x, state.position.y
            );
        }
        Some(Contact::Ceiling) => debug!("Bumped ceiling at y={:.2}", state.position.y),
        _ => {}
    }

    if was_grounded && !state.is_grounded {
        debug!("Left ground: jump_count={}", state.jump_count);
    }
}

/// Place, flip and tint the player sprite from the snapshot. Read-only on
/// movement state.
pub(crate) fn sync_player_sprite(
    snapshot: Res<PlayerSnapshot>,
    mut query: Query<(&mut Transform, &mut Sprite), With<Player>>,
) {
    let center = to_world(snapshot.position + snapshot.box_size / 2.0);
    for (mut transform, mut sprite) in &mut query {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
        sprite.flip_x = snapshot.facing == Facing::Left;
        sprite.color = clip_tint(snapshot.clip);
    }
}

/// Box outline colored by grounded state plus a velocity line.
#[cfg(feature = "dev-tools")]
pub(crate) fn draw_player_debug(snapshot: Res<PlayerSnapshot>, mut gizmos: Gizmos) {
    use bevy::math::Isometry2d;

    let center = snapshot.position + snapshot.box_size / 2.0;
    let color = if snapshot.is_grounded {
        Color::srgb(0.3, 0.9, 0.3)
    } else {
        Color::srgb(0.9, 0.8, 0.2)
    };

    gizmos.rect_2d(
        Isometry2d::from_translation(to_world(center)),
        snapshot.box_size,
        color,
    );
    gizmos.line_2d(
        to_world(center),
        to_world(center + snapshot.velocity * 8.0),
        color,
    );
}
