//! Movement domain: the fixed per-frame step.
//!
//! Order matters and is observable: animation clock, input integration,
//! horizontal pass, gravity, vertical pass.

use super::resolver::{CollisionResolver, Contact};
use super::{MovementInput, MovementState, MovementTuning, SpriteMetrics};
use crate::level::LevelGeometry;
use crate::sprites::{AnimationClip, AnimationController, SpriteManifest, select_clip};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub jumped: bool,
    pub horizontal_contact: Option<Contact>,
    pub vertical_contact: Option<Contact>,
    pub clip: AnimationClip,
    pub clip_changed: bool,
}

/// Apply input: integrate the previous horizontal velocity, replace it from
/// the input direction and start a jump if the gate allows.
///
/// A successful jump consumes `input.jump_pressed`; a rejected one leaves it
/// set so a held key fires on landing.
pub fn advance(
    state: &mut MovementState,
    input: &mut MovementInput,
    tuning: &MovementTuning,
) -> bool {
    if tuning.horizontal_double_step {
        state.position.x += state.velocity.x;
    }

    state.velocity.x = input.axis() * tuning.run_speed;
    if let Some(direction) = input.direction() {
        state.facing = direction;
    }

    if !input.jump_pressed {
        return false;
    }

    let jumped = state.try_jump(tuning.jump_velocity);
    if jumped {
        input.jump_pressed = false;
    }
    jumped
}

/// Gravity applies every frame, grounded or not; the vertical pass undoes it.
pub fn apply_gravity(state: &mut MovementState, tuning: &MovementTuning) {
    state.position.y += state.velocity.y;
    state.velocity.y += tuning.gravity;
}

/// Run one full frame for the character.
pub fn step_frame(
    state: &mut MovementState,
    animation: &mut AnimationController,
    input: &mut MovementInput,
    level: &LevelGeometry,
    metrics: &SpriteMetrics,
    tuning: &MovementTuning,
    manifest: &SpriteManifest,
) -> FrameOutcome {
    let resolver = CollisionResolver::new(level, tuning.collision_epsilon);

    animation.tick();
    let jumped = advance(state, input, tuning);
    let horizontal_contact = resolver.resolve_horizontal(state, metrics);
    apply_gravity(state, tuning);
    let vertical_contact = resolver.resolve_vertical(state, metrics);

    let clip = select_clip(state, input.direction());
    let clip_changed = animation.switch_to(clip, manifest.clip_spec(clip));

    FrameOutcome {
        jumped,
        horizontal_contact,
        vertical_contact,
        clip,
        clip_changed,
    }
}
