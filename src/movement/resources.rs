//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

use super::Facing;
use crate::sprites::AnimationClip;

/// Integrate horizontal velocity both before and after input is read.
/// Doubles effective run speed; turning it off changes observable motion.
pub const HORIZONTAL_DOUBLE_STEP: bool = true;

/// Per-frame constants. Units are world units per frame.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub gravity: f32,
    /// Negative: up is -y.
    pub jump_velocity: f32,
    pub max_jump_count: u8,
    pub run_speed: f32,
    /// Clearance left between the character and a tile after correction.
    pub collision_epsilon: f32,
    pub horizontal_double_step: bool,
    pub spawn: (f32, f32),
    pub starting_health: i32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            jump_velocity: -9.0,
            max_jump_count: 2,
            run_speed: 1.0,
            collision_epsilon: 0.01,
            horizontal_double_step: HORIZONTAL_DOUBLE_STEP,
            spawn: (100.0, 100.0),
            starting_health: 3,
        }
    }
}

/// Per-frame input snapshot handed to the tick.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MovementInput {
    pub left_held: bool,
    pub right_held: bool,
    /// Most recently pressed direction key.
    pub last_direction: Option<Facing>,
    /// Set on press, cleared on release or when a jump consumes it.
    pub jump_pressed: bool,
}

impl MovementInput {
    /// Horizontal direction, only while the last pressed direction is still held.
    pub fn direction(&self) -> Option<Facing> {
        match self.last_direction {
            Some(Facing::Left) if self.left_held => Some(Facing::Left),
            Some(Facing::Right) if self.right_held => Some(Facing::Right),
            _ => None,
        }
    }

    pub fn axis(&self) -> f32 {
        match self.direction() {
            Some(Facing::Left) => -1.0,
            Some(Facing::Right) => 1.0,
            None => 0.0,
        }
    }
}

/// Read-only view of the player written after each tick for presentation.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub box_size: Vec2,
    pub facing: Facing,
    pub is_grounded: bool,
    pub clip: AnimationClip,
}
