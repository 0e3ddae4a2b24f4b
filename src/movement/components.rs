//! Movement domain: components for the player's kinematic state.

use bevy::prelude::*;

use crate::level::Aabb;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Kinematic and jump-gating state, y grows downward.
///
/// `jump_count` never exceeds `max_jump_count` and is reset on landing.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    pub is_grounded: bool,
    pub jump_count: u8,
    pub max_jump_count: u8,
    /// Not consumed by movement.
    pub health: i32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            is_grounded: true,
            jump_count: 0,
            max_jump_count: 2,
            health: 3,
        }
    }
}

impl MovementState {
    pub fn can_jump(&self) -> bool {
        self.is_grounded || self.jump_count < self.max_jump_count
    }

    /// Start a jump if the gate allows it. Returns whether it did.
    pub fn try_jump(&mut self, jump_velocity: f32) -> bool {
        if !self.can_jump() {
            return false;
        }
        self.velocity.y = jump_velocity;
        self.is_grounded = false;
        self.jump_count = (self.jump_count + 1).min(self.max_jump_count);
        true
    }

    pub fn land(&mut self) {
        self.velocity.y = 0.0;
        self.is_grounded = true;
        self.jump_count = 0;
    }

    /// Bounding box for the current position.
    pub fn bounding_box(&self, metrics: &SpriteMetrics) -> Aabb {
        Aabb::from_corner(self.position, metrics.box_size())
    }
}

/// Frame size of the current sprite strip and its render scale.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SpriteMetrics {
    pub frame_width: f32,
    pub frame_height: f32,
    pub scale: f32,
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self {
            frame_width: 16.0,
            frame_height: 16.0,
            scale: 2.5,
        }
    }
}

impl SpriteMetrics {
    /// Character box size in world units.
    pub fn box_size(&self) -> Vec2 {
        Vec2::new(self.frame_width * self.scale, self.frame_height * self.scale)
    }
}
