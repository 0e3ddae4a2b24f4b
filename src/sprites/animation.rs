//! Animation clip selection and frame playback.
//!
//! Six clips exist: idle, run and jump, each facing left or right. The clip
//! is re-selected every frame; requesting the playing clip is a no-op.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::{Facing, MovementState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationClip {
    IdleLeft,
    #[default]
    IdleRight,
    RunLeft,
    RunRight,
    JumpLeft,
    JumpRight,
}

impl AnimationClip {
    pub const ALL: [AnimationClip; 6] = [
        AnimationClip::IdleLeft,
        AnimationClip::IdleRight,
        AnimationClip::RunLeft,
        AnimationClip::RunRight,
        AnimationClip::JumpLeft,
        AnimationClip::JumpRight,
    ];

    pub fn idle(facing: Facing) -> Self {
        match facing {
            Facing::Left => Self::IdleLeft,
            Facing::Right => Self::IdleRight,
        }
    }

    pub fn run(facing: Facing) -> Self {
        match facing {
            Facing::Left => Self::RunLeft,
            Facing::Right => Self::RunRight,
        }
    }

    pub fn jump(facing: Facing) -> Self {
        match facing {
            Facing::Left => Self::JumpLeft,
            Facing::Right => Self::JumpRight,
        }
    }

    /// Clip name as used by sprite sheets and the manifest.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IdleLeft => "idleLeft",
            Self::IdleRight => "idleRight",
            Self::RunLeft => "runLeft",
            Self::RunRight => "runRight",
            Self::JumpLeft => "jumpLeft",
            Self::JumpRight => "jumpRight",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|clip| clip.name() == name)
    }

    /// Strip length and ticks per frame used when the manifest has no entry.
    pub fn default_spec(&self) -> ClipSpec {
        match self {
            Self::IdleLeft | Self::IdleRight => ClipSpec {
                frame_rate: 3,
                frame_buffer: 30,
            },
            Self::RunLeft | Self::RunRight => ClipSpec {
                frame_rate: 8,
                frame_buffer: 15,
            },
            Self::JumpLeft | Self::JumpRight => ClipSpec {
                frame_rate: 8,
                frame_buffer: 12,
            },
        }
    }
}

/// Pick the clip for the finished frame.
///
/// Airborne always shows the jump clip, even with no direction held.
pub fn select_clip(state: &MovementState, direction: Option<Facing>) -> AnimationClip {
    if !state.is_grounded {
        return AnimationClip::jump(state.facing);
    }
    match direction {
        Some(direction) => AnimationClip::run(direction),
        None => AnimationClip::idle(state.facing),
    }
}

/// Playback parameters for one clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClipSpec {
    /// Frames in the strip.
    pub frame_rate: u32,
    /// Ticks each frame stays on screen.
    pub frame_buffer: u32,
}

/// Frame clock for the playing clip.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct AnimationController {
    pub clip: AnimationClip,
    pub spec: ClipSpec,
    /// 0-based frame within the strip.
    pub current_frame: u32,
    /// Ticks since spawn. Not reset on clip changes.
    pub elapsed_frames: u64,
}

impl AnimationController {
    pub fn new(clip: AnimationClip, spec: ClipSpec) -> Self {
        Self {
            clip,
            spec,
            current_frame: 0,
            elapsed_frames: 0,
        }
    }

    /// Advance one tick, stepping the frame every `frame_buffer` ticks.
    pub fn tick(&mut self) {
        self.elapsed_frames += 1;
        let buffer = u64::from(self.spec.frame_buffer.max(1));
        if self.elapsed_frames % buffer == 0 {
            self.current_frame = (self.current_frame + 1) % self.spec.frame_rate.max(1);
        }
    }

    /// Switch clips, restarting at frame 0. Returns false for the playing clip.
    pub fn switch_to(&mut self, clip: AnimationClip, spec: ClipSpec) -> bool {
        if self.clip == clip {
            return false;
        }
        self.clip = clip;
        self.spec = spec;
        self.current_frame = 0;
        true
    }

    /// Sprite key for the current frame, e.g. "runLeft_3".
    pub fn current_sprite_key(&self) -> String {
        format!("{}_{}", self.clip.name(), self.current_frame + 1)
    }
}

/// Message fired when the playing clip changes.
#[derive(Debug)]
pub struct AnimationClipChanged {
    pub entity: Entity,
    pub from: AnimationClip,
    pub to: AnimationClip,
}

impl Message for AnimationClipChanged {}

/// Placeholder sprite tint for each clip family.
pub fn clip_tint(clip: AnimationClip) -> Color {
    match clip {
        AnimationClip::IdleLeft | AnimationClip::IdleRight => Color::srgb(0.9, 0.9, 0.9),
        AnimationClip::RunLeft | AnimationClip::RunRight => Color::srgb(0.85, 0.95, 0.85),
        AnimationClip::JumpLeft | AnimationClip::JumpRight => Color::srgb(0.85, 0.85, 0.95),
    }
}

pub fn log_clip_changes(
    mut changes: MessageReader<AnimationClipChanged>,
    query: Query<&AnimationController>,
) {
    for change in changes.read() {
        let Ok(animation) = query.get(change.entity) else {
            continue;
        };
        debug!(
            "Clip {} -> {} ({})",
            change.from.name(),
            change.to.name(),
            animation.current_sprite_key()
        );
    }
}
