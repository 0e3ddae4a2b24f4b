//! Sprites module: animation clip selection, frame clock and manifest.

pub mod animation;
pub mod manifest;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
// Explicit re-export: shadows `bevy::prelude::AnimationClip` from the prelude glob.
pub use animation::AnimationClip;
pub use manifest::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .add_message::<AnimationClipChanged>()
            .add_systems(Update, log_clip_changes);
    }
}
