//! Sprite manifest: frame metrics and per-clip playback timing.
//!
//! Loaded from JSON; any clip missing from the file keeps its built-in spec.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::{AnimationClip, ClipSpec};
use crate::content::{ContentLoadError, parse_json, read_file};
use crate::movement::SpriteMetrics;

/// Resource describing the player sprite sheet.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SpriteManifest {
    pub version: u32,
    pub frame_width: f32,
    pub frame_height: f32,
    /// Render scale applied to every frame.
    pub scale: f32,
    pub clips: HashMap<AnimationClip, ClipSpec>,
}

impl Default for SpriteManifest {
    fn default() -> Self {
        let metrics = SpriteMetrics::default();
        Self {
            version: 1,
            frame_width: metrics.frame_width,
            frame_height: metrics.frame_height,
            scale: metrics.scale,
            clips: AnimationClip::ALL
                .into_iter()
                .map(|clip| (clip, clip.default_spec()))
                .collect(),
        }
    }
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    frame_width: f32,
    frame_height: f32,
    scale: f32,
    #[serde(default)]
    clips: HashMap<String, ClipSpec>,
}

impl SpriteManifest {
    /// Load the manifest from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ContentLoadError> {
        let contents = read_file(path)?;
        Self::from_json_str(&path.display().to_string(), &contents)
    }

    fn from_json(json: ManifestJson, file: &str) -> Self {
        let mut manifest = Self {
            version: json.version,
            frame_width: json.frame_width,
            frame_height: json.frame_height,
            scale: json.scale,
            ..default()
        };

        for (name, spec) in json.clips {
            match AnimationClip::from_name(&name) {
                Some(clip) => {
                    manifest.clips.insert(clip, spec);
                }
                None => warn!("{}: ignoring unknown clip '{}'", file, name),
            }
        }
        manifest
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json_str(file: &str, contents: &str) -> Result<Self, ContentLoadError> {
        let json: ManifestJson = parse_json(file, contents)?;
        Ok(Self::from_json(json, file))
    }

    pub fn clip_spec(&self, clip: AnimationClip) -> ClipSpec {
        self.clips
            .get(&clip)
            .copied()
            .unwrap_or_else(|| clip.default_spec())
    }

    /// Character box metrics derived from the frame size.
    pub fn metrics(&self) -> SpriteMetrics {
        SpriteMetrics {
            frame_width: self.frame_width,
            frame_height: self.frame_height,
            scale: self.scale,
        }
    }
}
