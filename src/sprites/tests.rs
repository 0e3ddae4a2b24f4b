//! Sprites module: tests for clip selection, frame clock and manifest parsing.

use bevy::prelude::*;

use super::{AnimationClip, AnimationController, ClipSpec, SpriteManifest, select_clip};
use crate::movement::{Facing, MovementState};

fn grounded(facing: Facing) -> MovementState {
    MovementState {
        facing,
        ..default()
    }
}

fn airborne(facing: Facing) -> MovementState {
    MovementState {
        facing,
        is_grounded: false,
        ..default()
    }
}

// -----------------------------------------------------------------------------
// Clip selection tests
// -----------------------------------------------------------------------------

#[test]
fn test_airborne_selects_jump_by_facing() {
    assert_eq!(select_clip(&airborne(Facing::Left), None), AnimationClip::JumpLeft);
    assert_eq!(select_clip(&airborne(Facing::Right), None), AnimationClip::JumpRight);
}

#[test]
fn test_airborne_ignores_held_direction() {
    assert_eq!(
        select_clip(&airborne(Facing::Left), Some(Facing::Left)),
        AnimationClip::JumpLeft
    );
}

#[test]
fn test_grounded_with_direction_runs() {
    assert_eq!(
        select_clip(&grounded(Facing::Right), Some(Facing::Left)),
        AnimationClip::RunLeft
    );
    assert_eq!(
        select_clip(&grounded(Facing::Left), Some(Facing::Right)),
        AnimationClip::RunRight
    );
}

#[test]
fn test_grounded_without_direction_idles_by_facing() {
    assert_eq!(select_clip(&grounded(Facing::Left), None), AnimationClip::IdleLeft);
    assert_eq!(select_clip(&grounded(Facing::Right), None), AnimationClip::IdleRight);
}

#[test]
fn test_clip_names_round_trip() {
    for clip in AnimationClip::ALL {
        assert_eq!(AnimationClip::from_name(clip.name()), Some(clip));
    }
    assert_eq!(AnimationClip::from_name("fall"), None);
}

// -----------------------------------------------------------------------------
// AnimationController tests
// -----------------------------------------------------------------------------

#[test]
fn test_frame_advances_every_buffer_ticks_and_wraps() {
    let spec = ClipSpec {
        frame_rate: 3,
        frame_buffer: 2,
    };
    let mut controller = AnimationController::new(AnimationClip::IdleRight, spec);

    let frames: Vec<u32> = (0..8)
        .map(|_| {
            controller.tick();
            controller.current_frame
        })
        .collect();

    assert_eq!(frames, vec![0, 1, 1, 2, 2, 0, 0, 1]);
}

#[test]
fn test_switching_to_playing_clip_is_noop() {
    let spec = AnimationClip::RunLeft.default_spec();
    let mut controller = AnimationController::new(AnimationClip::RunLeft, spec);
    controller.current_frame = 4;

    assert!(!controller.switch_to(AnimationClip::RunLeft, spec));
    assert_eq!(controller.current_frame, 4);
}

#[test]
fn test_switching_clip_restarts_at_first_frame() {
    let mut controller = AnimationController::new(
        AnimationClip::RunLeft,
        AnimationClip::RunLeft.default_spec(),
    );
    controller.current_frame = 4;

    let jump = AnimationClip::JumpLeft.default_spec();
    assert!(controller.switch_to(AnimationClip::JumpLeft, jump));
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.spec, jump);
    assert_eq!(controller.current_sprite_key(), "jumpLeft_1");
}

#[test]
fn test_zero_frame_buffer_does_not_panic() {
    let spec = ClipSpec {
        frame_rate: 0,
        frame_buffer: 0,
    };
    let mut controller = AnimationController::new(AnimationClip::IdleLeft, spec);
    controller.tick();
    assert_eq!(controller.current_frame, 0);
}

// -----------------------------------------------------------------------------
// Manifest tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_manifest_has_every_clip() {
    let manifest = SpriteManifest::default();
    for clip in AnimationClip::ALL {
        assert_eq!(manifest.clip_spec(clip), clip.default_spec());
    }
    assert_eq!(manifest.metrics().box_size(), Vec2::new(40.0, 40.0));
}

#[test]
fn test_manifest_json_overrides_listed_clips_only() {
    let manifest = SpriteManifest::from_json_str(
        "player.json",
        r#"{
            "version": 2,
            "frame_width": 20,
            "frame_height": 24,
            "scale": 2.0,
            "clips": {
                "runRight": { "frame_rate": 6, "frame_buffer": 10 },
                "somersault": { "frame_rate": 4, "frame_buffer": 4 }
            }
        }"#,
    )
    .unwrap();

    assert_eq!(manifest.version, 2);
    assert_eq!(
        manifest.clip_spec(AnimationClip::RunRight),
        ClipSpec {
            frame_rate: 6,
            frame_buffer: 10
        }
    );
    assert_eq!(
        manifest.clip_spec(AnimationClip::RunLeft),
        AnimationClip::RunLeft.default_spec()
    );
    assert_eq!(manifest.metrics().box_size(), Vec2::new(40.0, 48.0));
}

#[test]
fn test_manifest_parse_error_names_the_file() {
    let err = SpriteManifest::from_json_str("player.json", "{").unwrap_err();
    assert_eq!(err.file, "player.json");
}
