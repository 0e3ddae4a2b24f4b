//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{Facing, MovementInput};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP_KEYS: [KeyCode; 3] = [KeyCode::KeyW, KeyCode::ArrowUp, KeyCode::Space];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.left_held = keyboard.any_pressed(LEFT_KEYS);
    input.right_held = keyboard.any_pressed(RIGHT_KEYS);

    // Last press wins when both directions go down together
    if keyboard.any_just_pressed(LEFT_KEYS) {
        input.last_direction = Some(Facing::Left);
    }
    if keyboard.any_just_pressed(RIGHT_KEYS) {
        input.last_direction = Some(Facing::Right);
    }

    // Jump stays armed until released or consumed by a jump
    if keyboard.any_just_pressed(JUMP_KEYS) {
        input.jump_pressed = true;
    } else if keyboard.any_just_released(JUMP_KEYS) {
        input.jump_pressed = false;
    }
}
