//! Movement domain: keyboard bindings sampled into a per-tick `MovementInput`.

use bevy::prelude::*;

use crate::movement::MovementInput;

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const FIRE: [KeyCode; 1] = [KeyCode::Space];

/// -1, 0 or 1 along one axis. Holding both directions cancels out.
fn axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let toward = |keys: [KeyCode; 2]| if keyboard.any_pressed(keys) { 1.0 } else { 0.0 };
    toward(positive) - toward(negative)
}

/// Snapshot the ship controls for this tick. The axis is left unnormalized;
/// movement scales it.
pub(crate) fn sample_movement(keyboard: &ButtonInput<KeyCode>) -> MovementInput {
    MovementInput {
        // +y is up
        axis: Vec2::new(axis(keyboard, LEFT, RIGHT), axis(keyboard, DOWN, UP)),
        fire: keyboard.any_pressed(FIRE),
    }
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let sampled = sample_movement(&keyboard);
    if sampled.fire && !input.fire {
        debug!("Fire trigger held");
    }
    *input = sampled;
}
