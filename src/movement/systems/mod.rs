//! Movement domain: system modules for player updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{apply_player_movement, fire_player_shot};
