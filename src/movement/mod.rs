//! Movement domain: player input, locomotion, and fire control.

mod bootstrap;
mod components;
mod resources;
mod systems;

pub use components::{FireControl, Invulnerable, Lives, Player};
pub use resources::{MovementInput, PlayerTuning};

use bevy::prelude::*;

use crate::core::EncounterSet;
use crate::movement::bootstrap::{respawn_player_on_restart, spawn_initial_player};
use crate::movement::systems::{apply_player_movement, fire_player_shot, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_initial_player)
            .add_systems(Update, read_input.in_set(EncounterSet::Input))
            .add_systems(
                Update,
                (apply_player_movement, fire_player_shot)
                    .chain()
                    .in_set(EncounterSet::Player),
            )
            .add_systems(
                Update,
                respawn_player_on_restart.in_set(EncounterSet::Spawn),
            );
    }
}
