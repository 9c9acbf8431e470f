//! Core domain: encounter flow, tick ordering, and shared resources.

mod components;
mod events;
mod resources;
mod systems;
#[cfg(test)]
pub(crate) mod tests;

pub use components::{CollisionBox, EncounterEntity, boxes_overlap};
pub use events::{EncounterOverEvent, EncounterRestartedEvent};
pub use resources::{
    EncounterClock, EncounterControls, EncounterStatus, Playfield, PlayfieldError,
    encounter_running,
};

use bevy::prelude::*;

use crate::core::systems::{
    advance_clock, detect_game_over, handle_quit, handle_restart, read_encounter_controls,
};

/// Ordered stages of one encounter tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EncounterSet {
    /// Sample keyboard state into per-tick input resources
    Input,
    /// Advance the encounter clock
    Clock,
    /// Phase classification, boss state machine, volleys
    Boss,
    /// Player movement and fire control
    Player,
    /// Projectile motion, expiry, and removal
    Projectiles,
    /// Projectile hits against boss and player
    Collisions,
    /// Teardown after a restart request
    Restart,
    /// Rebuild player and boss after teardown
    Spawn,
    /// Terminal condition checks
    Outcome,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Playfield>()
            .init_resource::<EncounterStatus>()
            .init_resource::<EncounterClock>()
            .init_resource::<EncounterControls>()
            .add_message::<EncounterOverEvent>()
            .add_message::<EncounterRestartedEvent>()
            .configure_sets(
                Update,
                (
                    EncounterSet::Input,
                    EncounterSet::Clock,
                    EncounterSet::Boss,
                    EncounterSet::Player,
                    EncounterSet::Projectiles,
                    EncounterSet::Collisions,
                    EncounterSet::Restart,
                    EncounterSet::Spawn,
                    EncounterSet::Outcome,
                )
                    .chain(),
            )
            .configure_sets(Update, EncounterSet::Clock.run_if(encounter_running))
            .configure_sets(Update, EncounterSet::Boss.run_if(encounter_running))
            .configure_sets(Update, EncounterSet::Player.run_if(encounter_running))
            .configure_sets(Update, EncounterSet::Projectiles.run_if(encounter_running))
            .configure_sets(Update, EncounterSet::Collisions.run_if(encounter_running))
            .add_systems(
                Update,
                (read_encounter_controls, handle_quit)
                    .chain()
                    .in_set(EncounterSet::Input),
            )
            .add_systems(Update, advance_clock.in_set(EncounterSet::Clock))
            .add_systems(Update, handle_restart.in_set(EncounterSet::Restart))
            .add_systems(Update, detect_game_over.in_set(EncounterSet::Outcome));
    }
}
