//! Core domain: encounter flow systems for controls, restart, and game over.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::components::EncounterEntity;
use crate::core::events::{EncounterOverEvent, EncounterRestartedEvent};
use crate::core::resources::{EncounterClock, EncounterControls, EncounterStatus};
use crate::movement::{Lives, Player};

pub(crate) fn read_encounter_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut controls: ResMut<EncounterControls>,
) {
    controls.restart = keyboard.pressed(KeyCode::KeyR);
    controls.quit = keyboard.pressed(KeyCode::Escape);
}

pub(crate) fn handle_quit(controls: Res<EncounterControls>, mut exit: MessageWriter<AppExit>) {
    if controls.quit {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}

pub(crate) fn advance_clock(time: Res<Time>, mut clock: ResMut<EncounterClock>) {
    clock.elapsed += time.delta_secs();
}

/// Tear down every encounter entity once a restart is requested after game over.
/// The player and boss are rebuilt by their own plugins on `EncounterRestartedEvent`.
pub(crate) fn handle_restart(
    mut commands: Commands,
    controls: Res<EncounterControls>,
    mut status: ResMut<EncounterStatus>,
    mut clock: ResMut<EncounterClock>,
    mut restarted: MessageWriter<EncounterRestartedEvent>,
    entities: Query<Entity, With<EncounterEntity>>,
) {
    if !status.game_over || !controls.restart {
        return;
    }

    let mut removed = 0;
    for entity in &entities {
        commands.entity(entity).despawn();
        removed += 1;
    }

    status.game_over = false;
    clock.elapsed = 0.0;
    restarted.write(EncounterRestartedEvent);

    info!("Restarting encounter ({} entities cleared)", removed);
}

pub(crate) fn detect_game_over(
    mut status: ResMut<EncounterStatus>,
    clock: Res<EncounterClock>,
    mut over_events: MessageWriter<EncounterOverEvent>,
    player_query: Query<&Lives, With<Player>>,
) {
    if status.game_over {
        return;
    }

    let Ok(lives) = player_query.single() else {
        return;
    };

    if lives.is_exhausted() {
        status.game_over = true;
        over_events.write(EncounterOverEvent {
            elapsed: clock.elapsed,
        });
        info!("GAME OVER after {:.1}s", clock.elapsed);
    }
}
