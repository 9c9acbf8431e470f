//! Movement domain: player spawning at encounter start and after restarts.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{CollisionBox, EncounterEntity, EncounterRestartedEvent, Playfield};
use crate::movement::{FireControl, Invulnerable, Lives, Player, PlayerTuning};
use crate::sprites::EncounterArt;

const PLAYER_Z: f32 = 2.0;

/// Spawn a fresh player with full lives at the tuned spawn point.
pub(crate) fn spawn_player(
    commands: &mut Commands,
    tuning: &PlayerTuning,
    playfield: &Playfield,
    art: &EncounterArt,
) -> Entity {
    let position = Vec2::new(
        playfield.width() * tuning.spawn_x,
        playfield.height() * tuning.spawn_y,
    );
    let size = Vec2::new(tuning.width, tuning.height);

    commands
        .spawn((
            Player,
            EncounterEntity,
            Lives::new(tuning.max_lives),
            Invulnerable::default(),
            FireControl::default(),
            CollisionBox { size },
            Sprite {
                image: art.player.clone(),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(PLAYER_Z)),
        ))
        .id()
}

pub(crate) fn spawn_initial_player(
    mut commands: Commands,
    tuning: Res<PlayerTuning>,
    playfield: Res<Playfield>,
    art: Res<EncounterArt>,
) {
    let entity = spawn_player(&mut commands, &tuning, &playfield, &art);
    debug!("Spawned player {:?}", entity);
}

pub(crate) fn respawn_player_on_restart(
    mut commands: Commands,
    mut restarted: MessageReader<EncounterRestartedEvent>,
    tuning: Res<PlayerTuning>,
    playfield: Res<Playfield>,
    art: Res<EncounterArt>,
) {
    if restarted.read().last().is_none() {
        return;
    }
    spawn_player(&mut commands, &tuning, &playfield, &art);
}
