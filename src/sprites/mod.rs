//! Sprites module: camera, texture loading, and state-driven tinting.
//!
//! This module handles:
//! - Loading the sprite manifest from JSON into [`EncounterArt`]
//! - Placing the camera so world coordinates match the playfield
//! - Tinting the boss by attack state, with a pulse while telegraphing
//! - Blinking the player during invulnerability

pub mod manifest;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use manifest::*;

use crate::combat::{Boss, BossAI, BossState};
use crate::core::{EncounterClock, EncounterSet, Playfield};
use crate::movement::{Invulnerable, Player};

const BACKGROUND: Color = Color::srgb(0.06, 0.06, 0.1);

/// Blink toggles per second while the player is invulnerable
const BLINK_RATE: f32 = 10.0;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EncounterArt>()
            .insert_resource(ClearColor(BACKGROUND))
            // Art must be resolved before the Startup spawners clone its handles
            .add_systems(PreStartup, load_encounter_art)
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (tint_boss_by_state, blink_invulnerable_player).after(EncounterSet::Outcome),
            );
    }
}

fn setup_camera(mut commands: Commands, playfield: Res<Playfield>) {
    let center = playfield.center();
    commands.spawn((Camera2d, Transform::from_xyz(center.x, center.y, 0.0)));
}

/// Colour for each boss state. The telegraph tint is scaled by a pulse in `[0.5, 1.0]`.
pub fn boss_state_color(state: BossState, elapsed: f32) -> Color {
    match state {
        BossState::Idle => Color::srgb(0.9, 0.9, 1.0),
        BossState::Telegraph => {
            let pulse = (elapsed * 10.0).sin() * 0.25 + 0.75;
            Color::srgb(1.0 * pulse, 0.4 * pulse, 0.4 * pulse)
        }
        BossState::Attack => Color::srgb(1.0, 1.0, 0.4),
        BossState::Cooldown => Color::srgb(0.4, 0.5, 0.8),
    }
}

fn tint_boss_by_state(
    clock: Res<EncounterClock>,
    mut query: Query<(&BossAI, &mut Sprite), With<Boss>>,
) {
    for (ai, mut sprite) in &mut query {
        sprite.color = boss_state_color(ai.state, clock.elapsed);
    }
}

fn blink_invulnerable_player(
    clock: Res<EncounterClock>,
    mut query: Query<(&Invulnerable, &mut Visibility), With<Player>>,
) {
    for (invuln, mut visibility) in &mut query {
        let hidden = invuln.is_invulnerable() && ((clock.elapsed * BLINK_RATE) as u32) % 2 == 1;
        *visibility = if hidden {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
    }
}
