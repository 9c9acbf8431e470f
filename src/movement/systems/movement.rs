//! Movement domain: player locomotion and fire control.

use bevy::prelude::*;

use crate::combat::{ProjectileSpawn, ProjectileTuning, Team, spawn_projectile};
use crate::core::{CollisionBox, Playfield};
use crate::movement::{FireControl, Invulnerable, MovementInput, Player, PlayerTuning};
use crate::sprites::EncounterArt;

/// Integrate the input axis into the player's position and decay invulnerability.
pub(crate) fn apply_player_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<PlayerTuning>,
    playfield: Res<Playfield>,
    mut query: Query<(&mut Transform, &mut Invulnerable), With<Player>>,
) {
    let dt = time.delta_secs();
    // Diagonals are no faster than straight lines
    let direction = input.axis.normalize_or_zero();

    for (mut transform, mut invuln) in &mut query {
        let moved = transform.translation.truncate() + direction * tuning.speed * dt;
        let clamped = playfield.clamp_inset(moved, tuning.edge_margin);
        transform.translation.x = clamped.x;
        transform.translation.y = clamped.y;

        invuln.tick(dt);
    }
}

/// Fire a friendly shot from the player's leading edge when the trigger is held
/// and the cooldown has run out.
pub(crate) fn fire_player_shot(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<PlayerTuning>,
    projectile_tuning: Res<ProjectileTuning>,
    art: Res<EncounterArt>,
    mut query: Query<(&Transform, &CollisionBox, &mut FireControl), With<Player>>,
) {
    let dt = time.delta_secs();

    for (transform, collider, mut fire) in &mut query {
        fire.tick(dt);

        if !input.fire || !fire.try_fire(tuning.fire_cooldown) {
            continue;
        }

        let origin = transform.translation.truncate() + Vec2::new(collider.half_width(), 0.0);
        spawn_projectile(
            &mut commands,
            ProjectileSpawn {
                origin,
                velocity: Vec2::new(tuning.shot_speed, 0.0),
            },
            Team::Player,
            &projectile_tuning,
            &art,
        );
    }
}
