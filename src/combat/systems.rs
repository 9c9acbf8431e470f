//! Combat domain: projectile motion, cleanup, and hit resolution.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{Boss, Health, Projectile};
use crate::combat::events::{BossDamagedEvent, PlayerHitEvent, VolleyFiredEvent};
use crate::combat::resources::ProjectileTuning;
use crate::core::{CollisionBox, Playfield, boxes_overlap};
use crate::movement::{Invulnerable, Lives, Player, PlayerTuning};

/// Move every live projectile and expire the ones that left the playfield margin.
pub(crate) fn advance_projectiles(
    time: Res<Time>,
    playfield: Res<Playfield>,
    tuning: Res<ProjectileTuning>,
    mut query: Query<(&mut Transform, &mut Projectile)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut projectile) in &mut query {
        if !projectile.alive {
            continue;
        }

        let position = transform.translation.truncate() + projectile.velocity * dt;
        transform.translation.x = position.x;
        transform.translation.y = position.y;

        if playfield.is_outside(position, tuning.cull_margin) {
            projectile.alive = false;
        }
    }
}

pub(crate) fn despawn_dead_projectiles(
    mut commands: Commands,
    query: Query<(Entity, &Projectile)>,
) {
    for (entity, projectile) in &query {
        if !projectile.alive {
            commands.entity(entity).despawn();
        }
    }
}

/// Player shots against the boss first, then boss bullets against the player.
/// A projectile that lands is marked dead so it can never hit twice.
pub(crate) fn resolve_projectile_hits(
    player_tuning: Res<PlayerTuning>,
    projectile_tuning: Res<ProjectileTuning>,
    mut boss_damaged: MessageWriter<BossDamagedEvent>,
    mut player_hits: MessageWriter<PlayerHitEvent>,
    mut projectiles: Query<(&Transform, &CollisionBox, &mut Projectile)>,
    mut boss_query: Query<(&Transform, &CollisionBox, &mut Health), (With<Boss>, Without<Projectile>)>,
    mut player_query: Query<
        (&Transform, &CollisionBox, &mut Lives, &mut Invulnerable),
        (With<Player>, Without<Projectile>),
    >,
) {
    if let Ok((boss_transform, boss_box, mut health)) = boss_query.single_mut() {
        let boss_pos = boss_transform.translation.truncate();

        for (transform, collider, mut projectile) in &mut projectiles {
            if !projectile.alive || !projectile.is_friendly() {
                continue;
            }
            if !boxes_overlap(transform.translation.truncate(), collider, boss_pos, boss_box) {
                continue;
            }

            projectile.alive = false;
            let dealt = health.take_damage(projectile_tuning.shot_damage);
            boss_damaged.write(BossDamagedEvent {
                amount: dealt,
                remaining: health.current,
            });
        }
    }

    if let Ok((player_transform, player_box, mut lives, mut invuln)) = player_query.single_mut() {
        let player_pos = player_transform.translation.truncate();

        for (transform, collider, mut projectile) in &mut projectiles {
            if !projectile.alive || projectile.is_friendly() {
                continue;
            }
            if !boxes_overlap(transform.translation.truncate(), collider, player_pos, player_box) {
                continue;
            }

            // The bullet is spent even when the player is still invulnerable
            projectile.alive = false;
            if lives.take_hit(&mut invuln, player_tuning.invulnerability_window) {
                player_hits.write(PlayerHitEvent {
                    lives_remaining: lives.current,
                });
            }
        }
    }
}

pub(crate) fn log_combat_events(
    mut volley_events: MessageReader<VolleyFiredEvent>,
    mut boss_damaged: MessageReader<BossDamagedEvent>,
    mut player_hits: MessageReader<PlayerHitEvent>,
) {
    for event in volley_events.read() {
        debug!(
            "{:?} volley: {:?} ({} projectiles)",
            event.phase, event.patterns, event.projectile_count
        );
    }
    for event in boss_damaged.read() {
        debug!(
            "Boss took {} damage, {} hp left",
            event.amount, event.remaining
        );
    }
    for event in player_hits.read() {
        info!("Player hit! {} lives remaining", event.lives_remaining);
    }
}
