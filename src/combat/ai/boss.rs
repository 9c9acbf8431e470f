//! Combat domain: boss AI updates and volley execution.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::components::{Boss, BossAI, Health, Team};
use crate::combat::events::{BossPhaseChangeEvent, VolleyFiredEvent};
use crate::combat::phase::PhaseTable;
use crate::combat::resources::{BossTuning, ProjectileTuning};
use crate::combat::spawn::spawn_projectile;
use crate::core::{CollisionBox, EncounterClock, Playfield};
use crate::movement::Player;
use crate::sprites::EncounterArt;

/// Reclassify the phase, step the attack cycle, fire the volley on its tick,
/// then apply the vertical bob.
pub(crate) fn update_boss_ai(
    mut commands: Commands,
    time: Res<Time>,
    clock: Res<EncounterClock>,
    playfield: Res<Playfield>,
    table: Res<PhaseTable>,
    tuning: Res<BossTuning>,
    projectile_tuning: Res<ProjectileTuning>,
    art: Res<EncounterArt>,
    mut phase_events: MessageWriter<BossPhaseChangeEvent>,
    mut volley_events: MessageWriter<VolleyFiredEvent>,
    player_query: Query<&Transform, (With<Player>, Without<Boss>)>,
    mut boss_query: Query<(&mut Transform, &CollisionBox, &Health, &mut BossAI), With<Boss>>,
) {
    let dt = time.delta_secs();

    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (mut transform, collider, health, mut ai) in &mut boss_query {
        // Phase is derived from health before the state machine looks at durations
        if let Some(previous) = ai.update_phase(health.percent()) {
            phase_events.write(BossPhaseChangeEvent {
                from: previous,
                to: ai.phase,
            });
            info!(
                "Boss phase {:?} -> {:?} at {:.0}/{:.0} hp",
                previous, ai.phase, health.current, health.max
            );
        }

        let profile = table.profile(ai.phase);
        if ai.advance(dt, profile) {
            let boss_pos = transform.translation.truncate();
            let origin = boss_pos - Vec2::new(collider.half_width(), 0.0);
            let volley = ai.fire_volley(origin, boss_pos, player_pos, &table);

            for spawn in &volley.projectiles {
                spawn_projectile(&mut commands, *spawn, Team::Enemy, &projectile_tuning, &art);
            }

            volley_events.write(VolleyFiredEvent {
                phase: ai.phase,
                patterns: volley.patterns,
                projectile_count: volley.projectiles.len(),
            });
        }

        let baseline = playfield.height() * tuning.spawn_y;
        transform.translation.y =
            baseline + (clock.elapsed * tuning.bob_frequency).sin() * tuning.bob_amplitude;
    }
}
