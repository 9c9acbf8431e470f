//! Combat domain: boss AI, bullet patterns, projectiles, and hit resolution.

mod ai;
mod components;
mod events;
mod patterns;
mod phase;
mod resources;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Boss, BossAI, BossState, Health, Projectile, Team, Volley};
pub use events::{BossDamagedEvent, BossPhaseChangeEvent, PlayerHitEvent, VolleyFiredEvent};
pub use patterns::{AttackPattern, ProjectileSpawn, bearing, cone_volley, radial_volley};
pub use phase::{Phase, PhaseProfile, PhaseTable, classify_phase};
pub use resources::{BossTuning, ProjectileTuning};
pub use spawn::{BossBundle, spawn_projectile};

use bevy::prelude::*;

use crate::combat::ai::update_boss_ai;
use crate::combat::spawn::{respawn_boss_on_restart, spawn_initial_boss};
use crate::combat::systems::{
    advance_projectiles, despawn_dead_projectiles, log_combat_events, resolve_projectile_hits,
};
use crate::core::EncounterSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BossTuning>()
            .init_resource::<ProjectileTuning>()
            .init_resource::<PhaseTable>()
            .add_message::<BossPhaseChangeEvent>()
            .add_message::<BossDamagedEvent>()
            .add_message::<PlayerHitEvent>()
            .add_message::<VolleyFiredEvent>()
            .add_systems(Startup, spawn_initial_boss)
            .add_systems(Update, update_boss_ai.in_set(EncounterSet::Boss))
            .add_systems(
                Update,
                (advance_projectiles, despawn_dead_projectiles)
                    .chain()
                    .in_set(EncounterSet::Projectiles),
            )
            .add_systems(
                Update,
                resolve_projectile_hits.in_set(EncounterSet::Collisions),
            )
            .add_systems(Update, respawn_boss_on_restart.in_set(EncounterSet::Spawn))
            .add_systems(Update, log_combat_events.in_set(EncounterSet::Outcome));
    }
}
