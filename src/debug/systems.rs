//! Debug domain: hotkeys, invincibility, and snapshot logging.

use bevy::prelude::*;

use crate::combat::{Boss, BossAI, Health, Projectile};
use crate::core::{EncounterClock, EncounterStatus};
use crate::debug::state::{
    BossSnapshot, DebugState, EncounterSnapshot, PlayerSnapshot, ProjectileCounts,
};
use crate::movement::{Invulnerable, Lives, Player, PlayerTuning};

/// Boss hp fractions bound to Ctrl+1, Ctrl+2, Ctrl+3
const HP_PRESETS: [(KeyCode, f32); 3] = [
    (KeyCode::Digit1, 1.0),
    (KeyCode::Digit2, 0.5),
    (KeyCode::Digit3, 0.2),
];

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut boss_query: Query<&mut Health, With<Boss>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+I: Toggle invincibility
    if keyboard.just_pressed(KeyCode::KeyI) {
        debug_state.invincible = !debug_state.invincible;
        let msg = if debug_state.invincible {
            "Invincibility ON"
        } else {
            "Invincibility OFF"
        };
        info!("[DEBUG] {}", msg);
    }

    // Ctrl+1/2/3: jump the boss to a phase by rewriting its hp
    for (key, fraction) in HP_PRESETS {
        if !keyboard.just_pressed(key) {
            continue;
        }
        for mut health in &mut boss_query {
            health.current = health.max * fraction;
            info!("[DEBUG] Boss hp set to {:.0}/{:.0}", health.current, health.max);
        }
    }
}

/// Keep the player's invulnerability window open while invincible
pub(crate) fn apply_invincibility(
    debug_state: Res<DebugState>,
    tuning: Res<PlayerTuning>,
    mut player_query: Query<&mut Invulnerable, With<Player>>,
) {
    if !debug_state.invincible {
        return;
    }

    for mut invuln in &mut player_query {
        invuln.timer = invuln.timer.max(tuning.invulnerability_window.max(1.0));
    }
}

pub(crate) fn build_snapshot(
    clock: &EncounterClock,
    status: &EncounterStatus,
    boss: Option<(&Health, &BossAI)>,
    player: Option<(&Transform, &Lives, &Invulnerable)>,
    projectiles: impl Iterator<Item = bool>,
) -> EncounterSnapshot {
    let mut counts = ProjectileCounts::default();
    for friendly in projectiles {
        if friendly {
            counts.friendly += 1;
        } else {
            counts.hostile += 1;
        }
    }

    EncounterSnapshot {
        elapsed: clock.elapsed,
        game_over: status.game_over,
        boss: boss.map(|(health, ai)| BossSnapshot {
            hp: health.current,
            max_hp: health.max,
            phase: ai.phase,
            state: ai.state,
            radial_offset: ai.radial_offset,
        }),
        player: player.map(|(transform, lives, invuln)| PlayerSnapshot {
            position: [transform.translation.x, transform.translation.y],
            lives: lives.current,
            max_lives: lives.max,
            invulnerable: invuln.is_invulnerable(),
        }),
        projectiles: counts,
    }
}

/// F3: log the encounter state as JSON
pub(crate) fn log_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    clock: Res<EncounterClock>,
    status: Res<EncounterStatus>,
    boss_query: Query<(&Health, &BossAI), With<Boss>>,
    player_query: Query<(&Transform, &Lives, &Invulnerable), With<Player>>,
    projectile_query: Query<&Projectile>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    let snapshot = build_snapshot(
        &clock,
        &status,
        boss_query.single().ok(),
        player_query.single().ok(),
        projectile_query
            .iter()
            .filter(|p| p.alive)
            .map(|p| p.is_friendly()),
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => info!("[DEBUG] Encounter snapshot:\n{}", json),
        Err(e) => error!("[DEBUG] Failed to serialise snapshot: {}", e),
    }
}
