//! Debug domain: toggles and the serialisable encounter snapshot.

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::{BossState, Phase};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether player is invincible
    pub invincible: bool,
}

/// Point-in-time view of the encounter, logged as JSON on demand.
#[derive(Debug, Clone, Serialize)]
pub struct EncounterSnapshot {
    pub elapsed: f32,
    pub game_over: bool,
    pub boss: Option<BossSnapshot>,
    pub player: Option<PlayerSnapshot>,
    pub projectiles: ProjectileCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct BossSnapshot {
    pub hp: f32,
    pub max_hp: f32,
    pub phase: Phase,
    pub state: BossState,
    pub radial_offset: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub position: [f32; 2],
    pub lives: u32,
    pub max_lives: u32,
    pub invulnerable: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectileCounts {
    pub friendly: usize,
    pub hostile: usize,
}
