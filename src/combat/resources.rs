//! Combat domain: tuning resources for the boss and projectiles.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BossTuning {
    pub max_hp: f32,
    pub width: f32,
    pub height: f32,
    /// Spawn point as fractions of the playfield size
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Vertical bob around the spawn height; 0 pins the boss in place
    pub bob_amplitude: f32,
    /// Bob angular speed in radians per second
    pub bob_frequency: f32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_hp: 100.0,
            width: 80.0,
            height: 80.0,
            spawn_x: 0.75,
            spawn_y: 0.5,
            bob_amplitude: 100.0,
            bob_frequency: 1.2,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub width: f32,
    pub height: f32,
    /// Distance past the playfield edge at which a projectile expires
    pub cull_margin: f32,
    /// Damage dealt to the boss by one player shot
    pub shot_damage: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            cull_margin: 50.0,
            shot_damage: 5.0,
        }
    }
}
