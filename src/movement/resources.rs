//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub max_lives: u32,
    /// Seconds of invulnerability after losing a life
    pub invulnerability_window: f32,
    /// Seconds between shots
    pub fire_cooldown: f32,
    pub shot_speed: f32,
    /// Distance kept from every playfield edge
    pub edge_margin: f32,
    /// Spawn point as fractions of the playfield size
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 400.0,
            width: 40.0,
            height: 40.0,
            max_lives: 3,
            invulnerability_window: 1.0,
            fire_cooldown: 0.25,
            shot_speed: 600.0,
            edge_margin: 64.0,
            spawn_x: 0.25,
            spawn_y: 0.5,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub fire: bool,
}
