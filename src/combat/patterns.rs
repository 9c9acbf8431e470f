//! Combat domain: bullet pattern generators for boss volleys.

use bevy::prelude::*;
use serde::Serialize;

/// One projectile to be spawned: where it starts and how fast it travels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawn {
    pub origin: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttackPattern {
    /// Evenly spaced ring around the boss
    Radial,
    /// Fan aimed at the player
    Cone,
}

/// Angle in radians from `from` to `to`. Colocated points give 0.
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// `count` projectiles spaced `360 / count` degrees apart, starting at `offset_deg`.
pub fn radial_volley(origin: Vec2, count: u32, speed: f32, offset_deg: f32) -> Vec<ProjectileSpawn> {
    if count == 0 {
        return Vec::new();
    }

    // Callers may pass any offset, including negative ones
    let base = offset_deg.rem_euclid(360.0);
    let step = 360.0 / count as f32;

    (0..count)
        .map(|i| {
            let angle = (base + step * i as f32).to_radians();
            ProjectileSpawn {
                origin,
                velocity: Vec2::from_angle(angle) * speed,
            }
        })
        .collect()
}

/// `count` projectiles spread evenly across `spread_deg`, centred on `bearing` (radians).
pub fn cone_volley(
    origin: Vec2,
    bearing: f32,
    count: u32,
    spread_deg: f32,
    speed: f32,
) -> Vec<ProjectileSpawn> {
    let spread = spread_deg.to_radians();

    (0..count)
        .map(|i| {
            let t = if count <= 1 {
                0.0
            } else {
                i as f32 / (count - 1) as f32
            };
            let angle = bearing - spread / 2.0 + spread * t;
            ProjectileSpawn {
                origin,
                velocity: Vec2::from_angle(angle) * speed,
            }
        })
        .collect()
}
