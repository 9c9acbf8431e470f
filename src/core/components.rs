//! Core domain: components shared by every encounter participant.

use bevy::prelude::*;

/// Marks entities that belong to the running encounter and are torn down on restart.
#[derive(Component, Debug, Default)]
pub struct EncounterEntity;

/// Axis-aligned collision box, stored as full width and height and centred on the
/// entity's translation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    pub size: Vec2,
}

impl CollisionBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn half_width(&self) -> f32 {
        self.size.x * 0.5
    }
}

/// Overlap test used for every projectile hit: on both axes the doubled distance
/// between centres must be smaller than the summed extents.
pub fn boxes_overlap(a_pos: Vec2, a: &CollisionBox, b_pos: Vec2, b: &CollisionBox) -> bool {
    let delta = (a_pos - b_pos).abs() * 2.0;
    let extents = a.size + b.size;
    delta.x < extents.x && delta.y < extents.y
}
