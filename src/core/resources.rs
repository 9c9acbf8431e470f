//! Core domain: shared resources for the playfield and encounter flow.

use bevy::prelude::*;

/// Error returned when a playfield is built from unusable dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayfieldError {
    pub width: f32,
    pub height: f32,
}

impl std::fmt::Display for PlayfieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Playfield must have positive finite dimensions, got {}x{}",
            self.width, self.height
        )
    }
}

impl std::error::Error for PlayfieldError {}

/// Bounds of the arena in world units. Origin is the bottom-left corner.
/// Fixed for the lifetime of the encounter.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    width: f32,
    height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Result<Self, PlayfieldError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(PlayfieldError { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamp a point so it stays `margin` units inside every edge.
    pub fn clamp_inset(&self, point: Vec2, margin: f32) -> Vec2 {
        Vec2::new(
            point.x.clamp(margin, (self.width - margin).max(margin)),
            point.y.clamp(margin, (self.height - margin).max(margin)),
        )
    }

    /// True when the point lies beyond `margin` units outside any edge.
    /// A non-finite point is always outside.
    pub fn is_outside(&self, point: Vec2, margin: f32) -> bool {
        !point.is_finite()
            || point.x < -margin
            || point.x > self.width + margin
            || point.y < -margin
            || point.y > self.height + margin
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Terminal flag for the encounter. While set, the simulation sets are skipped.
#[derive(Resource, Debug, Default)]
pub struct EncounterStatus {
    pub game_over: bool,
}

/// Run condition: true while the encounter is still being played.
pub fn encounter_running(status: Res<EncounterStatus>) -> bool {
    !status.game_over
}

/// Simulated seconds since the encounter (re)started.
#[derive(Resource, Debug, Default)]
pub struct EncounterClock {
    pub elapsed: f32,
}

/// Per-tick snapshot of the encounter-level controls.
#[derive(Resource, Debug, Default)]
pub struct EncounterControls {
    pub restart: bool,
    pub quit: bool,
}
