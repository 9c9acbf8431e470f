//! Combat domain: boss phase classification and per-phase tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Health ratio above which the boss is in its opening phase.
pub const PHASE2_THRESHOLD: f32 = 0.6;
/// Health ratio at or below which the boss is enraged.
pub const ENRAGED_THRESHOLD: f32 = 0.3;

/// Coarse difficulty tier of the boss, derived from remaining health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Phase1,
    Phase2,
    Enraged,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Phase1 => "Phase I",
            Phase::Phase2 => "Phase II",
            Phase::Enraged => "Enraged",
        }
    }
}

/// Classify a health ratio (`hp / max_hp`). Lower bounds are inclusive:
/// exactly 0.6 is Phase2 and exactly 0.3 is Enraged.
pub fn classify_phase(health_ratio: f32) -> Phase {
    if health_ratio > PHASE2_THRESHOLD {
        Phase::Phase1
    } else if health_ratio > ENRAGED_THRESHOLD {
        Phase::Phase2
    } else {
        Phase::Enraged
    }
}

/// Timings and volley parameters for one phase.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhaseProfile {
    /// Seconds spent idling before a telegraph
    pub idle: f32,
    /// Seconds of warning before the attack fires
    pub telegraph: f32,
    /// Seconds of rest after a volley
    pub cooldown: f32,
    pub radial_count: u32,
    pub radial_speed: f32,
    pub cone_speed: f32,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhaseTable {
    pub phase1: PhaseProfile,
    pub phase2: PhaseProfile,
    pub enraged: PhaseProfile,
    /// Degrees the radial ring turns before each radial volley
    pub radial_rotation_step: f32,
    pub cone_count: u32,
    /// Total cone arc in degrees
    pub cone_spread: f32,
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self {
            phase1: PhaseProfile {
                idle: 1.2,
                telegraph: 0.7,
                cooldown: 0.9,
                radial_count: 6,
                radial_speed: 220.0,
                cone_speed: 240.0,
            },
            phase2: PhaseProfile {
                idle: 0.9,
                telegraph: 0.6,
                cooldown: 0.7,
                radial_count: 10,
                radial_speed: 300.0,
                cone_speed: 340.0,
            },
            enraged: PhaseProfile {
                idle: 0.6,
                telegraph: 0.5,
                cooldown: 0.6,
                radial_count: 16,
                radial_speed: 380.0,
                cone_speed: 420.0,
            },
            radial_rotation_step: 12.0,
            cone_count: 5,
            cone_spread: 35.0,
        }
    }
}

impl PhaseTable {
    pub fn profile(&self, phase: Phase) -> &PhaseProfile {
        match phase {
            Phase::Phase1 => &self.phase1,
            Phase::Phase2 => &self.phase2,
            Phase::Enraged => &self.enraged,
        }
    }
}
