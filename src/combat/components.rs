//! Combat domain: components and combat-related state types.

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::patterns::{AttackPattern, ProjectileSpawn, bearing, cone_volley, radial_volley};
use crate::combat::phase::{Phase, PhaseProfile, PhaseTable, classify_phase};

/// Health component for the boss
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount`, never dropping below zero. Returns the damage actually dealt.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

/// Team affiliation to prevent friendly fire
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Team {
    Player,
    Enemy,
}

/// A moving bullet. Dead projectiles are despawned before the next collision pass.
#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub velocity: Vec2,
    pub team: Team,
    pub alive: bool,
}

impl Projectile {
    pub fn new(velocity: Vec2, team: Team) -> Self {
        Self {
            velocity,
            team,
            alive: true,
        }
    }

    pub fn is_friendly(&self) -> bool {
        self.team == Team::Player
    }
}

#[derive(Component, Debug)]
pub struct Boss;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BossState {
    #[default]
    Idle,
    /// Showing attack telegraph (warning tint)
    Telegraph,
    /// Volley fires on the next tick, then straight to cooldown
    Attack,
    /// Rest period after a volley
    Cooldown,
}

/// Boss attack-cycle state machine
#[derive(Component, Debug)]
pub struct BossAI {
    pub state: BossState,
    pub state_timer: f32,
    /// Phase seen on the last tick; reclassified from health every tick
    pub phase: Phase,
    /// Radial rotation in degrees, kept folded into `[0, 360)`
    pub radial_offset: f32,
    /// Phase2 alternation memory
    pub last_pattern_was_radial: bool,
}

impl Default for BossAI {
    fn default() -> Self {
        Self {
            state: BossState::Idle,
            state_timer: 0.0,
            phase: Phase::Phase1,
            radial_offset: 0.0,
            last_pattern_was_radial: true,
        }
    }
}

/// Result of one attack: which patterns ran and the projectiles they produced.
#[derive(Debug, Clone, Default)]
pub struct Volley {
    pub patterns: Vec<AttackPattern>,
    pub projectiles: Vec<ProjectileSpawn>,
}

impl BossAI {
    /// Reclassify the phase from a health ratio. Returns the previous phase when it changed.
    pub fn update_phase(&mut self, health_ratio: f32) -> Option<Phase> {
        let phase = classify_phase(health_ratio);
        if phase == self.phase {
            return None;
        }
        let previous = self.phase;
        self.phase = phase;
        Some(previous)
    }

    /// Advance the timed cycle by `dt`. Returns true on the tick the boss leaves
    /// `Attack`, which is when its volley must be fired.
    pub fn advance(&mut self, dt: f32, profile: &PhaseProfile) -> bool {
        self.state_timer += dt;

        match self.state {
            BossState::Idle => {
                if self.state_timer >= profile.idle {
                    self.enter(BossState::Telegraph);
                }
            }
            BossState::Telegraph => {
                if self.state_timer >= profile.telegraph {
                    self.enter(BossState::Attack);
                }
            }
            BossState::Attack => {
                self.enter(BossState::Cooldown);
                return true;
            }
            BossState::Cooldown => {
                if self.state_timer >= profile.cooldown {
                    self.enter(BossState::Idle);
                }
            }
        }

        false
    }

    fn enter(&mut self, state: BossState) {
        self.state = state;
        self.state_timer = 0.0;
    }

    /// Patterns for the next attack in the current phase. Flips the Phase2
    /// alternation on every call made in Phase2.
    pub fn select_patterns(&mut self) -> &'static [AttackPattern] {
        match self.phase {
            Phase::Phase1 => &[AttackPattern::Radial],
            Phase::Phase2 => {
                let patterns: &'static [AttackPattern] = if self.last_pattern_was_radial {
                    &[AttackPattern::Cone]
                } else {
                    &[AttackPattern::Radial]
                };
                self.last_pattern_was_radial = !self.last_pattern_was_radial;
                patterns
            }
            Phase::Enraged => &[AttackPattern::Radial, AttackPattern::Cone],
        }
    }

    /// Build the projectiles of one attack. `origin` is the emission point,
    /// `boss_position` and `target` define the cone bearing.
    pub fn fire_volley(
        &mut self,
        origin: Vec2,
        boss_position: Vec2,
        target: Vec2,
        table: &PhaseTable,
    ) -> Volley {
        let profile = table.profile(self.phase);
        let mut volley = Volley::default();

        for &pattern in self.select_patterns() {
            let spawns = match pattern {
                AttackPattern::Radial => {
                    self.radial_offset =
                        (self.radial_offset + table.radial_rotation_step).rem_euclid(360.0);
                    radial_volley(
                        origin,
                        profile.radial_count,
                        profile.radial_speed,
                        self.radial_offset,
                    )
                }
                AttackPattern::Cone => cone_volley(
                    origin,
                    bearing(boss_position, target),
                    table.cone_count,
                    table.cone_spread,
                    profile.cone_speed,
                ),
            };
            volley.patterns.push(pattern);
            volley.projectiles.extend(spawns);
        }

        volley
    }
}
