//! Combat domain: combat-related events.

use bevy::ecs::message::Message;

use crate::combat::patterns::AttackPattern;
use crate::combat::phase::Phase;

#[derive(Debug)]
pub struct BossPhaseChangeEvent {
    pub from: Phase,
    pub to: Phase,
}

impl Message for BossPhaseChangeEvent {}

/// Event emitted when a player shot lands on the boss
#[derive(Debug)]
pub struct BossDamagedEvent {
    pub amount: f32,
    pub remaining: f32,
}

impl Message for BossDamagedEvent {}

/// Event emitted when a boss projectile costs the player a life
#[derive(Debug)]
pub struct PlayerHitEvent {
    pub lives_remaining: u32,
}

impl Message for PlayerHitEvent {}

#[derive(Debug)]
pub struct VolleyFiredEvent {
    pub phase: Phase,
    pub patterns: Vec<AttackPattern>,
    pub projectile_count: usize,
}

impl Message for VolleyFiredEvent {}
