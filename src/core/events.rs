//! Core domain: events for the encounter lifecycle.

use bevy::ecs::message::Message;

/// Event fired once when the player runs out of lives
#[derive(Debug)]
pub struct EncounterOverEvent {
    pub elapsed: f32,
}

impl Message for EncounterOverEvent {}

/// Event fired after the encounter entities were torn down for a fresh start.
/// Spawners listen for it to rebuild the player and the boss.
#[derive(Debug)]
pub struct EncounterRestartedEvent;

impl Message for EncounterRestartedEvent {}
