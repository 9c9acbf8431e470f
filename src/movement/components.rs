//! Movement domain: player components for lives, invulnerability, and fire control.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Remaining lives. Only ever decreases during an encounter.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Lives {
    pub current: u32,
    pub max: u32,
}

impl Lives {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_exhausted(&self) -> bool {
        self.current == 0
    }

    /// Fraction of lives left, for the HUD
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }

    /// Apply one hit unless the invulnerability window is still open.
    /// Opens a fresh window of `window` seconds and returns true when a life was lost.
    pub fn take_hit(&mut self, invulnerable: &mut Invulnerable, window: f32) -> bool {
        if invulnerable.is_invulnerable() {
            return false;
        }
        self.current = self.current.saturating_sub(1);
        invulnerable.timer = window;
        true
    }
}

/// Invulnerability frames - entity cannot take hits
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }

    pub fn tick(&mut self, dt: f32) {
        self.timer = (self.timer - dt).max(0.0);
    }
}

/// Shot cooldown for the player's blaster
#[derive(Component, Debug, Default)]
pub struct FireControl {
    pub cooldown_timer: f32,
}

impl FireControl {
    pub fn tick(&mut self, dt: f32) {
        self.cooldown_timer = (self.cooldown_timer - dt).max(0.0);
    }

    /// Consume the trigger if the cooldown has elapsed.
    pub fn try_fire(&mut self, cooldown: f32) -> bool {
        if self.cooldown_timer > 0.0 {
            return false;
        }
        self.cooldown_timer = cooldown;
        true
    }
}
