//! Sanity checks for loaded encounter tuning.

use super::data::{EncounterDefaults, SCHEMA_VERSION};
use crate::combat::PhaseProfile;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Spawn points are fractions of the playfield size
fn fraction(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Push an error when `$cond` does not hold
macro_rules! check {
    ($errors:expr, $cond:expr, $section:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

fn validate_profile(errors: &mut Vec<ValidationError>, section: &'static str, profile: &PhaseProfile) {
    check!(errors, non_negative(profile.idle), section, "idle", "must not be negative, got {}", profile.idle);
    check!(
        errors,
        non_negative(profile.telegraph),
        section,
        "telegraph",
        "must not be negative, got {}",
        profile.telegraph
    );
    check!(
        errors,
        non_negative(profile.cooldown),
        section,
        "cooldown",
        "must not be negative, got {}",
        profile.cooldown
    );
    check!(errors, profile.radial_count > 0, section, "radial_count", "must be at least 1");
    check!(
        errors,
        positive(profile.radial_speed),
        section,
        "radial_speed",
        "must be positive, got {}",
        profile.radial_speed
    );
    check!(
        errors,
        positive(profile.cone_speed),
        section,
        "cone_speed",
        "must be positive, got {}",
        profile.cone_speed
    );
}

/// Validate every section of the encounter defaults.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_defaults(defaults: &EncounterDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        defaults.schema_version == SCHEMA_VERSION,
        "encounter",
        "schema_version",
        "expected {}, got {}",
        SCHEMA_VERSION,
        defaults.schema_version
    );

    let playfield = &defaults.playfield;
    check!(errors, playfield.width > 0, "playfield", "width", "must be positive");
    check!(errors, playfield.height > 0, "playfield", "height", "must be positive");

    let player = &defaults.player;
    check!(errors, positive(player.speed), "player", "speed", "must be positive, got {}", player.speed);
    check!(
        errors,
        positive(player.width) && positive(player.height),
        "player",
        "size",
        "must be positive, got {}x{}",
        player.width,
        player.height
    );
    check!(errors, player.max_lives > 0, "player", "max_lives", "must be at least 1");
    check!(
        errors,
        non_negative(player.invulnerability_window),
        "player",
        "invulnerability_window",
        "must not be negative"
    );
    check!(errors, non_negative(player.fire_cooldown), "player", "fire_cooldown", "must not be negative");
    check!(errors, positive(player.shot_speed), "player", "shot_speed", "must be positive");
    check!(
        errors,
        non_negative(player.edge_margin),
        "player",
        "edge_margin",
        "must be finite and not negative, got {}",
        player.edge_margin
    );
    check!(errors, fraction(player.spawn_x), "player", "spawn_x", "must be in [0, 1], got {}", player.spawn_x);
    check!(errors, fraction(player.spawn_y), "player", "spawn_y", "must be in [0, 1], got {}", player.spawn_y);

    let boss = &defaults.boss;
    check!(errors, positive(boss.max_hp), "boss", "max_hp", "must be positive, got {}", boss.max_hp);
    check!(
        errors,
        positive(boss.width) && positive(boss.height),
        "boss",
        "size",
        "must be positive, got {}x{}",
        boss.width,
        boss.height
    );
    check!(errors, fraction(boss.spawn_x), "boss", "spawn_x", "must be in [0, 1], got {}", boss.spawn_x);
    check!(errors, fraction(boss.spawn_y), "boss", "spawn_y", "must be in [0, 1], got {}", boss.spawn_y);
    check!(
        errors,
        boss.bob_amplitude.is_finite(),
        "boss",
        "bob_amplitude",
        "must be finite, got {}",
        boss.bob_amplitude
    );
    check!(
        errors,
        boss.bob_frequency.is_finite(),
        "boss",
        "bob_frequency",
        "must be finite, got {}",
        boss.bob_frequency
    );

    let projectiles = &defaults.projectiles;
    check!(
        errors,
        positive(projectiles.width) && positive(projectiles.height),
        "projectiles",
        "size",
        "must be positive, got {}x{}",
        projectiles.width,
        projectiles.height
    );
    check!(errors, non_negative(projectiles.cull_margin), "projectiles", "cull_margin", "must not be negative");
    check!(errors, positive(projectiles.shot_damage), "projectiles", "shot_damage", "must be positive");

    let phases = &defaults.phases;
    validate_profile(&mut errors, "phases.phase1", &phases.phase1);
    validate_profile(&mut errors, "phases.phase2", &phases.phase2);
    validate_profile(&mut errors, "phases.enraged", &phases.enraged);
    check!(
        errors,
        phases.radial_rotation_step.is_finite(),
        "phases",
        "radial_rotation_step",
        "must be finite, got {}",
        phases.radial_rotation_step
    );
    check!(errors, phases.cone_count > 0, "phases", "cone_count", "must be at least 1");
    check!(errors, non_negative(phases.cone_spread), "phases", "cone_spread", "must not be negative");

    errors
}
