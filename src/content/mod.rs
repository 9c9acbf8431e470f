//! Content domain: encounter tuning loaded from RON and validated before the app starts.

mod data;
mod loader;
mod validation;

pub use data::{EncounterDefaults, PlayfieldDef, SCHEMA_VERSION};
pub use loader::{ContentLoadError, load_encounter_defaults, parse_single};
pub use validation::{ValidationError, validate_defaults};

use bevy::prelude::*;
use std::path::Path;

use crate::core::{Playfield, PlayfieldError};

pub const ENCOUNTER_FILE: &str = "assets/data/encounter.ron";

/// Anything that stops the encounter from starting.
#[derive(Debug)]
pub enum ContentError {
    Load(ContentLoadError),
    Invalid(Vec<ValidationError>),
    Playfield(PlayfieldError),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Load(e) => write!(f, "{}", e),
            ContentError::Invalid(errors) => {
                write!(f, "{} validation error(s)", errors.len())?;
                for e in errors {
                    write!(f, "\n  - {}", e)?;
                }
                Ok(())
            }
            ContentError::Playfield(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ContentError {}

/// Validated tuning for one encounter. Inserting it overrides the domain
/// plugins' built-in defaults.
pub struct ContentPlugin {
    pub defaults: EncounterDefaults,
    pub playfield: Playfield,
}

impl ContentPlugin {
    /// Load, validate, and build the playfield in one go.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let defaults = load_encounter_defaults(path).map_err(ContentError::Load)?;
        Self::from_defaults(defaults)
    }

    pub fn from_defaults(defaults: EncounterDefaults) -> Result<Self, ContentError> {
        let errors = validate_defaults(&defaults);
        if !errors.is_empty() {
            return Err(ContentError::Invalid(errors));
        }
        let playfield = defaults
            .playfield
            .to_playfield()
            .map_err(ContentError::Playfield)?;
        Ok(Self {
            defaults,
            playfield,
        })
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let defaults = self.defaults.clone();
        info!(
            "Encounter tuning: {}x{} playfield, boss {} hp, player {} lives",
            self.playfield.width(),
            self.playfield.height(),
            defaults.boss.max_hp,
            defaults.player.max_lives
        );
        app.insert_resource(self.playfield)
            .insert_resource(defaults.player)
            .insert_resource(defaults.boss)
            .insert_resource(defaults.projectiles)
            .insert_resource(defaults.phases);
    }
}
