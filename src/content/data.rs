use serde::{Deserialize, Serialize};

use crate::combat::{BossTuning, PhaseTable, ProjectileTuning};
use crate::core::{Playfield, PlayfieldError};
use crate::movement::PlayerTuning;

/// Schema version this build understands.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayfieldDef {
    pub width: u32,
    pub height: u32,
}

impl Default for PlayfieldDef {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl PlayfieldDef {
    pub fn to_playfield(&self) -> Result<Playfield, PlayfieldError> {
        Playfield::new(self.width as f32, self.height as f32)
    }
}

/// Everything tunable about one encounter, loaded from `encounter.ron`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EncounterDefaults {
    pub schema_version: u32,
    pub playfield: PlayfieldDef,
    pub player: PlayerTuning,
    pub boss: BossTuning,
    pub projectiles: ProjectileTuning,
    pub phases: PhaseTable,
}

impl Default for EncounterDefaults {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            playfield: PlayfieldDef::default(),
            player: PlayerTuning::default(),
            boss: BossTuning::default(),
            projectiles: ProjectileTuning::default(),
            phases: PhaseTable::default(),
        }
    }
}
