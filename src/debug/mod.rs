//! Debug tooling for fast iteration on the encounter.
//!
//! Features:
//! - Toggle invincibility (Ctrl+I)
//! - Jump the boss between phases by setting its hp (Ctrl+1/2/3)
//! - Log a JSON snapshot of the encounter (F3)

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::EncounterSet;
use crate::debug::systems::{apply_invincibility, handle_debug_hotkeys, log_snapshot};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (handle_debug_hotkeys, apply_invincibility)
                    .chain()
                    .in_set(EncounterSet::Input),
            )
            .add_systems(Update, log_snapshot.after(EncounterSet::Outcome));
    }
}
