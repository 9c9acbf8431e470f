//! UI domain: encounter HUD and game-over overlay.

mod game_over;
mod hud_boss;
mod hud_player;

pub use hud_boss::phase_bar_color;
pub use hud_player::lives_bar_color;

use bevy::prelude::*;

use crate::core::EncounterSet;
use crate::ui::game_over::{hide_game_over, show_game_over};
use crate::ui::hud_boss::{cleanup_boss_healthbar, spawn_boss_healthbar, update_boss_healthbar};
use crate::ui::hud_player::{spawn_lives_bar_ui, update_lives_bar};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_lives_bar_ui).add_systems(
            Update,
            (
                update_lives_bar,
                spawn_boss_healthbar,
                update_boss_healthbar,
                cleanup_boss_healthbar,
                show_game_over,
                hide_game_over,
            )
                .after(EncounterSet::Outcome),
        );
    }
}
