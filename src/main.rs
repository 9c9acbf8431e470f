mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod sprites;
mod ui;

use bevy::prelude::*;
use std::path::Path;

fn main() -> AppExit {
    // Tuning decides the window size, so it is loaded before the app exists
    let content = match content::ContentPlugin::load(Path::new(content::ENCOUNTER_FILE)) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to load encounter: {}", e);
            return AppExit::error();
        }
    };
    let resolution = (
        content.playfield.width() as u32,
        content.playfield.height() as u32,
    );

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Boss Fight".to_string(),
            resolution: resolution.into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        content,
        core::CorePlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        sprites::SpritesPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run()
}
