//! UI domain: game-over overlay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{EncounterOverEvent, EncounterRestartedEvent};

/// Marker for the game-over overlay
#[derive(Component)]
pub struct GameOverUI;

pub(crate) fn show_game_over(
    mut commands: Commands,
    mut over_events: MessageReader<EncounterOverEvent>,
    existing: Query<(), With<GameOverUI>>,
) {
    let Some(event) = over_events.read().last() else {
        return;
    };
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            GameOverUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.2, 0.2)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("Survived {:.1}s", event.elapsed)),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press R to restart"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
        });
}

pub(crate) fn hide_game_over(
    mut commands: Commands,
    mut restarted: MessageReader<EncounterRestartedEvent>,
    overlay: Query<Entity, With<GameOverUI>>,
) {
    if restarted.read().last().is_none() {
        return;
    }
    for entity in &overlay {
        commands.entity(entity).despawn();
    }
}
