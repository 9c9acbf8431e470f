//! UI domain: player lives bar.

use bevy::prelude::*;

use crate::movement::{Lives, Player};

pub(crate) const LIVES_BAR_WIDTH: f32 = 200.0;
pub(crate) const LIVES_BAR_HEIGHT: f32 = 20.0;
pub(crate) const LIVES_BAR_PADDING: f32 = 16.0;

#[derive(Component)]
pub struct LivesBarUI;

#[derive(Component)]
pub struct LivesBarFill;

#[derive(Component)]
pub struct LivesLabel;

/// Green above two thirds, yellow above one third, red below.
pub fn lives_bar_color(ratio: f32) -> Color {
    if ratio > 0.66 {
        Color::srgb(0.2, 0.8, 0.3)
    } else if ratio > 0.33 {
        Color::srgb(0.9, 0.8, 0.2)
    } else {
        Color::srgb(0.9, 0.2, 0.2)
    }
}

pub(crate) fn spawn_lives_bar_ui(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            LivesBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(LIVES_BAR_PADDING),
                top: Val::Px(LIVES_BAR_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                LivesLabel,
                Text::new("Lives"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));

            parent
                .spawn((
                    Node {
                        width: Val::Px(LIVES_BAR_WIDTH),
                        height: Val::Px(LIVES_BAR_HEIGHT),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ))
                .with_child((
                    LivesBarFill,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(lives_bar_color(1.0)),
                ));
        });
}

pub(crate) fn update_lives_bar(
    player_query: Query<&Lives, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<LivesBarFill>>,
    mut label_query: Query<&mut Text, With<LivesLabel>>,
) {
    let Ok(lives) = player_query.single() else {
        return;
    };

    let ratio = lives.ratio();
    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(ratio * 100.0);
        bg_color.0 = lives_bar_color(ratio);
    }
    for mut text in &mut label_query {
        text.0 = format!("Lives {}/{}", lives.current, lives.max);
    }
}
