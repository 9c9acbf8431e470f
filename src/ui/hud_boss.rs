//! UI domain: boss health bar and phase label.

use bevy::prelude::*;

use crate::combat::{Boss, BossAI, Health, Phase};

const BOSS_HEALTHBAR_WIDTH: f32 = 400.0;
const BOSS_HEALTHBAR_HEIGHT: f32 = 24.0;
const BOSS_HEALTHBAR_TOP: f32 = 24.0;

/// Root of one boss health bar, tied to the boss it tracks
#[derive(Component)]
pub struct BossHealthBarUI {
    pub owner: Entity,
}

#[derive(Component)]
pub struct BossHealthBarFill;

/// Text showing the current phase and attack state
#[derive(Component)]
pub struct BossPhaseLabel;

/// Fill colour for the boss bar in each phase.
pub fn phase_bar_color(phase: Phase) -> Color {
    match phase {
        Phase::Phase1 => Color::srgb(0.2, 0.7, 0.2),
        Phase::Phase2 => Color::srgb(0.9, 0.7, 0.0),
        Phase::Enraged => Color::srgb(0.9, 0.2, 0.2),
    }
}

pub(crate) fn spawn_boss_healthbar(
    mut commands: Commands,
    boss_query: Query<Entity, Added<Boss>>,
    existing_bars: Query<&BossHealthBarUI>,
) {
    for boss_entity in &boss_query {
        if existing_bars.iter().any(|bar| bar.owner == boss_entity) {
            continue;
        }

        // Top center of the screen, label underneath the bar
        commands
            .spawn((
                BossHealthBarUI { owner: boss_entity },
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(BOSS_HEALTHBAR_TOP),
                    left: Val::Percent(50.0),
                    margin: UiRect::left(Val::Px(-BOSS_HEALTHBAR_WIDTH / 2.0)),
                    width: Val::Px(BOSS_HEALTHBAR_WIDTH),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(6.0),
                    ..default()
                },
            ))
            .with_children(|parent| {
                parent
                    .spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(BOSS_HEALTHBAR_HEIGHT),
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgba(0.05, 0.05, 0.05, 0.9)),
                        BorderColor::all(Color::srgb(0.6, 0.6, 0.6)),
                    ))
                    .with_child((
                        BossHealthBarFill,
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(phase_bar_color(Phase::Phase1)),
                    ));

                parent.spawn((
                    BossPhaseLabel,
                    Text::new("BOSS"),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));
            });
    }
}

pub(crate) fn update_boss_healthbar(
    boss_query: Query<(&Health, &BossAI), With<Boss>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<BossHealthBarFill>>,
    mut label_query: Query<&mut Text, With<BossPhaseLabel>>,
) {
    let Ok((health, ai)) = boss_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(health.percent() * 100.0);
        bg_color.0 = phase_bar_color(ai.phase);
    }

    for mut text in &mut label_query {
        text.0 = format!(
            "BOSS  {}  {:?}  {:.0}/{:.0}",
            ai.phase.label(),
            ai.state,
            health.current,
            health.max
        );
    }
}

/// Remove bars whose boss was torn down by a restart.
pub(crate) fn cleanup_boss_healthbar(
    mut commands: Commands,
    boss_query: Query<(), With<Boss>>,
    bar_query: Query<(Entity, &BossHealthBarUI)>,
) {
    for (bar_entity, bar) in &bar_query {
        if boss_query.get(bar.owner).is_err() {
            commands.entity(bar_entity).despawn();
        }
    }
}
