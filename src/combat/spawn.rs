//! Combat domain: boss and projectile spawning helpers.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::components::{Boss, BossAI, Health, Projectile, Team};
use crate::combat::patterns::ProjectileSpawn;
use crate::combat::resources::{BossTuning, ProjectileTuning};
use crate::core::{CollisionBox, EncounterEntity, EncounterRestartedEvent, Playfield};
use crate::sprites::EncounterArt;

const BOSS_Z: f32 = 1.0;
const PROJECTILE_Z: f32 = 3.0;

/// Tint applied to player shots so they read apart from boss bullets
const FRIENDLY_TINT: Color = Color::srgb(0.6, 0.9, 1.0);

/// Bundle for the encounter's single boss
#[derive(Bundle)]
pub struct BossBundle {
    pub boss: Boss,
    pub encounter: EncounterEntity,
    pub health: Health,
    pub ai: BossAI,
    pub collider: CollisionBox,
    pub sprite: Sprite,
    pub transform: Transform,
}

impl BossBundle {
    pub fn new(tuning: &BossTuning, playfield: &Playfield, art: &EncounterArt) -> Self {
        let position = Vec2::new(
            playfield.width() * tuning.spawn_x,
            playfield.height() * tuning.spawn_y,
        );
        let size = Vec2::new(tuning.width, tuning.height);

        Self {
            boss: Boss,
            encounter: EncounterEntity,
            health: Health::new(tuning.max_hp),
            ai: BossAI::default(),
            collider: CollisionBox { size },
            sprite: Sprite {
                image: art.boss.clone(),
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_translation(position.extend(BOSS_Z)),
        }
    }
}

pub(crate) fn spawn_initial_boss(
    mut commands: Commands,
    tuning: Res<BossTuning>,
    playfield: Res<Playfield>,
    art: Res<EncounterArt>,
) {
    let entity = commands
        .spawn(BossBundle::new(&tuning, &playfield, &art))
        .id();
    debug!("Spawned boss {:?} with {} hp", entity, tuning.max_hp);
}

pub(crate) fn respawn_boss_on_restart(
    mut commands: Commands,
    mut restarted: MessageReader<EncounterRestartedEvent>,
    tuning: Res<BossTuning>,
    playfield: Res<Playfield>,
    art: Res<EncounterArt>,
) {
    if restarted.read().last().is_none() {
        return;
    }
    commands.spawn(BossBundle::new(&tuning, &playfield, &art));
}

/// Spawn one live projectile. The sprite handle comes from `art`, never from global state.
pub fn spawn_projectile(
    commands: &mut Commands,
    spawn: ProjectileSpawn,
    team: Team,
    tuning: &ProjectileTuning,
    art: &EncounterArt,
) -> Entity {
    let size = Vec2::new(tuning.width, tuning.height);
    let color = match team {
        Team::Player => FRIENDLY_TINT,
        Team::Enemy => Color::WHITE,
    };

    commands
        .spawn((
            Projectile::new(spawn.velocity, team),
            EncounterEntity,
            CollisionBox::new(tuning.width, tuning.height),
            Sprite {
                image: art.projectile.clone(),
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(spawn.origin.extend(PROJECTILE_Z))
                .with_rotation(Quat::from_rotation_z(spawn.velocity.to_angle())),
        ))
        .id()
}
