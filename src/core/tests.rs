//! Core domain: tests for encounter loop ordering, restart, and game over.

use std::time::Duration;

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;

use crate::combat::{
    Boss, BossAI, BossState, BossTuning, CombatPlugin, Health, Phase, Projectile, Team,
};
use crate::core::{
    CollisionBox, CorePlugin, EncounterClock, EncounterStatus, Playfield, boxes_overlap,
};
use crate::movement::{Invulnerable, Lives, MovementPlugin, Player};
use crate::sprites::EncounterArt;

/// Headless encounter: no window, no renderer, time driven by hand.
/// The boss bob is disabled so its position is fixed.
pub(crate) fn encounter_app() -> App {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<Time>()
        .init_resource::<EncounterArt>()
        .insert_resource(BossTuning {
            bob_amplitude: 0.0,
            ..default()
        })
        .add_plugins((CorePlugin, MovementPlugin, CombatPlugin));
    app
}

pub(crate) fn step(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.update();
}

pub(crate) fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

pub(crate) fn release_all(app: &mut App) {
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release_all();
    input.clear();
}

pub(crate) fn single_entity<F: QueryFilter>(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query
        .single(app.world())
        .expect("exactly one matching entity")
}

pub(crate) fn count<F: QueryFilter>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<(), F>();
    query.iter(app.world()).count()
}

pub(crate) fn projectiles_of(app: &mut App, team: Team) -> usize {
    let mut query = app.world_mut().query::<&Projectile>();
    query
        .iter(app.world())
        .filter(|p| p.alive && p.team == team)
        .count()
}

/// Drop a motionless projectile straight onto `target`.
pub(crate) fn place_projectile(app: &mut App, team: Team, target: Entity) -> Entity {
    let position = app
        .world()
        .get::<Transform>(target)
        .expect("target has a transform")
        .translation;
    app.world_mut()
        .spawn((
            Projectile::new(Vec2::ZERO, team),
            CollisionBox::new(10.0, 10.0),
            Transform::from_translation(position),
        ))
        .id()
}

fn force_game_over(app: &mut App) {
    let player = single_entity::<With<Player>>(app);
    app.world_mut()
        .get_mut::<Lives>(player)
        .expect("player has lives")
        .current = 0;
    step(app, 0.25);
    assert!(app.world().resource::<EncounterStatus>().game_over);
}

#[test]
fn playfield_rejects_degenerate_dimensions() {
    assert!(Playfield::new(0.0, 720.0).is_err());
    assert!(Playfield::new(1280.0, -1.0).is_err());
    assert!(Playfield::new(f32::NAN, 720.0).is_err());
    assert!(Playfield::new(800.0, 600.0).is_ok());
}

#[test]
fn clamp_inset_keeps_margin_from_every_edge() {
    let playfield = Playfield::default();
    assert_eq!(
        playfield.clamp_inset(Vec2::new(-500.0, 5000.0), 64.0),
        Vec2::new(64.0, 720.0 - 64.0)
    );
    assert_eq!(
        playfield.clamp_inset(Vec2::new(640.0, 360.0), 64.0),
        Vec2::new(640.0, 360.0)
    );
}

#[test]
fn cull_margin_is_exclusive() {
    let playfield = Playfield::default();
    assert!(!playfield.is_outside(Vec2::new(-50.0, 360.0), 50.0));
    assert!(playfield.is_outside(Vec2::new(-50.5, 360.0), 50.0));
    assert!(playfield.is_outside(Vec2::new(640.0, 770.5), 50.0));
}

#[test]
fn non_finite_positions_are_always_culled() {
    let playfield = Playfield::default();
    assert!(playfield.is_outside(Vec2::new(f32::NAN, 360.0), 50.0));
    assert!(playfield.is_outside(Vec2::new(640.0, f32::NAN), 50.0));
    assert!(playfield.is_outside(Vec2::new(f32::INFINITY, 360.0), 50.0));
}

#[test]
fn overlap_is_symmetric_and_touching_edges_miss() {
    let bullet = CollisionBox::new(10.0, 10.0);
    let boss = CollisionBox::new(80.0, 80.0);
    let boss_pos = Vec2::new(960.0, 360.0);

    let inside = Vec2::new(1000.0, 360.0);
    assert!(boxes_overlap(inside, &bullet, boss_pos, &boss));
    assert!(boxes_overlap(boss_pos, &boss, inside, &bullet));

    // Edges exactly touching: 45 units apart with half-extents 5 + 40
    let touching = Vec2::new(1005.0, 360.0);
    assert!(!boxes_overlap(touching, &bullet, boss_pos, &boss));
    assert!(!boxes_overlap(boss_pos, &boss, touching, &bullet));
}

#[test]
fn encounter_starts_with_one_player_and_one_boss() {
    let mut app = encounter_app();
    step(&mut app, 0.25);

    assert_eq!(count::<With<Player>>(&mut app), 1);
    assert_eq!(count::<With<Boss>>(&mut app), 1);
    assert_eq!(app.world().resource::<EncounterClock>().elapsed, 0.25);

    let boss = single_entity::<With<Boss>>(&mut app);
    let pos = app.world().get::<Transform>(boss).map(|t| t.translation);
    assert_eq!(pos, Some(Vec3::new(960.0, 360.0, 1.0)));
}

#[test]
fn friendly_hit_deals_five_damage_once() {
    let mut app = encounter_app();
    step(&mut app, 0.25);

    let boss = single_entity::<With<Boss>>(&mut app);
    place_projectile(&mut app, Team::Player, boss);

    step(&mut app, 0.25);
    assert_eq!(app.world().get::<Health>(boss).map(|h| h.current), Some(95.0));

    step(&mut app, 0.25);
    step(&mut app, 0.25);
    assert_eq!(app.world().get::<Health>(boss).map(|h| h.current), Some(95.0));
    assert_eq!(projectiles_of(&mut app, Team::Player), 0);
}

#[test]
fn enemy_projectiles_never_hurt_the_boss() {
    let mut app = encounter_app();
    step(&mut app, 0.25);

    let boss = single_entity::<With<Boss>>(&mut app);
    place_projectile(&mut app, Team::Enemy, boss);
    step(&mut app, 0.25);

    assert_eq!(app.world().get::<Health>(boss).map(|h| h.current), Some(100.0));
    assert_eq!(projectiles_of(&mut app, Team::Enemy), 1);
}

#[test]
fn game_over_freezes_the_simulation() {
    let mut app = encounter_app();
    step(&mut app, 0.25);
    force_game_over(&mut app);

    let boss = single_entity::<With<Boss>>(&mut app);
    let timer_before = app.world().get::<BossAI>(boss).map(|ai| ai.state_timer);
    let clock_before = app.world().resource::<EncounterClock>().elapsed;
    let drifting = app
        .world_mut()
        .spawn((
            Projectile::new(Vec2::new(-220.0, 0.0), Team::Enemy),
            CollisionBox::new(10.0, 10.0),
            Transform::from_xyz(640.0, 600.0, 3.0),
        ))
        .id();

    for _ in 0..8 {
        step(&mut app, 0.25);
    }

    assert_eq!(app.world().get::<BossAI>(boss).map(|ai| ai.state_timer), timer_before);
    assert_eq!(app.world().resource::<EncounterClock>().elapsed, clock_before);
    assert_eq!(
        app.world().get::<Transform>(drifting).map(|t| t.translation),
        Some(Vec3::new(640.0, 600.0, 3.0))
    );
}

#[test]
fn restart_is_ignored_while_playing() {
    let mut app = encounter_app();
    step(&mut app, 0.25);
    let player = single_entity::<With<Player>>(&mut app);

    press(&mut app, KeyCode::KeyR);
    step(&mut app, 0.25);

    assert_eq!(single_entity::<With<Player>>(&mut app), player);
    assert_eq!(app.world().resource::<EncounterClock>().elapsed, 0.5);
}

#[test]
fn restart_after_game_over_rebuilds_the_encounter() {
    let mut app = encounter_app();
    // Long enough for the first volley to be in flight
    for _ in 0..10 {
        step(&mut app, 0.25);
    }
    assert!(projectiles_of(&mut app, Team::Enemy) > 0);

    let boss = single_entity::<With<Boss>>(&mut app);
    app.world_mut()
        .get_mut::<Health>(boss)
        .expect("boss has health")
        .current = 10.0;
    force_game_over(&mut app);

    press(&mut app, KeyCode::KeyR);
    step(&mut app, 0.25);
    release_all(&mut app);

    assert!(!app.world().resource::<EncounterStatus>().game_over);
    assert_eq!(app.world().resource::<EncounterClock>().elapsed, 0.0);
    assert_eq!(count::<With<Projectile>>(&mut app), 0);

    let player = single_entity::<With<Player>>(&mut app);
    assert_eq!(app.world().get::<Lives>(player), Some(&Lives::new(3)));
    assert_eq!(app.world().get::<Invulnerable>(player).map(|i| i.timer), Some(0.0));

    let boss = single_entity::<With<Boss>>(&mut app);
    assert_eq!(app.world().get::<Health>(boss).map(|h| h.current), Some(100.0));
    let ai = app.world().get::<BossAI>(boss).expect("boss has ai");
    assert_eq!(ai.phase, Phase::Phase1);
    assert_eq!(ai.state, BossState::Idle);
    assert_eq!(ai.state_timer, 0.0);
    assert_eq!(ai.radial_offset, 0.0);
}

#[test]
fn escape_requests_exit() {
    let mut app = encounter_app();
    step(&mut app, 0.25);
    assert!(app.should_exit().is_none());

    press(&mut app, KeyCode::Escape);
    step(&mut app, 0.25);
    assert_eq!(app.should_exit(), Some(AppExit::Success));
}
