//! Combat domain: tests for phases, the attack cycle, and bullet patterns.

use bevy::prelude::*;

use crate::combat::{
    AttackPattern, Boss, BossAI, BossState, Health, Phase, PhaseTable, Team, bearing,
    classify_phase, cone_volley, radial_volley,
};
use crate::core::tests::{encounter_app, projectiles_of, single_entity, step};

const EPS: f32 = 1e-4;

fn angle_deg(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees().rem_euclid(360.0)
}

fn angle_between_deg(a: Vec2, b: Vec2) -> f32 {
    a.angle_to(b).to_degrees().abs()
}

/// Tick the cycle until it reports a volley, returning the number of ticks taken.
fn ticks_until_volley(ai: &mut BossAI, table: &PhaseTable, dt: f32) -> u32 {
    for tick in 1..1000 {
        if ai.advance(dt, table.profile(ai.phase)) {
            return tick;
        }
    }
    panic!("boss never attacked");
}

#[test]
fn phase_boundaries_are_inclusive_on_the_lower_tier() {
    assert_eq!(classify_phase(1.0), Phase::Phase1);
    assert_eq!(classify_phase(0.65), Phase::Phase1);
    assert_eq!(classify_phase(0.61), Phase::Phase1);
    assert_eq!(classify_phase(0.45), Phase::Phase2);
    assert_eq!(classify_phase(0.1), Phase::Enraged);
    assert_eq!(classify_phase(0.6), Phase::Phase2);
    assert_eq!(classify_phase(0.31), Phase::Phase2);
    assert_eq!(classify_phase(0.3), Phase::Enraged);
    assert_eq!(classify_phase(0.0), Phase::Enraged);
}

#[test]
fn phase_change_reports_the_previous_phase() {
    let mut ai = BossAI::default();
    assert_eq!(ai.update_phase(0.9), None);
    assert_eq!(ai.update_phase(0.5), Some(Phase::Phase1));
    assert_eq!(ai.phase, Phase::Phase2);
    assert_eq!(ai.update_phase(0.45), None);
    assert_eq!(ai.update_phase(0.1), Some(Phase::Phase2));
}

#[test]
fn damage_clamps_at_zero_and_never_goes_negative() {
    let mut health = Health::new(100.0);
    assert_eq!(health.take_damage(60.0), 60.0);
    assert_eq!(health.current, 40.0);
    assert_eq!(health.take_damage(150.0), 40.0);
    assert_eq!(health.current, 0.0);
    assert_eq!(health.percent(), 0.0);
}

#[test]
fn state_cycle_follows_phase1_timings() {
    let table = PhaseTable::default();
    let profile = table.profile(Phase::Phase1).clone();
    let mut ai = BossAI::default();

    // Idle 1.2s at 0.25 per tick: leaves on the fifth tick
    for _ in 0..4 {
        assert!(!ai.advance(0.25, &profile));
        assert_eq!(ai.state, BossState::Idle);
    }
    assert!(!ai.advance(0.25, &profile));
    assert_eq!(ai.state, BossState::Telegraph);
    assert_eq!(ai.state_timer, 0.0);

    // Telegraph 0.7s: three ticks
    assert!(!ai.advance(0.25, &profile));
    assert!(!ai.advance(0.25, &profile));
    assert!(!ai.advance(0.25, &profile));
    assert_eq!(ai.state, BossState::Attack);

    // Attack dwells for exactly one tick and fires on the way out
    assert!(ai.advance(0.25, &profile));
    assert_eq!(ai.state, BossState::Cooldown);

    // Cooldown 0.9s: four ticks, then back to idle
    for _ in 0..3 {
        assert!(!ai.advance(0.25, &profile));
        assert_eq!(ai.state, BossState::Cooldown);
    }
    assert!(!ai.advance(0.25, &profile));
    assert_eq!(ai.state, BossState::Idle);
}

#[test]
fn attack_fires_even_with_a_zero_length_tick() {
    let table = PhaseTable::default();
    let mut ai = BossAI {
        state: BossState::Attack,
        ..default()
    };
    assert!(ai.advance(0.0, table.profile(Phase::Phase1)));
    assert_eq!(ai.state, BossState::Cooldown);
}

#[test]
fn radial_volley_is_evenly_spaced_from_offset() {
    let volley = radial_volley(Vec2::ZERO, 6, 220.0, 12.0);
    assert_eq!(volley.len(), 6);

    for (i, spawn) in volley.iter().enumerate() {
        assert!((spawn.velocity.length() - 220.0).abs() < EPS);
        let expected = 12.0 + 60.0 * i as f32;
        assert!((angle_deg(spawn.velocity) - expected).abs() < 1e-3);
    }
}

#[test]
fn radial_offset_wraps_without_changing_directions() {
    let wrapped = radial_volley(Vec2::ZERO, 10, 300.0, 372.0);
    let plain = radial_volley(Vec2::ZERO, 10, 300.0, 12.0);
    for (a, b) in wrapped.iter().zip(&plain) {
        assert!((a.velocity - b.velocity).length() < 1e-2);
    }
}

#[test]
fn radial_offset_stays_folded_across_volleys() {
    let mut table = PhaseTable::default();
    let mut ai = BossAI::default();

    // 30 steps of 12 degrees is a full turn
    for _ in 0..30 {
        ai.fire_volley(Vec2::ZERO, Vec2::ZERO, Vec2::X, &table);
    }
    assert_eq!(ai.radial_offset, 0.0);

    table.radial_rotation_step = 7.3;
    for _ in 0..10_000 {
        ai.fire_volley(Vec2::ZERO, Vec2::ZERO, Vec2::X, &table);
        assert!((0.0..360.0).contains(&ai.radial_offset));
    }
    // 73000 degrees is 280 modulo 360
    assert!((ai.radial_offset - 280.0).abs() < 0.1);
}

#[test]
fn zero_count_radial_is_empty() {
    assert!(radial_volley(Vec2::ZERO, 0, 220.0, 0.0).is_empty());
}

#[test]
fn cone_is_symmetric_about_the_bearing() {
    let origin = Vec2::new(920.0, 360.0);
    let target = Vec2::new(320.0, 500.0);
    let aim = bearing(origin, target);
    let volley = cone_volley(origin, aim, 5, 35.0, 340.0);
    assert_eq!(volley.len(), 5);

    let direct = Vec2::from_angle(aim);
    // Middle projectile flies straight at the target
    assert!(angle_between_deg(volley[2].velocity, direct) < 1e-3);
    // Outer projectiles sit half the spread either side
    assert!((angle_between_deg(volley[0].velocity, direct) - 17.5).abs() < 1e-2);
    assert!((angle_between_deg(volley[4].velocity, direct) - 17.5).abs() < 1e-2);
    assert!((angle_between_deg(volley[0].velocity, volley[4].velocity) - 35.0).abs() < 1e-2);

    for spawn in &volley {
        assert_eq!(spawn.origin, origin);
        assert!((spawn.velocity.length() - 340.0).abs() < 1e-2);
    }
}

#[test]
fn colocated_target_still_produces_a_full_cone() {
    let origin = Vec2::new(500.0, 500.0);
    let aim = bearing(origin, origin);
    assert_eq!(aim, 0.0);

    let volley = cone_volley(origin, aim, 5, 35.0, 240.0);
    assert_eq!(volley.len(), 5);
    assert!(volley.iter().all(|s| s.velocity.is_finite()));
}

#[test]
fn single_projectile_cone_does_not_divide_by_zero() {
    let volley = cone_volley(Vec2::ZERO, 0.0, 1, 35.0, 100.0);
    assert_eq!(volley.len(), 1);
    assert!(volley[0].velocity.is_finite());
}

#[test]
fn phase2_alternates_starting_with_cone() {
    let table = PhaseTable::default();
    let mut ai = BossAI {
        phase: Phase::Phase2,
        ..default()
    };

    let mut seen = Vec::new();
    for _ in 0..4 {
        let volley = ai.fire_volley(Vec2::ZERO, Vec2::ZERO, Vec2::new(-100.0, 0.0), &table);
        seen.push(volley.patterns);
    }

    assert_eq!(
        seen,
        vec![
            vec![AttackPattern::Cone],
            vec![AttackPattern::Radial],
            vec![AttackPattern::Cone],
            vec![AttackPattern::Radial],
        ]
    );
}

#[test]
fn volley_sizes_follow_the_phase() {
    let table = PhaseTable::default();
    let target = Vec2::new(-100.0, 0.0);

    let mut phase1 = BossAI::default();
    let volley = phase1.fire_volley(Vec2::ZERO, Vec2::ZERO, target, &table);
    assert_eq!(volley.patterns, vec![AttackPattern::Radial]);
    assert_eq!(volley.projectiles.len(), 6);
    assert_eq!(phase1.radial_offset, 12.0);

    let mut enraged = BossAI {
        phase: Phase::Enraged,
        ..default()
    };
    let volley = enraged.fire_volley(Vec2::ZERO, Vec2::ZERO, target, &table);
    assert_eq!(
        volley.patterns,
        vec![AttackPattern::Radial, AttackPattern::Cone]
    );
    assert_eq!(volley.projectiles.len(), 16 + 5);
}

#[test]
fn enraged_cycle_is_faster_than_phase1() {
    let table = PhaseTable::default();

    let mut calm = BossAI::default();
    let mut enraged = BossAI {
        phase: Phase::Enraged,
        ..default()
    };

    assert!(ticks_until_volley(&mut enraged, &table, 0.1) < ticks_until_volley(&mut calm, &table, 0.1));
}

#[test]
fn first_volley_spawns_from_the_boss_on_schedule() {
    let mut app = encounter_app();

    // Idle takes five ticks, telegraph three, attack fires on the ninth
    for _ in 0..8 {
        step(&mut app, 0.25);
    }
    assert_eq!(projectiles_of(&mut app, Team::Enemy), 0);
    let boss = single_entity::<With<Boss>>(&mut app);
    assert_eq!(app.world().get::<BossAI>(boss).map(|ai| ai.state), Some(BossState::Attack));

    step(&mut app, 0.25);
    assert_eq!(projectiles_of(&mut app, Team::Enemy), 6);
    assert_eq!(app.world().get::<BossAI>(boss).map(|ai| ai.state), Some(BossState::Cooldown));
}

#[test]
fn low_health_moves_the_live_boss_into_enraged() {
    let mut app = encounter_app();
    step(&mut app, 0.25);

    let boss = single_entity::<With<Boss>>(&mut app);
    app.world_mut()
        .get_mut::<Health>(boss)
        .expect("boss has health")
        .current = 30.0;
    step(&mut app, 0.25);

    assert_eq!(app.world().get::<BossAI>(boss).map(|ai| ai.phase), Some(Phase::Enraged));
}
