//! Sprites domain: tests for manifest parsing and state tints.

use crate::combat::BossState;
use crate::sprites::{BOSS_KEY, PLAYER_KEY, PROJECTILE_KEY, boss_state_color, parse_manifest};

#[test]
fn manifest_parses_known_keys() {
    let json = r#"{
        "version": 1,
        "assets": {
            "player": { "path": "sprites/player.png" },
            "boss": { "path": "sprites/boss.png" },
            "projectile": { "path": "sprites/bullet.png" }
        }
    }"#;

    let manifest = parse_manifest(json).expect("manifest should parse");
    assert_eq!(manifest.version, 1);
    assert_eq!(manifest.assets[PLAYER_KEY].path, "sprites/player.png");
    assert_eq!(manifest.assets[BOSS_KEY].path, "sprites/boss.png");
    assert_eq!(manifest.assets[PROJECTILE_KEY].path, "sprites/bullet.png");
}

#[test]
fn manifest_rejects_missing_assets_table() {
    assert!(parse_manifest(r#"{ "version": 1 }"#).is_err());
}

#[test]
fn telegraph_pulse_stays_red_dominant() {
    for step in 0..40 {
        let color = boss_state_color(BossState::Telegraph, step as f32 * 0.05).to_srgba();
        assert!(color.red >= 0.5 - 1e-6 && color.red <= 1.0 + 1e-6);
        assert!(color.red > color.green);
        assert!((color.green - color.blue).abs() < 1e-6);
    }
}

#[test]
fn steady_states_ignore_elapsed_time() {
    for state in [BossState::Idle, BossState::Attack, BossState::Cooldown] {
        assert_eq!(boss_state_color(state, 0.0), boss_state_color(state, 3.7));
    }
}
