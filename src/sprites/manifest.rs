//! Sprite manifest loading and the texture handles handed to spawners.
//!
//! The manifest is a small JSON file mapping sprite keys to image paths
//! relative to `assets/`.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const MANIFEST_PATH: &str = "assets/sprites/manifest.json";

pub const PLAYER_KEY: &str = "player";
pub const BOSS_KEY: &str = "boss";
pub const PROJECTILE_KEY: &str = "projectile";

/// Texture handles attached to encounter entities when they spawn.
/// Default handles render as plain quads, which is all a headless run needs.
#[derive(Resource, Debug, Clone, Default)]
pub struct EncounterArt {
    pub player: Handle<Image>,
    pub boss: Handle<Image>,
    pub projectile: Handle<Image>,
}

/// Definition of a single sprite asset.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteAssetDef {
    /// Path to the sprite image file, relative to assets/.
    pub path: String,
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
pub struct ManifestJson {
    pub version: u32,
    pub assets: HashMap<String, SpriteAssetDef>,
}

pub fn parse_manifest(contents: &str) -> Result<ManifestJson, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Load the manifest and queue every sprite it names. Missing or broken
/// manifests leave the default handles in place.
pub(crate) fn load_encounter_art(mut art: ResMut<EncounterArt>, asset_server: Res<AssetServer>) {
    let manifest_path = Path::new(MANIFEST_PATH);

    if !manifest_path.exists() {
        warn!(
            "Sprite manifest not found at {:?}, using untextured sprites",
            MANIFEST_PATH
        );
        return;
    }

    let contents = match fs::read_to_string(manifest_path) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to read sprite manifest: {}", e);
            return;
        }
    };

    let manifest = match parse_manifest(&contents) {
        Ok(m) => m,
        Err(e) => {
            error!("Failed to parse sprite manifest: {}", e);
            return;
        }
    };

    let load = |key: &str| -> Handle<Image> {
        match manifest.assets.get(key) {
            Some(def) => asset_server.load(def.path.clone()),
            None => {
                warn!("Sprite manifest has no '{}' entry", key);
                Handle::default()
            }
        }
    };

    art.player = load(PLAYER_KEY);
    art.boss = load(BOSS_KEY);
    art.projectile = load(PROJECTILE_KEY);

    info!(
        "Loaded sprite manifest v{} with {} assets",
        manifest.version,
        manifest.assets.len()
    );
}
