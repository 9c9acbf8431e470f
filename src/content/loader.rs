//! Loader for the encounter RON file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::EncounterDefaults;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct. `file_name` is only used for error context.
pub fn parse_single<T>(contents: &str, file_name: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&contents, &file_name)
}

/// Load encounter defaults from `path`. A missing file is not an error:
/// the built-in defaults are used instead.
pub fn load_encounter_defaults(path: &Path) -> Result<EncounterDefaults, ContentLoadError> {
    if !path.exists() {
        warn!("No encounter file at {:?}, using built-in defaults", path);
        return Ok(EncounterDefaults::default());
    }

    let defaults = load_single_file::<EncounterDefaults>(path)?;
    info!(
        "Loaded encounter defaults from {:?} (schema v{})",
        path, defaults.schema_version
    );
    Ok(defaults)
}
