//! Content domain: data files loaded once at startup.
//!
//! Every file is optional. A file that fails to load is logged and its
//! built-in default is used instead.

mod data;
mod loader;
mod validation;


pub use data::{EMPTY_TILE, LevelDef, TileShapeDef};
pub use loader::{ContentLoadError, load_ron_file, parse_json, parse_ron, read_file};
pub use validation::{LevelValidationError, validate_level};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::movement::MovementTuning;
use crate::sprites::SpriteManifest;

pub const MOVEMENT_FILE: &str = "data/movement.ron";
pub const LEVEL_FILE: &str = "data/level.ron";
pub const SPRITE_MANIFEST_FILE: &str = "sprites/player.json";

pub struct ContentPlugin {
    pub base_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("assets"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = load_or_default(&self.base_path.join(MOVEMENT_FILE), load_ron_file);
        let level = load_or_default(&self.base_path.join(LEVEL_FILE), load_ron_file);
        let manifest = load_or_default(
            &self.base_path.join(SPRITE_MANIFEST_FILE),
            SpriteManifest::load_from_file,
        );

        app.insert_resource::<MovementTuning>(tuning)
            .insert_resource::<LevelDef>(level)
            .insert_resource::<SpriteManifest>(manifest);
    }
}

fn load_or_default<T: Default>(
    path: &Path,
    load: impl FnOnce(&Path) -> Result<T, ContentLoadError>,
) -> T {
    match load(path) {
        Ok(value) => {
            info!("Loaded {}", path.display());
            value
        }
        Err(e) => {
            warn!("{}, using built-in defaults", e);
            T::default()
        }
    }
}
