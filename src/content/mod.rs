//! Content domain: data-driven gameplay config loaded from RON.

mod data;
mod loader;
mod validation;

pub use data::{GameplayConfig, ScoreSettings};
pub use loader::{ContentLoadError, load_gameplay_config, parse_gameplay_config};
pub use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "assets/data/gameplay.ron";

pub struct ContentPlugin {
    pub config_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = load_or_default(&self.config_path);

        app.insert_resource(config.movement.clone())
            .insert_resource(config);
    }
}

/// Load and validate the config, falling back to defaults on any error.
pub fn load_or_default(path: &Path) -> GameplayConfig {
    let config = match load_gameplay_config(path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            warn!("Using default gameplay config");
            return GameplayConfig::default();
        }
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid gameplay config: {}", e);
        }
        warn!("Using default gameplay config");
        return GameplayConfig::default();
    }

    info!(
        "Gameplay config loaded from {}: move_speed={}, jump_force={}, double_jump_force={}",
        path.display(),
        config.movement.move_speed,
        config.movement.jump_force,
        config.movement.double_jump_force
    );

    config
}
