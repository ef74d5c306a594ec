//! Score domain: the single score manager, score messages and pickups.

mod manager;
mod systems;

pub use manager::{DEFAULT_SCORE_LABEL, ScoreManager, TextDisplay, install_score_manager};
pub use systems::{Collectible, ScoreGained, ScoreSource, ScoreText};

use bevy::prelude::*;

use crate::content::GameplayConfig;
use crate::score::systems::{apply_score_gains, collect_pickups, spin_collectibles};

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        let label = app
            .world()
            .get_resource::<GameplayConfig>()
            .map(|config| config.score.label.clone())
            .unwrap_or_else(|| DEFAULT_SCORE_LABEL.to_string());

        install_score_manager(app.world_mut(), ScoreManager::new(label));

        app.add_message::<ScoreGained>().add_systems(
            Update,
            (collect_pickups, apply_score_gains, spin_collectibles).chain(),
        );
    }
}
