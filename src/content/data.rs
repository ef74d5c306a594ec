//! Content domain: serde definitions for the gameplay config file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;
use crate::score::DEFAULT_SCORE_LABEL;

/// Top-level contents of `assets/data/gameplay.ron`.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub movement: MovementTuning,
    pub score: ScoreSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSettings {
    /// Text shown before the total, e.g. "Score: "
    pub label: String,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            label: DEFAULT_SCORE_LABEL.to_string(),
        }
    }
}
