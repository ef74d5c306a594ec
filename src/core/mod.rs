//! Core domain: camera rig and scene lighting.

mod systems;

pub use systems::FollowCamera;

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera, setup_lighting};
use crate::movement::MovementSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, setup_lighting))
            .add_systems(Update, follow_player.after(MovementSet::Drive));
    }
}
