//! Debug domain: movement overlay and runtime feature toggles.
//!
//! - F3 toggles the movement info overlay
//! - 1-4 flip camera-relative movement, facing, jump hold and double jump
//! - Ctrl+G grants score

mod state;
mod systems;
mod ui;

pub use state::{DebugState, MovementFeature};

use bevy::prelude::*;

use crate::debug::systems::{
    grant_debug_score, handle_feature_hotkeys, log_phase_changes, sync_tuning,
    toggle_info_overlay, update_debug_info_overlay,
};
use crate::movement::MovementSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (handle_feature_hotkeys, sync_tuning)
                    .chain()
                    .before(MovementSet::Drive),
            )
            .add_systems(
                Update,
                (
                    toggle_info_overlay,
                    grant_debug_score,
                    log_phase_changes,
                    update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
                )
                    .after(MovementSet::Drive),
            );
    }
}
