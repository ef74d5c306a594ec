//! UI domain: in-run HUD elements.

mod hud_score;

use bevy::prelude::*;

use crate::ui::hud_score::spawn_score_display_ui;

/// Inset of HUD elements from the window edges
pub(crate) const HUD_PADDING: f32 = 16.0;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_score_display_ui);
    }
}
