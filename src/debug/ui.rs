//! Debug domain: movement info overlay.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementController;
use crate::ui::HUD_PADDING;

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

/// Multi-line readout of one controller. `gravity` is the downward
/// acceleration magnitude used for the apex estimate.
pub fn format_movement_info(
    controller: &MovementController,
    velocity: &LinearVelocity,
    gravity: f32,
) -> String {
    let state = &controller.state;
    let tuning = &controller.tuning;
    format!(
        "phase: {:?}\n\
         grounded: {}\n\
         double jump: {}\n\
         hold: {:.2}/{:.2}s\n\
         apex: {:.2}m\n\
         velocity: ({:.2}, {:.2}, {:.2})\n\
         [1] camera relative: {}\n\
         [2] face movement: {}\n\
         [3] jump hold: {}\n\
         [4] double jump: {}",
        controller.phase(),
        state.grounded,
        state.double_jump_available,
        state.jump_hold_time,
        tuning.max_jump_time,
        tuning.single_jump_height(gravity),
        velocity.x,
        velocity.y,
        velocity.z,
        tuning.camera_relative,
        tuning.face_movement,
        tuning.jump_hold,
        tuning.double_jump,
    )
}
