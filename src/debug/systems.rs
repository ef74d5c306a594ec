//! Debug domain: debug systems for input and runtime tweaks.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::debug::state::{DebugState, MovementFeature};
use crate::debug::ui::{DebugInfoOverlay, format_movement_info, spawn_debug_info_overlay};
use crate::movement::{JumpPhase, MovementController, MovementTuning, Player};
use crate::score::{ScoreGained, ScoreSource};

/// Points granted by Ctrl+G
pub(crate) const DEBUG_SCORE_GRANT: i64 = 100;

/// Toggle the info overlay with F3
pub(crate) fn toggle_info_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// Number keys flip movement features on the shared tuning
pub(crate) fn handle_feature_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tuning: ResMut<MovementTuning>,
) {
    for feature in MovementFeature::ALL {
        if keyboard.just_pressed(feature.hotkey()) {
            let enabled = feature.toggle(&mut tuning);
            info!("[DEBUG] {:?} = {}", feature, enabled);
        }
    }
}

/// Ctrl+G grants score without a pickup
pub(crate) fn grant_debug_score(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut score_events: MessageWriter<ScoreGained>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl && keyboard.just_pressed(KeyCode::KeyG) {
        score_events.write(ScoreGained {
            amount: DEBUG_SCORE_GRANT,
            source: ScoreSource::Scripted,
        });
        info!("[DEBUG] Granted {} score", DEBUG_SCORE_GRANT);
    }
}

/// Push tuning edits into live controllers, keeping their jump state
pub(crate) fn sync_tuning(
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    if !tuning.is_changed() {
        return;
    }
    for mut controller in &mut query {
        if controller.tuning != *tuning {
            controller.tuning = tuning.clone();
        }
    }
}

pub(crate) fn log_phase_changes(
    mut last_phase: Local<Option<JumpPhase>>,
    query: Query<&MovementController, With<Player>>,
) {
    let Ok(controller) = query.single() else {
        return;
    };
    let phase = controller.phase();
    if *last_phase != Some(phase) {
        debug!("[DEBUG] Jump phase {:?} -> {:?}", *last_phase, phase);
        *last_phase = Some(phase);
    }
}

pub(crate) fn update_debug_info_overlay(
    gravity: Res<Gravity>,
    player_query: Query<(&MovementController, &LinearVelocity), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok((controller, velocity)) = player_query.single() else {
        return;
    };
    let info = format_movement_info(controller, velocity, gravity.0.length());
    for mut text in &mut overlay_query {
        **text = info.clone();
    }
}
