//! Debug domain: state and feature toggles for debug tooling.

use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the movement info overlay (phase, velocity, etc.)
    pub show_info: bool,
}

/// Movement features that can be flipped at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementFeature {
    CameraRelative,
    FaceMovement,
    JumpHold,
    DoubleJump,
}

impl MovementFeature {
    pub const ALL: [MovementFeature; 4] = [
        MovementFeature::CameraRelative,
        MovementFeature::FaceMovement,
        MovementFeature::JumpHold,
        MovementFeature::DoubleJump,
    ];

    pub fn hotkey(self) -> KeyCode {
        match self {
            MovementFeature::CameraRelative => KeyCode::Digit1,
            MovementFeature::FaceMovement => KeyCode::Digit2,
            MovementFeature::JumpHold => KeyCode::Digit3,
            MovementFeature::DoubleJump => KeyCode::Digit4,
        }
    }

    fn flag(self, tuning: &mut MovementTuning) -> &mut bool {
        match self {
            MovementFeature::CameraRelative => &mut tuning.camera_relative,
            MovementFeature::FaceMovement => &mut tuning.face_movement,
            MovementFeature::JumpHold => &mut tuning.jump_hold,
            MovementFeature::DoubleJump => &mut tuning.double_jump,
        }
    }

    /// Flip this feature; returns the new value.
    pub fn toggle(self, tuning: &mut MovementTuning) -> bool {
        let flag = self.flag(tuning);
        *flag = !*flag;
        *flag
    }
}
