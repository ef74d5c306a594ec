//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::capabilities::InputSource;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    /// Vertical velocity set on a ground jump.
    pub jump_force: f32,
    /// Maximum seconds the hold boost can be applied for a single jump.
    pub max_jump_time: f32,
    /// Extra upward acceleration while jump is held.
    pub jump_hold_force: f32,
    /// Vertical velocity set on a double jump.
    pub double_jump_force: f32,
    pub rotation_speed: f32,
    /// Movement magnitude below which facing is left alone.
    pub move_deadzone: f32,
    /// Map input onto the camera's horizontal axes instead of world axes.
    pub camera_relative: bool,
    pub face_movement: bool,
    pub jump_hold: bool,
    pub double_jump: bool,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 8.0,
            max_jump_time: 0.3,
            jump_hold_force: 5.0,
            double_jump_force: 7.0,
            rotation_speed: 10.0,
            move_deadzone: 0.1,
            camera_relative: true,
            face_movement: true,
            jump_hold: true,
            double_jump: true,
        }
    }
}

impl MovementTuning {
    /// Plain world-axis walking and a single fixed jump, no extras.
    pub fn basic() -> Self {
        Self {
            camera_relative: false,
            face_movement: false,
            jump_hold: false,
            double_jump: false,
            ..default()
        }
    }

    /// Apex height of a tapped ground jump under the given gravity.
    /// Uses h = v^2 / (2g)
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * gravity)
    }
}

/// Per-frame input snapshot, sampled once before the controllers tick.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub jump_just_released: bool,
}

impl InputSource for MovementInput {
    fn move_input(&self) -> Vec2 {
        self.axis
    }

    fn jump_pressed(&self) -> bool {
        self.jump_just_pressed
    }

    fn jump_held(&self) -> bool {
        self.jump_held
    }

    fn jump_released(&self) -> bool {
        self.jump_just_released
    }
}
