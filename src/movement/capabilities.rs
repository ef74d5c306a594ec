//! Collaborators the movement controller drives but does not own.
//!
//! The controller never talks to the physics engine, the input devices or
//! the camera directly. Each is reached through one of these traits so the
//! jump logic can be ticked against Avian components in the game and against
//! plain structs in tests.

use avian3d::prelude::*;
use bevy::prelude::*;

/// A rigid body whose linear velocity the controller owns.
pub trait PhysicsBody {
    fn linear_velocity(&self) -> Vec3;

    fn set_linear_velocity(&mut self, velocity: Vec3);

    /// Freeze (or release) angular motion so collisions cannot tip the body over.
    fn set_rotation_locked(&mut self, locked: bool);
}

/// Polled once per tick.
pub trait InputSource {
    /// Move axis; `x` is strafe, `y` is forward.
    fn move_input(&self) -> Vec2;

    /// Jump went down this frame.
    fn jump_pressed(&self) -> bool;

    /// Jump is down.
    fn jump_held(&self) -> bool;

    /// Jump came up this frame.
    fn jump_released(&self) -> bool;
}

/// World-space view directions of the camera used for camera-relative movement.
pub trait CameraView {
    fn forward_direction(&self) -> Vec3;

    fn right_direction(&self) -> Vec3;
}

impl CameraView for GlobalTransform {
    fn forward_direction(&self) -> Vec3 {
        *GlobalTransform::forward(self)
    }

    fn right_direction(&self) -> Vec3 {
        *GlobalTransform::right(self)
    }
}

impl CameraView for Transform {
    fn forward_direction(&self) -> Vec3 {
        *Transform::forward(self)
    }

    fn right_direction(&self) -> Vec3 {
        *Transform::right(self)
    }
}

/// Avian rigid body seen through [`PhysicsBody`].
pub struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub locked_axes: &'a mut LockedAxes,
}

impl PhysicsBody for AvianBody<'_> {
    fn linear_velocity(&self) -> Vec3 {
        self.velocity.0
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity;
    }

    fn set_rotation_locked(&mut self, locked: bool) {
        *self.locked_axes = if locked {
            LockedAxes::ROTATION_LOCKED
        } else {
            LockedAxes::new()
        };
    }
}
