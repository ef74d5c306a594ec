//! Movement domain: per-frame locomotion and the jump state machine.

use bevy::prelude::*;

use crate::movement::capabilities::{CameraView, InputSource, PhysicsBody};
use crate::movement::{JumpPhase, MovementController, MovementTuning};

/// Precondition violations that stop a controller from ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementError {
    /// Camera-relative movement is enabled but no camera was supplied.
    MissingCamera,
}

impl std::fmt::Display for MovementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementError::MissingCamera => {
                write!(f, "camera-relative movement requires a camera")
            }
        }
    }
}

impl std::error::Error for MovementError {}

impl MovementController {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            tuning,
            ..default()
        }
    }

    /// One-time setup once the body exists.
    pub fn init(&mut self, body: &mut impl PhysicsBody) {
        body.set_rotation_locked(true);
    }

    /// Advance one frame. Horizontal velocity is replaced, vertical velocity is
    /// only touched by jumps, and `rotation` turns toward the walk direction.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &impl InputSource,
        camera: Option<&dyn CameraView>,
        body: &mut impl PhysicsBody,
        rotation: &mut Quat,
    ) -> Result<(), MovementError> {
        let direction = self.move_direction(input.move_input(), camera)?;

        let horizontal = direction * self.tuning.move_speed;
        let mut velocity = body.linear_velocity();
        velocity.x = horizontal.x;
        velocity.z = horizontal.z;

        if self.tuning.face_movement && direction.length() > self.tuning.move_deadzone {
            let t = (self.tuning.rotation_speed * dt).clamp(0.0, 1.0);
            *rotation = rotation.slerp(facing_rotation(direction), t);
        }

        velocity.y = self.update_jump(dt, input, velocity.y);

        body.set_linear_velocity(velocity);
        Ok(())
    }

    pub fn on_contact_begin(&mut self) {
        trace!("Contact begin: grounded={}", self.state.grounded);
    }

    pub fn on_contact_stay(&mut self) {
        if !self.state.grounded {
            debug!(
                "Landed: double_jump_available was {}",
                self.state.double_jump_available
            );
        }
        self.state.grounded = true;
        self.state.double_jump_available = true;
        self.state.double_jumped = false;
    }

    pub fn on_contact_end(&mut self) {
        if self.state.grounded {
            debug!("Left ground: jumping={}", self.state.jumping);
        }
        self.state.grounded = false;
    }

    pub fn phase(&self) -> JumpPhase {
        let state = &self.state;
        if state.jumping {
            JumpPhase::Rising
        } else if state.grounded {
            JumpPhase::GroundedIdle
        } else if state.double_jumped {
            JumpPhase::DoubleJumped
        } else if state.double_jump_available {
            JumpPhase::Airborne
        } else {
            JumpPhase::AirborneSpent
        }
    }

    /// Unit-or-shorter horizontal direction for this frame's input.
    fn move_direction(
        &self,
        axis: Vec2,
        camera: Option<&dyn CameraView>,
    ) -> Result<Vec3, MovementError> {
        if !self.tuning.camera_relative {
            return Ok(Vec3::new(axis.x, 0.0, axis.y));
        }

        let camera = camera.ok_or(MovementError::MissingCamera)?;
        let forward = flatten(camera.forward_direction());
        let right = flatten(camera.right_direction());

        Ok(forward * axis.y + right * axis.x)
    }

    /// Returns the new vertical velocity.
    fn update_jump(&mut self, dt: f32, input: &impl InputSource, mut vy: f32) -> f32 {
        let tuning = &self.tuning;
        let state = &mut self.state;

        let pressed = input.jump_pressed();

        if state.grounded && pressed {
            vy = tuning.jump_force;
            state.jumping = true;
            state.jump_hold_time = 0.0;
            state.released_since_jump = false;
            debug!(
                "Ground jump: vy={}, double_jump_available={}",
                vy, state.double_jump_available
            );
        } else if tuning.double_jump
            && !state.grounded
            && state.double_jump_available
            && state.released_since_jump
            && pressed
        {
            vy = tuning.double_jump_force;
            state.double_jump_available = false;
            state.double_jumped = true;
            debug!("Double jump: vy={}", vy);
        }

        // Variable jump height - keep pushing while held, up to the cap
        if tuning.jump_hold
            && state.jumping
            && input.jump_held()
            && state.jump_hold_time < tuning.max_jump_time
        {
            vy += tuning.jump_hold_force * dt;
            state.jump_hold_time += dt;
        }

        if input.jump_released() || state.jump_hold_time >= tuning.max_jump_time {
            state.jumping = false;
            state.released_since_jump = true;
        }

        vy
    }
}

/// Project onto the horizontal plane.
fn flatten(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero()
}

/// Yaw that points the local forward axis (-Z) along `direction`.
pub(crate) fn facing_rotation(direction: Vec3) -> Quat {
    Quat::from_rotation_y(f32::atan2(-direction.x, -direction.z))
}
