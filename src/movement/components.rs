//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Pickups - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for colliders that count as ground contact
#[derive(Component, Debug)]
pub struct Ground;

/// Flags driving the jump state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    pub grounded: bool,
    /// A ground jump is still in its boostable window.
    pub jumping: bool,
    /// Seconds the current jump has been boosted by holding.
    pub jump_hold_time: f32,
    pub double_jump_available: bool,
    /// A double jump was spent since the last ground contact.
    pub double_jumped: bool,
    pub released_since_jump: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            grounded: false,
            jumping: false,
            jump_hold_time: 0.0,
            // Earned on first ground contact.
            double_jump_available: false,
            double_jumped: false,
            released_since_jump: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    GroundedIdle,
    /// Ground jump still accepting hold boost.
    Rising,
    /// In the air with a double jump in hand.
    Airborne,
    /// Double jump spent; waiting for ground contact.
    DoubleJumped,
    /// In the air without ever having earned a double jump (spawned airborne).
    AirborneSpent,
}

/// Physics-driven character controller. Ticked once per frame by
/// `drive_controllers`; contact callbacks come from `sample_ground_contacts`.
#[derive(Component, Debug, Clone, Default)]
pub struct MovementController {
    pub tuning: MovementTuning,
    pub state: MovementState,
}

/// Set when a controller hit a precondition violation; it is no longer ticked.
#[derive(Component, Debug)]
pub struct ControllerHalted;
