//! Movement domain: physics character controller with jump, jump hold and double jump.

mod capabilities;
mod components;
mod controller;
mod resources;
mod systems;

pub use capabilities::{AvianBody, CameraView, InputSource, PhysicsBody};
pub use components::{
    ControllerHalted, GameLayer, Ground, JumpPhase, MovementController, MovementState, Player,
};
pub use controller::MovementError;
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::systems::{
    drive_controllers, init_controllers, read_input, sample_ground_contacts,
};

/// Ordering for the per-frame movement pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Input,
    Contacts,
    Drive,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .configure_sets(
                Update,
                (MovementSet::Input, MovementSet::Contacts, MovementSet::Drive).chain(),
            )
            .add_systems(Update, read_input.in_set(MovementSet::Input))
            .add_systems(
                Update,
                (init_controllers, sample_ground_contacts)
                    .chain()
                    .in_set(MovementSet::Contacts),
            )
            .add_systems(Update, drive_controllers.in_set(MovementSet::Drive));
    }
}
