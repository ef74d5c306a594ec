//! Movement domain: controller lifecycle and per-frame driving.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::FollowCamera;
use crate::movement::capabilities::{AvianBody, CameraView};
use crate::movement::{ControllerHalted, MovementController, MovementInput, Player};

pub(crate) fn init_controllers(
    mut query: Query<
        (&mut MovementController, &mut LinearVelocity, &mut LockedAxes),
        Added<MovementController>,
    >,
) {
    for (mut controller, mut velocity, mut locked_axes) in &mut query {
        let mut body = AvianBody {
            velocity: &mut velocity,
            locked_axes: &mut locked_axes,
        };
        controller.init(&mut body);
    }
}

pub(crate) fn drive_controllers(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    camera_query: Query<&GlobalTransform, With<FollowCamera>>,
    mut query: Query<
        (
            Entity,
            &mut MovementController,
            &mut LinearVelocity,
            &mut LockedAxes,
            &mut Transform,
        ),
        (With<Player>, Without<ControllerHalted>),
    >,
) {
    let dt = time.delta_secs();
    let camera = camera_query.single().ok();

    for (entity, mut controller, mut velocity, mut locked_axes, mut transform) in &mut query {
        let mut body = AvianBody {
            velocity: &mut velocity,
            locked_axes: &mut locked_axes,
        };

        let result = controller.tick(
            dt,
            &*input,
            camera.map(|c| c as &dyn CameraView),
            &mut body,
            &mut transform.rotation,
        );

        if let Err(err) = result {
            error!("Movement controller on {:?} halted: {}", entity, err);
            commands.entity(entity).insert(ControllerHalted);
        }
    }
}
