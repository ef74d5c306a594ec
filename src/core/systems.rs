//! Core domain: camera and lighting setup.

use bevy::prelude::*;

use crate::movement::Player;

/// Third-person camera that trails the player.
#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    /// Camera position relative to the player.
    pub offset: Vec3,
    /// How quickly the camera catches up (per second).
    pub stiffness: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 6.0, 10.0),
            stiffness: 6.0,
        }
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    let follow = FollowCamera::default();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(follow.offset).looking_at(Vec3::ZERO, Vec3::Y),
        follow,
    ));
}

pub(crate) fn setup_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub(crate) fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut camera_query: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for (follow, mut transform) in &mut camera_query {
        let t = (time.delta_secs() * follow.stiffness).min(1.0);
        let target = player.translation + follow.offset;
        transform.translation = transform.translation.lerp(target, t);
        transform.look_at(player.translation, Vec3::Y);
    }
}
