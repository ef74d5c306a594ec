//! Arena domain: level, player and pickup spawning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, MovementController, MovementTuning, Player};
use crate::score::Collectible;

pub const PICKUP_VALUE: i64 = 10;
const PICKUP_COUNT: usize = 8;
const PICKUP_RING_RADIUS: f32 = 6.0;
const PICKUP_HEIGHT: f32 = 1.0;

const PLAYER_RADIUS: f32 = 0.4;
const PLAYER_LENGTH: f32 = 1.0;

/// Static platforms as (center, full size). The first entry is the floor.
pub const PLATFORMS: [(Vec3, Vec3); 4] = [
    (Vec3::new(0.0, -0.5, 0.0), Vec3::new(30.0, 1.0, 30.0)),
    (Vec3::new(-5.0, 1.0, -4.0), Vec3::new(4.0, 0.5, 4.0)),
    (Vec3::new(4.0, 2.5, -6.0), Vec3::new(3.0, 0.5, 3.0)),
    (Vec3::new(0.0, 4.5, -10.0), Vec3::new(3.0, 0.5, 3.0)),
];

/// Where the player starts and how far it may fall before being put back.
#[derive(Resource, Debug, Clone)]
pub struct PlayerSpawn {
    pub position: Vec3,
    pub kill_height: f32,
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 0.0),
            kill_height: -20.0,
        }
    }
}

/// Evenly spaced points on a horizontal circle around the origin.
pub fn pickup_ring(count: usize, radius: f32, height: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            Vec3::new(radius * angle.cos(), height, radius * angle.sin())
        })
        .collect()
}

pub(crate) fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_material = materials.add(Color::srgb(0.4, 0.5, 0.4));
    let platform_material = materials.add(Color::srgb(0.5, 0.4, 0.3));

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    for (i, (center, size)) in PLATFORMS.iter().enumerate() {
        let material = if i == 0 {
            floor_material.clone()
        } else {
            platform_material.clone()
        };

        commands.spawn((
            Ground,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(material),
            Transform::from_translation(*center),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers,
        ));
    }
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<MovementTuning>,
    spawn: Res<PlayerSpawn>,
) {
    info!(
        "Spawning player at {:?}: move_speed={}, jump_force={}, double_jump={}",
        spawn.position, tuning.move_speed, tuning.jump_force, tuning.double_jump
    );

    commands.spawn((
        // Identity & Movement
        (Player, MovementController::new(tuning.clone())),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_LENGTH))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_translation(spawn.position),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollidingEntities::default(),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    ));
}

pub(crate) fn spawn_pickups(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(0.4, 0.4, 0.4));
    let material = materials.add(Color::srgb(0.9, 0.75, 0.2));
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    for position in pickup_ring(PICKUP_COUNT, PICKUP_RING_RADIUS, PICKUP_HEIGHT) {
        commands.spawn((
            Collectible {
                value: PICKUP_VALUE,
            },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
            Collider::sphere(0.3),
            Sensor,
            sensor_layers,
        ));
    }
}

/// Put the player back at the spawn point after falling out of the level
pub(crate) fn respawn_fallen_player(
    spawn: Res<PlayerSpawn>,
    mut query: Query<(&mut Transform, &mut LinearVelocity), With<Player>>,
) {
    for (mut transform, mut velocity) in &mut query {
        if transform.translation.y < spawn.kill_height {
            warn!(
                "Player fell to {:.1}, respawning at {:?}",
                transform.translation.y, spawn.position
            );
            transform.translation = spawn.position;
            velocity.0 = Vec3::ZERO;
        }
    }
}
