//! Arena domain: tests for level layout helpers.

use bevy::prelude::*;

use super::{PLATFORMS, PlayerSpawn, pickup_ring};

#[test]
fn test_pickup_ring_is_evenly_spaced_on_circle() {
    let points = pickup_ring(4, 2.0, 1.5);
    assert_eq!(points.len(), 4);

    for point in &points {
        assert_eq!(point.y, 1.5);
        assert!((Vec2::new(point.x, point.z).length() - 2.0).abs() < 1e-5);
    }

    assert!(points[0].abs_diff_eq(Vec3::new(2.0, 1.5, 0.0), 1e-5));
    assert!(points[1].abs_diff_eq(Vec3::new(0.0, 1.5, 2.0), 1e-5));
}

#[test]
fn test_pickup_ring_empty() {
    assert!(pickup_ring(0, 5.0, 1.0).is_empty());
}

#[test]
fn test_spawn_point_is_above_floor() {
    let spawn = PlayerSpawn::default();
    let (floor_center, floor_size) = PLATFORMS[0];
    let floor_top = floor_center.y + floor_size.y / 2.0;

    assert!(spawn.position.y > floor_top);
    assert!(spawn.kill_height < floor_top);
}
