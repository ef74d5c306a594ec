//! Movement domain: ground contact sampling.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{Ground, MovementController, Player};

/// Feed collision notifications into the controllers.
///
/// Begin and end come from Avian's collision messages. "Stay" is sampled every
/// frame from `CollidingEntities`, so a controller is grounded for as long as it
/// touches any `Ground` collider.
pub(crate) fn sample_ground_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    ground_query: Query<(), With<Ground>>,
    mut controllers: Query<(&CollidingEntities, &mut MovementController), With<Player>>,
) {
    for event in collision_start_events.read() {
        let Some((entity, _)) = ground_pair(event.collider1, event.collider2, &ground_query)
        else {
            continue;
        };
        if let Ok((_, mut controller)) = controllers.get_mut(entity) {
            controller.on_contact_begin();
        }
    }

    for event in collision_end_events.read() {
        let Some((entity, _)) = ground_pair(event.collider1, event.collider2, &ground_query)
        else {
            continue;
        };
        if let Ok((_, mut controller)) = controllers.get_mut(entity) {
            controller.on_contact_end();
        }
    }

    for (colliding, mut controller) in &mut controllers {
        if colliding.iter().any(|other| ground_query.contains(*other)) {
            controller.on_contact_stay();
        }
    }
}

/// Order a collision pair as (other, ground). `None` if neither side is ground.
fn ground_pair(
    a: Entity,
    b: Entity,
    ground_query: &Query<(), With<Ground>>,
) -> Option<(Entity, Entity)> {
    if ground_query.contains(b) {
        Some((a, b))
    } else if ground_query.contains(a) {
        Some((b, a))
    } else {
        None
    }
}
