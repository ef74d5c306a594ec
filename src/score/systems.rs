//! Score domain: score messages, pickups and display refresh.

use avian3d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::Player;
use crate::score::ScoreManager;

const PICKUP_SPIN_SPEED: f32 = 2.0;

/// Marker for text nodes that mirror the score
#[derive(Component, Debug)]
pub struct ScoreText;

/// A pickup worth `value` points when the player touches it.
#[derive(Component, Debug, Clone, Copy)]
pub struct Collectible {
    pub value: i64,
}

/// Source of score gain for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    Pickup,
    Scripted,
}

/// Event fired when score should change
#[derive(Debug, Clone)]
pub struct ScoreGained {
    pub amount: i64,
    pub source: ScoreSource,
}

impl Message for ScoreGained {}

/// Apply score messages and refresh every score display after each one
pub(crate) fn apply_score_gains(
    mut score_events: MessageReader<ScoreGained>,
    mut manager: ResMut<ScoreManager>,
    mut displays: Query<&mut Text, With<ScoreText>>,
) {
    for event in score_events.read() {
        manager.add(event.amount);
        for mut text in &mut displays {
            manager.refresh(&mut *text);
        }
        info!(
            "Gained {} score from {:?}. Total: {}",
            event.amount,
            event.source,
            manager.total()
        );
    }
}

/// Turn player/pickup contacts into score and remove the pickup.
pub(crate) fn collect_pickups(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    collectibles: Query<&Collectible>,
    players: Query<(), With<Player>>,
    mut score_events: MessageWriter<ScoreGained>,
) {
    let mut collected: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let (pickup_entity, other) = if collectibles.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if collectibles.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if !players.contains(other) || collected.contains(&pickup_entity) {
            continue;
        }

        if let Ok(collectible) = collectibles.get(pickup_entity) {
            score_events.write(ScoreGained {
                amount: collectible.value,
                source: ScoreSource::Pickup,
            });
            collected.push(pickup_entity);
            commands.entity(pickup_entity).despawn();
        }
    }
}

pub(crate) fn spin_collectibles(
    time: Res<Time>,
    mut query: Query<&mut Transform, With<Collectible>>,
) {
    let angle = PICKUP_SPIN_SPEED * time.delta_secs();
    for mut transform in &mut query {
        transform.rotate_y(angle);
    }
}
