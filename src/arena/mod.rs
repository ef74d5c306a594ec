//! Arena domain: test level with platforms, the player and score pickups.

mod spawn;
#[cfg(test)]
mod tests;

pub use spawn::{PICKUP_VALUE, PLATFORMS, PlayerSpawn, pickup_ring};

use bevy::prelude::*;

use crate::arena::spawn::{respawn_fallen_player, spawn_arena, spawn_pickups, spawn_player};
use crate::movement::MovementSet;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerSpawn>()
            .add_systems(Startup, (spawn_arena, spawn_player, spawn_pickups))
            .add_systems(Update, respawn_fallen_player.before(MovementSet::Drive));
    }
}
