use std::time::Duration;

use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;

use super::systems::{bottle_animate, bottle_flight, bottle_gravity};
use crate::core::GameState;

/// Flight tick; matches the throw arc's horizontal cadence.
const FLIGHT_TICK_MS: u64 = 10;
/// Gravity tick shared with the player's fall integration.
const GRAVITY_TICK_MS: u64 = 20;

pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                bottle_flight.run_if(on_timer(Duration::from_millis(FLIGHT_TICK_MS))),
                bottle_gravity.run_if(on_timer(Duration::from_millis(GRAVITY_TICK_MS))),
                bottle_animate,
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
