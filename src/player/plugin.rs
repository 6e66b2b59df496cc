//! Player plugin - registers the movement, gravity, and animation ticks.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;

use super::animation;
use super::movement;
use crate::core::GameState;

/// Movement input tick period.
const MOVEMENT_PERIOD: Duration = Duration::from_millis(10);
/// Gravity integration period (50 Hz).
const GRAVITY_PERIOD: Duration = Duration::from_millis(20);
/// Animation state selection period.
const ANIMATION_PERIOD: Duration = Duration::from_millis(200);

/// Player plugin - character controller and animation state machine.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                movement::player_movement
                    .run_if(on_timer(MOVEMENT_PERIOD)),
                movement::player_gravity
                    .run_if(on_timer(GRAVITY_PERIOD)),
                animation::player_state_animation
                    .run_if(on_timer(ANIMATION_PERIOD)),
                animation::advance_death_sequence,
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
