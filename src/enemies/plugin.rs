use std::time::Duration;

use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;

use super::boss::{boss_behavior, boss_death};
use super::systems::{chicken_animate, chicken_death_watch, chicken_walk};
use crate::core::GameState;

/// Behavior tick for the boss phase machine and its death sequence.
const BOSS_TICK_MS: u64 = 200;
/// Movement tick shared with the rest of the world simulation.
const WALK_TICK_MS: u64 = 16;

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                chicken_walk.run_if(on_timer(Duration::from_millis(WALK_TICK_MS))),
                chicken_animate,
                chicken_death_watch,
                (boss_behavior, boss_death)
                    .chain()
                    .run_if(on_timer(Duration::from_millis(BOSS_TICK_MS))),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
