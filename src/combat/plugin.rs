//! Combat plugin - schedules the world tick.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;

use super::components::Stocks;
use super::systems;
use crate::core::GameState;

/// World tick period: collision resolution, throws, pickups.
const WORLD_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Combat plugin - the fixed-period simulation tick.
///
/// Within one tick the steps run in a fixed chained order: collision
/// resolution first, then throw handling and pickup collection, then the
/// unwinnable-state check.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Stocks>().add_systems(
            Update,
            (
                systems::resolve_chicken_contacts,
                systems::resolve_bottle_hits,
                systems::resolve_boss_contact,
                systems::handle_throw,
                systems::collect_pickups,
                systems::check_soft_lock,
            )
                .chain()
                .run_if(on_timer(WORLD_TICK_PERIOD))
                .run_if(in_state(GameState::InGame)),
        );
    }
}
