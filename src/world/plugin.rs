use bevy::prelude::*;

use super::level::{LevelBounds, LevelEntity};
use super::spawning::{coin_spin, enter_level};
use crate::core::GameState;

/// Drop the frozen scene when leaving a run for the menu. The win and
/// game-over overlays keep it visible, so teardown happens here and on
/// the next run start, not on every state exit.
fn despawn_level(mut commands: Commands, entities: Query<Entity, With<LevelEntity>>) {
    for entity in &entities {
        commands.entity(entity).despawn_recursive();
    }
}

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelBounds>();

        app.add_systems(OnEnter(GameState::MainMenu), despawn_level)
            .add_systems(Update, coin_spin.run_if(in_state(GameState::InGame)));

        // The level rebuilds only when a run actually starts. Resuming from
        // pause re-enters the in-game state without touching the world.
        for entered_from in [GameState::MainMenu, GameState::Won, GameState::GameOver] {
            app.add_systems(
                OnTransition {
                    exited: entered_from,
                    entered: GameState::InGame,
                },
                enter_level,
            );
        }
    }
}
