//! Desert Dash - Entry Point
//!
//! A 2D side-scrolling platformer: outrun chickens, collect coins and
//! salsa bottles, and defeat the boss at the end of the canyon.
//!
//! Controls:
//! - Arrow keys: Move and jump
//! - D: Throw a bottle
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Desert Dash".to_string(),
                resolution: (720.0, 480.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Audio backend
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(desert_dash::DesertDashPlugin)

        .run();
}
