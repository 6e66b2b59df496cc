//! Desert Dash - a 2D side-scrolling platformer in Bevy.
//!
//! The player runs through a desert canyon, stomps or bottles the chickens
//! that patrol it, collects coins and salsa bottles, and takes on a
//! five-health boss at the far end of the level.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, pause handling
//! - **Input**: Flat boolean input flags read by the simulation
//! - **Physics**: Gravity integration, AABB collision with hitbox insets
//! - **Player**: Character controller, animation state selection, death
//! - **Enemies**: Chicken patrols and the boss state machine
//! - **Projectiles**: Thrown bottles with flight and splash phases
//! - **Combat**: The fixed-period world tick (stomps, hits, pickups, throws)
//! - **World**: Level descriptor loading and entity spawning
//! - **Rendering**: Camera scrolling, sprite mirroring, draw-order layers
//! - **Audio**: Fire-and-forget sound cues
//! - **UI**: Menus, HUD bars, end screens

pub mod animation;
pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod input;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct DesertDashPlugin;

impl Plugin for DesertDashPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input flags
            .add_plugins(input::InputPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // Projectile systems
            .add_plugins(projectiles::ProjectilePlugin)

            // World tick / collision resolution
            .add_plugins(combat::CombatPlugin)

            // Level loading and spawning
            .add_plugins(world::WorldPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // Audio cues
            .add_plugins(audio::GameAudioPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
