//! Level data, loading, and the run-entry spawn pass.
//!
//! A level is a RON descriptor under `assets/levels/` naming the world
//! bounds, background segments, cloud and pickup placements, and the enemy
//! roster. Entering a run tears down everything tagged [`LevelEntity`] and
//! rebuilds the world from the descriptor, so restarts are a plain state
//! re-entry.

mod error;
mod level;
mod plugin;
mod spawning;

pub use error::LevelLoadError;
pub use level::{
    BackgroundSegment, ChickenKind, ChickenSpawn, CloudSpawn, LevelBounds, LevelData, LevelEntity,
    Pickup,
};
pub use plugin::WorldPlugin;
