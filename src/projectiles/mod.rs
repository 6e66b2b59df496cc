//! Thrown salsa bottles: spawned by the player, they arc forward under
//! gravity, splash on reaching the ground line, and are consumed by the
//! combat systems when they strike an enemy mid-flight.

mod components;
mod plugin;
mod systems;

pub use components::{spawn_thrown_bottle, BottleFrames, ThrownBottle, BOTTLE_SIZE};
pub use plugin::ProjectilePlugin;
