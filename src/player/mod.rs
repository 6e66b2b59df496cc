//! Player character - movement, gravity, animation states, death.

mod animation;
mod components;
mod movement;
mod plugin;

pub use components::*;
pub use plugin::PlayerPlugin;
