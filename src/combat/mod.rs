//! Combat and the fixed-period world tick.
//!
//! The 100 ms tick resolves collisions with directional semantics (stomp
//! vs. damage), projectile impacts, boss contact, throws, pickups, and the
//! unwinnable-state check. Steps run in a fixed chained order and the
//! whole tick is skipped outside active gameplay.

mod components;
mod plugin;
mod resolve;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use resolve::*;
