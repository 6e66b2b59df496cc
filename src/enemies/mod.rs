//! Ground enemies (two chicken sizes) and the boss state machine.

mod boss;
mod components;
mod plugin;
mod systems;

pub use boss::*;
pub use components::*;
pub use plugin::EnemyPlugin;
