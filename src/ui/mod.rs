//! User interface: in-game status bars and the menu screens.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
