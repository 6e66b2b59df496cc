//! Rendering module - camera follow and world-to-screen sync.
//!
//! Simulation state lives in y-down, top-left-origin
//! [`Position`](crate::physics::Position) and
//! [`BodySize`](crate::physics::BodySize) components; this module is the
//! only place that maps them onto Bevy transforms. Nothing else in the
//! crate touches `Transform`.

mod plugin;
mod systems;

pub use plugin::RenderingPlugin;
pub use systems::{GameCamera, Layer};
