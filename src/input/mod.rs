//! Input state holder - a flat boolean-flags record.
//!
//! The simulation only ever reads these flags; the mapping from physical
//! keys to flags lives here, at the edge. The throw flag is edge-triggered:
//! set on key press and consumed by the world tick when a bottle spawns.

mod plugin;

pub use plugin::{InputPlugin, InputState};
