//! Shared physics primitives - positions, gravity, and AABB collision.
//!
//! Every moving entity in the game is built on these components. The world
//! uses a top-left origin with y growing downward (positive vertical speed
//! moves an entity up); the rendering module translates into Bevy's
//! coordinate space at draw time.

mod collision;
mod motion;

pub use collision::*;
pub use motion::*;
