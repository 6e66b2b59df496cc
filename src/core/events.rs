//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The simulation emits
//! sound cues as events and never waits on them, so audio failures cannot
//! affect game logic.

use bevy::prelude::*;

/// A fire-and-forget audio cue emitted by gameplay systems.
///
/// The audio plugin maps each cue to a sound file and plays it. Emitters
/// never observe the result.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player leaves the ground.
    Jump,
    /// Player takes damage.
    Hurt,
    /// Coin collected.
    Coin,
    /// Bottle thrown.
    BottleThrow,
    /// Bottle shatters.
    BottleSplash,
    /// A chicken is defeated.
    EnemyHit,
    /// The boss accepts a hit.
    BossHurt,
    /// Player fell asleep from inactivity.
    Snore,
}
