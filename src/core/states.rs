//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Every simulation
//! system (movement, gravity, the world tick) is gated on `InGame`, so
//! pausing or reaching an end state stops the whole simulation at once.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Loading` to load assets
/// - Move to `MainMenu` when loading completes
/// - Enter `InGame` when the player starts
/// - `Paused` freezes gameplay but keeps the world visible
/// - `Won` when the boss is defeated
/// - `GameOver` when the player dies (or the level becomes unwinnable)
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading assets and data files
    #[default]
    Loading,
    /// Main menu / title screen
    MainMenu,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
    /// Boss defeated - terminal win state
    Won,
    /// Player died - terminal loss state
    GameOver,
}
