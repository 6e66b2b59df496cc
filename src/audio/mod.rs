//! Sound playback: one-shot effect cues and the looped background track.
//!
//! Gameplay systems never touch the audio backend; they emit a
//! [`SoundCue`](crate::core::SoundCue) event and this module maps each cue
//! to its asset. Keeps the simulation testable without an audio device.

mod plugin;

pub use plugin::GameAudioPlugin;
