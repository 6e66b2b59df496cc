//! Error types for level data loading.

use thiserror::Error;

/// Errors that can occur while loading a level descriptor.
#[derive(Debug, Error)]
pub enum LevelLoadError {
    /// File could not be read.
    #[error("Failed to read level file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// The descriptor's bounds are inverted or degenerate.
    #[error("Invalid bounds in '{path}': left {left_bound} is not left of end {end_x}")]
    InvalidBounds {
        path: String,
        left_bound: f32,
        end_x: f32,
    },
}
