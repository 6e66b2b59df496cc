//! Level descriptor structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::LevelLoadError;

/// Rightmost x the player can reach; the boss arena ends here.
pub const DEFAULT_END_X: f32 = 2876.0;
/// Leftmost x the player can reach.
pub const DEFAULT_LEFT_BOUND: f32 = -2776.0;

/// Everything spawned for a run carries this marker so a restart can tear
/// the whole world down with one query.
#[derive(Component)]
pub struct LevelEntity;

/// Horizontal world bounds for the current level.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LevelBounds {
    pub end_x: f32,
    pub left_bound: f32,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            end_x: DEFAULT_END_X,
            left_bound: DEFAULT_LEFT_BOUND,
        }
    }
}

/// Collectible kind; collection routes to the matching stock counter.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pickup {
    Coin,
    Bottle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ChickenKind {
    Normal,
    Small,
}

/// One chicken to place, somewhere inside its spawn window.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChickenSpawn {
    pub kind: ChickenKind,
    pub x_min: f32,
    pub x_max: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CloudSpawn {
    pub x: f32,
}

/// One 719 px wide slice of the scrolling backdrop; `layers` is ordered
/// back to front.
#[derive(Debug, Clone, Deserialize)]
pub struct BackgroundSegment {
    pub x: f32,
    pub layers: Vec<String>,
}

/// The RON level descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelData {
    pub end_x: f32,
    pub left_bound: f32,
    pub boss_x: f32,
    pub coins: u32,
    pub bottles: u32,
    pub chickens: Vec<ChickenSpawn>,
    pub clouds: Vec<CloudSpawn>,
    pub background: Vec<BackgroundSegment>,
}

impl LevelData {
    /// Minimal built-in level used when the descriptor cannot be loaded:
    /// default bounds, the boss, a handful of pickups, no backdrop.
    pub fn fallback() -> Self {
        Self {
            end_x: DEFAULT_END_X,
            left_bound: DEFAULT_LEFT_BOUND,
            boss_x: 2800.0,
            coins: 10,
            bottles: 10,
            chickens: vec![
                ChickenSpawn {
                    kind: ChickenKind::Normal,
                    x_min: 800.0,
                    x_max: 2400.0,
                },
                ChickenSpawn {
                    kind: ChickenKind::Small,
                    x_min: 800.0,
                    x_max: 2400.0,
                },
            ],
            clouds: vec![CloudSpawn { x: 100.0 }, CloudSpawn { x: 900.0 }],
            background: Vec::new(),
        }
    }

    pub fn bounds(&self) -> LevelBounds {
        LevelBounds {
            end_x: self.end_x,
            left_bound: self.left_bound,
        }
    }
}

/// Read and parse a level descriptor, validating its bounds.
pub fn load_level(path: &str) -> Result<LevelData, LevelLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| LevelLoadError::ReadError {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    let level: LevelData = ron::from_str(&contents).map_err(|e| LevelLoadError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    if level.left_bound >= level.end_x {
        return Err(LevelLoadError::InvalidBounds {
            path: path.to_string(),
            left_bound: level.left_bound,
            end_x: level.end_x,
        });
    }

    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        end_x: 2876.0,
        left_bound: -2776.0,
        boss_x: 2800.0,
        coins: 10,
        bottles: 10,
        chickens: [
            (kind: Normal, x_min: 800.0, x_max: 2400.0),
            (kind: Small, x_min: 800.0, x_max: 2400.0),
        ],
        clouds: [(x: 100.0)],
        background: [
            (x: 0.0, layers: ["sprites/background/air.png"]),
        ],
    )"#;

    #[test]
    fn sample_descriptor_parses() {
        let level: LevelData = ron::from_str(SAMPLE).unwrap();
        assert_eq!(level.chickens.len(), 2);
        assert_eq!(level.chickens[0].kind, ChickenKind::Normal);
        assert_eq!(level.coins, 10);
        assert_eq!(level.bounds().end_x, 2876.0);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let bad = SAMPLE.replace("left_bound: -2776.0", "left_bound: 9000.0");
        let path = std::env::temp_dir().join("inverted_bounds_level.ron");
        fs::write(&path, bad).unwrap();

        let err = load_level(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LevelLoadError::InvalidBounds { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_level("assets/levels/does_not_exist.ron").unwrap_err();
        assert!(matches!(err, LevelLoadError::ReadError { .. }));
    }
}
