//! Ground enemy components.

use bevy::prelude::*;

use crate::animation::FrameSet;

/// Marker component for ground enemies.
#[derive(Component)]
pub struct Chicken;

/// Ground enemy lifecycle.
///
/// Dead chickens stop moving and animating and show a fixed dead sprite;
/// they stay in the world as inert visuals, excluded from collision by
/// this state.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChickenState {
    #[default]
    Walking,
    Dead,
}

/// Normal chicken dimensions and ground alignment.
pub const CHICKEN_SIZE: f32 = 100.0;
pub const CHICKEN_Y: f32 = 360.0;
/// Animation cadence for the normal chicken.
pub const CHICKEN_FRAME_MS: u64 = 100;

/// Small chicken dimensions and ground alignment.
pub const SMALL_CHICKEN_SIZE: f32 = 60.0;
pub const SMALL_CHICKEN_Y: f32 = 380.0;
/// The small variant animates a touch slower.
pub const SMALL_CHICKEN_FRAME_MS: u64 = 120;

const CHICKEN_WALK: [&str; 3] = [
    "sprites/chicken/walk_1.png",
    "sprites/chicken/walk_2.png",
    "sprites/chicken/walk_3.png",
];
const CHICKEN_DEAD: &str = "sprites/chicken/dead.png";

const SMALL_CHICKEN_WALK: [&str; 3] = [
    "sprites/chicken_small/walk_1.png",
    "sprites/chicken_small/walk_2.png",
    "sprites/chicken_small/walk_3.png",
];
const SMALL_CHICKEN_DEAD: &str = "sprites/chicken_small/dead.png";

/// Walking frame cycle plus the fixed dead sprite.
#[derive(Component)]
pub struct ChickenFrames {
    pub walking: FrameSet,
    pub dead: Handle<Image>,
}

impl ChickenFrames {
    pub fn load_normal(asset_server: &AssetServer) -> Self {
        Self {
            walking: FrameSet::load(asset_server, &CHICKEN_WALK),
            dead: asset_server.load(CHICKEN_DEAD),
        }
    }

    pub fn load_small(asset_server: &AssetServer) -> Self {
        Self {
            walking: FrameSet::load(asset_server, &SMALL_CHICKEN_WALK),
            dead: asset_server.load(SMALL_CHICKEN_DEAD),
        }
    }
}
