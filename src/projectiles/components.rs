use bevy::prelude::*;

use crate::animation::{FrameSet, FrameTimer};
use crate::physics::{BodySize, EntityKind, Position, VerticalMotion};
use crate::rendering::Layer;
use crate::world::LevelEntity;

pub const BOTTLE_SIZE: f32 = 100.0;
/// Feet line at which a falling bottle shatters.
pub const BOTTLE_GROUND_Y: f32 = 360.0;
/// Horizontal distance covered per flight tick.
pub const BOTTLE_FLIGHT_STEP: f32 = 5.0;
/// Upward launch speed applied at the moment of the throw.
pub const BOTTLE_LAUNCH_SPEED: f32 = 10.0;

const SPIN_FRAME_MS: u64 = 60;
/// Splash frame cadence; the animation system re-arms the frame timer
/// with this period when the splash starts.
pub(super) const SPLASH_FRAME_MS: u64 = 80;

const SPIN_FRAMES: [&str; 4] = [
    "sprites/bottle/spin_1.png",
    "sprites/bottle/spin_2.png",
    "sprites/bottle/spin_3.png",
    "sprites/bottle/spin_4.png",
];

const SPLASH_FRAMES: [&str; 6] = [
    "sprites/bottle/splash_1.png",
    "sprites/bottle/splash_2.png",
    "sprites/bottle/splash_3.png",
    "sprites/bottle/splash_4.png",
    "sprites/bottle/splash_5.png",
    "sprites/bottle/splash_6.png",
];

/// A bottle in flight. Once `splashing` it stops moving, plays the splash
/// frames, and no longer damages anything.
#[derive(Component, Debug)]
pub struct ThrownBottle {
    pub thrown_left: bool,
    pub splashing: bool,
}

impl ThrownBottle {
    /// One horizontal flight step toward the thrown direction.
    ///
    /// Returns `true` on the step that reaches the ground line, flipping
    /// the bottle into its splash phase. Splashing bottles never move.
    pub fn flight_step(&mut self, pos: &mut Position) -> bool {
        if self.splashing {
            return false;
        }

        if self.thrown_left {
            pos.x -= BOTTLE_FLIGHT_STEP;
        } else {
            pos.x += BOTTLE_FLIGHT_STEP;
        }

        if pos.y > BOTTLE_GROUND_Y {
            self.splashing = true;
            return true;
        }
        false
    }
}

#[derive(Component)]
pub struct BottleFrames {
    pub spin: FrameSet,
    pub splash: FrameSet,
}

impl BottleFrames {
    pub fn load(asset_server: &AssetServer) -> Self {
        Self {
            spin: FrameSet::load(asset_server, &SPIN_FRAMES),
            splash: FrameSet::load(asset_server, &SPLASH_FRAMES),
        }
    }
}

/// Spawn a bottle at the player's hand position, launched upward and
/// drifting toward the faced direction.
pub fn spawn_thrown_bottle(
    commands: &mut Commands,
    asset_server: &AssetServer,
    x: f32,
    y: f32,
    thrown_left: bool,
) {
    let frames = BottleFrames::load(asset_server);
    let first = frames.spin.first();
    commands.spawn((
        ThrownBottle {
            thrown_left,
            splashing: false,
        },
        frames,
        Position { x, y },
        BodySize {
            w: BOTTLE_SIZE,
            h: BOTTLE_SIZE,
        },
        VerticalMotion {
            speed_y: BOTTLE_LAUNCH_SPEED,
            ..default()
        },
        EntityKind::ThrownBottle,
        FrameTimer::from_millis(SPIN_FRAME_MS),
        Sprite {
            image: first,
            custom_size: Some(Vec2::splat(BOTTLE_SIZE)),
            ..default()
        },
        Layer::Projectiles,
        LevelEntity,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_moves_toward_the_thrown_direction() {
        let mut right = ThrownBottle {
            thrown_left: false,
            splashing: false,
        };
        let mut pos = Position { x: 200.0, y: 300.0 };
        assert!(!right.flight_step(&mut pos));
        assert_eq!(pos.x, 200.0 + BOTTLE_FLIGHT_STEP);

        let mut left = ThrownBottle {
            thrown_left: true,
            splashing: false,
        };
        let mut pos = Position { x: 200.0, y: 300.0 };
        assert!(!left.flight_step(&mut pos));
        assert_eq!(pos.x, 200.0 - BOTTLE_FLIGHT_STEP);
    }

    #[test]
    fn reaching_the_ground_starts_the_splash() {
        let mut bottle = ThrownBottle {
            thrown_left: false,
            splashing: false,
        };
        let mut pos = Position {
            x: 200.0,
            y: BOTTLE_GROUND_Y + 1.0,
        };
        assert!(bottle.flight_step(&mut pos));
        assert!(bottle.splashing);
    }

    #[test]
    fn splashing_bottle_never_moves_again() {
        let mut bottle = ThrownBottle {
            thrown_left: false,
            splashing: false,
        };
        let mut pos = Position {
            x: 200.0,
            y: BOTTLE_GROUND_Y + 1.0,
        };
        bottle.flight_step(&mut pos);
        let frozen_x = pos.x;

        for _ in 0..5 {
            assert!(!bottle.flight_step(&mut pos));
        }
        assert_eq!(pos.x, frozen_x);
    }
}
