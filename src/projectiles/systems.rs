use std::time::Duration;

use bevy::prelude::*;

use super::components::{BottleFrames, ThrownBottle, SPLASH_FRAME_MS};
use crate::animation::FrameTimer;
use crate::physics::{Position, VerticalMotion};

/// Horizontal flight; checks for ground impact and starts the splash.
///
/// A splashing bottle freezes in place, both here and in the gravity
/// system, so the shatter plays where the impact happened.
pub fn bottle_flight(
    mut bottles: Query<(&mut ThrownBottle, &mut Position, &mut FrameTimer)>,
) {
    for (mut bottle, mut pos, mut timer) in &mut bottles {
        if bottle.flight_step(pos.as_mut()) {
            timer.0.set_duration(Duration::from_millis(SPLASH_FRAME_MS));
            timer.0.reset();
        }
    }
}

/// Gravity for in-flight bottles only.
pub fn bottle_gravity(mut bottles: Query<(&ThrownBottle, &mut Position, &mut VerticalMotion)>) {
    for (bottle, mut pos, mut motion) in &mut bottles {
        if !bottle.splashing {
            motion.gravity_step(&mut pos.y);
        }
    }
}

/// Spin while flying; play the splash once, then leave the shards in place.
pub fn bottle_animate(
    time: Res<Time>,
    mut commands: Commands,
    mut bottles: Query<(Entity, &ThrownBottle, &mut BottleFrames, &mut FrameTimer, &mut Sprite)>,
) {
    for (entity, bottle, mut frames, mut timer, mut sprite) in &mut bottles {
        timer.0.tick(time.delta());
        if !timer.0.just_finished() {
            continue;
        }

        if bottle.splashing {
            match frames.splash.advance_once() {
                Some(frame) => sprite.image = frame,
                None => {
                    commands.entity(entity).remove::<FrameTimer>();
                }
            }
        } else {
            sprite.image = frames.spin.advance();
        }
    }
}
