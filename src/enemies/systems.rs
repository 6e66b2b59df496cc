use bevy::prelude::*;

use super::components::{Chicken, ChickenFrames, ChickenState};
use crate::animation::FrameTimer;
use crate::physics::{Position, WalkSpeed};

/// Constant leftward drift for every living chicken; 60 Hz tick.
pub fn chicken_walk(mut chickens: Query<(&mut Position, &WalkSpeed, &ChickenState), With<Chicken>>) {
    for (mut pos, speed, state) in &mut chickens {
        if *state == ChickenState::Walking {
            pos.x -= speed.0;
        }
    }
}

/// Cycle walk frames on each chicken's own cadence.
pub fn chicken_animate(
    time: Res<Time>,
    mut chickens: Query<(&mut FrameTimer, &mut ChickenFrames, &mut Sprite, &ChickenState)>,
) {
    for (mut timer, mut frames, mut sprite, state) in &mut chickens {
        if *state != ChickenState::Walking {
            continue;
        }
        timer.0.tick(time.delta());
        if timer.0.just_finished() {
            sprite.image = frames.walking.advance();
        }
    }
}

/// Swap to the flat sprite the moment a chicken dies and stop its animation.
pub fn chicken_death_watch(
    mut commands: Commands,
    mut chickens: Query<(Entity, &ChickenFrames, &mut Sprite, &ChickenState), Changed<ChickenState>>,
) {
    for (entity, frames, mut sprite, state) in &mut chickens {
        if *state == ChickenState::Dead {
            sprite.image = frames.dead.clone();
            commands.entity(entity).remove::<FrameTimer>();
        }
    }
}
