//! Input-driven movement and gravity for the player character.
//!
//! Two independent fixed-period processes: a 10 ms movement tick applying
//! input, and a 20 ms gravity tick integrating vertical motion against the
//! dynamically computed ground line.

use bevy::prelude::*;

use super::components::*;
use crate::combat::Energy;
use crate::core::SoundCue;
use crate::enemies::ChickenState;
use crate::input::InputState;
use crate::physics::{ground_top, BodySize, Facing, Position, VerticalMotion, WalkSpeed};
use crate::world::LevelBounds;

/// Living ground enemies whose silhouettes shape the player's ground line.
pub(super) type GroundQuery<'w, 's> = Query<
    'w,
    's,
    (&'static Position, &'static BodySize, &'static ChickenState),
    Without<Player>,
>;

/// The y the player's top edge rests on right now.
pub(super) fn current_ground_top(chickens: &GroundQuery) -> f32 {
    let living_feet = chickens
        .iter()
        .filter(|(_, _, state)| **state == ChickenState::Walking)
        .map(|(pos, size, _)| pos.y + size.h);
    ground_top(PLAYER_HEIGHT, living_feet)
}

/// Apply directional input and jumping; runs on the 10 ms movement tick.
pub fn player_movement(
    time: Res<Time>,
    input: Res<InputState>,
    bounds: Res<LevelBounds>,
    mut sounds: EventWriter<SoundCue>,
    mut player_query: Query<
        (
            &mut Position,
            &mut Facing,
            &WalkSpeed,
            &mut VerticalMotion,
            &mut ActivityClock,
            &MoveControl,
            &Energy,
        ),
        With<Player>,
    >,
    chickens: GroundQuery,
) {
    let Ok((mut pos, mut facing, speed, mut motion, mut clock, control, energy)) =
        player_query.get_single_mut()
    else {
        return;
    };

    if energy.is_dead() || !control.can_move {
        return;
    }

    if input.directional() {
        clock.touch(time.elapsed_secs_f64());
    }

    if input.right && pos.x < bounds.end_x {
        pos.x += speed.0;
        facing.left = false;
    }

    if input.left && pos.x > bounds.left_bound {
        pos.x -= speed.0;
        facing.left = true;
    }

    // Jumping is only permitted while grounded.
    let grounded = pos.y >= current_ground_top(&chickens);
    if input.up && grounded {
        motion.jump();
        sounds.send(SoundCue::Jump);
    }
}

/// Gravity integration clamped to the dynamic ground line; 20 ms tick.
pub fn player_gravity(
    mut player_query: Query<(&mut Position, &mut VerticalMotion), With<Player>>,
    chickens: GroundQuery,
) {
    let Ok((mut pos, mut motion)) = player_query.get_single_mut() else {
        return;
    };

    let ground = current_ground_top(&chickens);
    if pos.y < ground || motion.speed_y > 0.0 {
        motion.gravity_step(&mut pos.y);
        if pos.y > ground {
            pos.y = ground;
            motion.speed_y = 0.0;
        }
    }
}
