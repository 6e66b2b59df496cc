//! Player animation state selection.
//!
//! States are implicit, derived fresh every 200 ms animation tick in
//! strict priority order: dead, hurt, airborne, moving, idle-or-asleep.

use bevy::prelude::*;

use super::components::*;
use super::movement::{current_ground_top, GroundQuery};
use crate::combat::Energy;
use crate::core::{GameState, SoundCue};
use crate::input::InputState;
use crate::physics::Position;

/// Select and advance the active animation; runs on the 200 ms tick.
#[allow(clippy::too_many_arguments)]
pub fn player_state_animation(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<InputState>,
    mut sounds: EventWriter<SoundCue>,
    mut player_query: Query<
        (
            Entity,
            &Position,
            &Energy,
            &mut ActivityClock,
            &mut MoveControl,
            &mut PlayerSprites,
            &mut Sprite,
            Option<&DyingSequence>,
        ),
        With<Player>,
    >,
    chickens: GroundQuery,
) {
    let Ok((entity, pos, energy, mut clock, mut control, mut sprites, mut sprite, dying)) =
        player_query.get_single_mut()
    else {
        return;
    };

    let now = time.elapsed_secs_f64();

    if energy.is_dead() {
        // The death sequence runs on its own cadence; start it once.
        if dying.is_none() {
            control.can_move = false;
            commands.entity(entity).insert(DyingSequence::default());
        }
    } else if energy.is_hurt(now) {
        sprite.image = sprites.hurt.advance();
    } else if pos.y < current_ground_top(&chickens) {
        sprite.image = sprites.jumping.advance();
    } else if input.left || input.right {
        sprite.image = sprites.walking.advance();
    } else if clock.asleep_at(now) {
        if !clock.sleeping {
            clock.sleeping = true;
            sounds.send(SoundCue::Snore);
        }
        sprite.image = sprites.sleep.advance();
    } else {
        sprite.image = sprites.idle.advance();
    }
}

/// Play the death frames once, then notify game over exactly once.
pub fn advance_death_sequence(
    time: Res<Time>,
    mut next_state: ResMut<NextState<GameState>>,
    mut player_query: Query<(&mut DyingSequence, &mut PlayerSprites, &mut Sprite), With<Player>>,
) {
    let Ok((mut dying, mut sprites, mut sprite)) = player_query.get_single_mut() else {
        return;
    };

    dying.timer.tick(time.delta());
    if !dying.timer.just_finished() {
        return;
    }

    match sprites.dead.advance_once() {
        Some(frame) => sprite.image = frame,
        None => {
            if dying.take_notification() {
                next_state.set(GameState::GameOver);
            }
        }
    }
}
