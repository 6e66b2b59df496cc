//! The world tick - collision resolution, throws, pickups, soft-lock.
//!
//! Runs every 100 ms while the game is active. Entity removal goes through
//! `Commands`, so collections are never spliced mid-iteration.

use bevy::prelude::*;

use super::components::*;
use super::resolve::{resolve_contacts, Contact, ContactOutcome, STOMP_BOUNCE_SPEED};
use crate::core::{GameState, SoundCue};
use crate::enemies::{Boss, ChickenState};
use crate::input::InputState;
use crate::physics::{
    insets_for, kinds_collide, player_collides, Aabb, BodySize, EntityKind, Facing, Position,
    VerticalMotion,
};
use crate::player::Player;
use crate::projectiles::{spawn_thrown_bottle, ThrownBottle};
use crate::world::Pickup;

/// Stomp/damage resolution against the ground enemy group.
pub fn resolve_chicken_contacts(
    time: Res<Time>,
    mut sounds: EventWriter<SoundCue>,
    mut player_query: Query<
        (&mut Position, &BodySize, &mut VerticalMotion, &mut Energy),
        With<Player>,
    >,
    mut chickens: Query<
        (Entity, &Position, &BodySize, &EntityKind, &mut ChickenState),
        Without<Player>,
    >,
) {
    let Ok((mut pos, size, mut motion, mut energy)) = player_query.get_single_mut() else {
        return;
    };
    if energy.is_dead() {
        return;
    }

    let player_box = Aabb::from_parts(&pos, size);
    let contacts: Vec<Contact<Entity>> = chickens
        .iter()
        .filter(|(_, _, _, _, state)| **state == ChickenState::Walking)
        .filter_map(|(entity, c_pos, c_size, kind, _)| {
            let enemy_box = Aabb::from_parts(c_pos, c_size);
            player_collides(&player_box, &enemy_box, *kind).then(|| Contact {
                id: entity,
                head_line: enemy_box.head_line(&insets_for(*kind)),
            })
        })
        .collect();

    // Feet-line math uses the wide table entry, not the tight body box.
    let char_feet = player_box.feet_line(&insets_for(EntityKind::Player));

    match resolve_contacts(motion.falling(), char_feet, size.h, &contacts) {
        ContactOutcome::Stomp { killed, rest_y } => {
            for entity in killed {
                if let Ok((_, _, _, _, mut state)) = chickens.get_mut(entity) {
                    *state = ChickenState::Dead;
                }
            }
            pos.y = rest_y;
            motion.speed_y = STOMP_BOUNCE_SPEED;
            sounds.send(SoundCue::EnemyHit);
        }
        ContactOutcome::Damage => {
            energy.hit(time.elapsed_secs_f64());
            sounds.send(SoundCue::Hurt);
        }
        ContactOutcome::None => {}
    }
}

/// Live projectiles against the boss and the ground enemies.
///
/// A bottle reaching the boss during the boss's hit cooldown is not
/// consumed: removal happens only when the hit is accepted.
pub fn resolve_bottle_hits(
    time: Res<Time>,
    mut commands: Commands,
    mut sounds: EventWriter<SoundCue>,
    bottles: Query<(Entity, &Position, &BodySize, &ThrownBottle)>,
    mut boss_query: Query<(&mut Boss, &Position, &BodySize), Without<ThrownBottle>>,
    mut chickens: Query<
        (&Position, &BodySize, &EntityKind, &mut ChickenState),
        Without<ThrownBottle>,
    >,
) {
    let now = time.elapsed_secs_f64();

    for (bottle_entity, b_pos, b_size, bottle) in bottles.iter() {
        if bottle.splashing {
            continue;
        }
        let bottle_box = Aabb::from_parts(b_pos, b_size);

        if let Ok((mut boss, boss_pos, boss_size)) = boss_query.get_single_mut() {
            let boss_box = Aabb::from_parts(boss_pos, boss_size);
            if boss.alive()
                && kinds_collide(&bottle_box, EntityKind::ThrownBottle, &boss_box, EntityKind::Boss)
            {
                if boss.hit(now, boss_pos.x) {
                    commands.entity(bottle_entity).despawn();
                    sounds.send(SoundCue::BossHurt);
                    sounds.send(SoundCue::BottleSplash);
                }
                continue;
            }
        }

        for (c_pos, c_size, kind, mut state) in chickens.iter_mut() {
            if *state != ChickenState::Walking {
                continue;
            }
            let enemy_box = Aabb::from_parts(c_pos, c_size);
            if kinds_collide(&bottle_box, EntityKind::ThrownBottle, &enemy_box, *kind) {
                *state = ChickenState::Dead;
                commands.entity(bottle_entity).despawn();
                sounds.send(SoundCue::EnemyHit);
                sounds.send(SoundCue::BottleSplash);
                break;
            }
        }
    }
}

/// Contact damage from overlapping the living boss.
///
/// Deliberately not cooldown-gated: touching the boss re-applies damage
/// every tick. The hurt window only selects the hurt animation.
pub fn resolve_boss_contact(
    time: Res<Time>,
    mut sounds: EventWriter<SoundCue>,
    mut player_query: Query<(&Position, &BodySize, &mut Energy), With<Player>>,
    boss_query: Query<(&Boss, &Position, &BodySize), Without<Player>>,
) {
    let Ok((pos, size, mut energy)) = player_query.get_single_mut() else {
        return;
    };
    let Ok((boss, boss_pos, boss_size)) = boss_query.get_single() else {
        return;
    };

    if !boss.alive() || energy.is_dead() {
        return;
    }

    let player_box = Aabb::from_parts(pos, size);
    let boss_box = Aabb::from_parts(boss_pos, boss_size);
    if player_collides(&player_box, &boss_box, EntityKind::Boss) {
        energy.hit(time.elapsed_secs_f64());
        sounds.send(SoundCue::Hurt);
    }
}

/// Spawn a bottle in front of the character when throw input is latched.
pub fn handle_throw(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut input: ResMut<InputState>,
    mut stocks: ResMut<Stocks>,
    mut sounds: EventWriter<SoundCue>,
    player_query: Query<(&Position, &Facing), With<Player>>,
) {
    if !input.throw || !stocks.can_throw() {
        return;
    }
    let Ok((pos, facing)) = player_query.get_single() else {
        return;
    };

    let x = if facing.left { pos.x - 50.0 } else { pos.x + 100.0 };
    spawn_thrown_bottle(&mut commands, &asset_server, x, pos.y + 250.0, facing.left);

    stocks.spend_bottle();
    sounds.send(SoundCue::BottleThrow);

    // Consume the edge so a held key does not auto-repeat.
    input.throw = false;
}

/// Collect coins and ground bottles overlapping the character.
pub fn collect_pickups(
    mut commands: Commands,
    mut stocks: ResMut<Stocks>,
    mut sounds: EventWriter<SoundCue>,
    player_query: Query<(&Position, &BodySize), With<Player>>,
    pickups: Query<(Entity, &Position, &BodySize, &EntityKind, &Pickup), Without<Player>>,
) {
    let Ok((pos, size)) = player_query.get_single() else {
        return;
    };
    let player_box = Aabb::from_parts(pos, size);

    for (entity, p_pos, p_size, kind, pickup) in pickups.iter() {
        let pickup_box = Aabb::from_parts(p_pos, p_size);
        if !player_collides(&player_box, &pickup_box, *kind) {
            continue;
        }
        commands.entity(entity).despawn();
        match pickup {
            Pickup::Coin => {
                stocks.add_coin();
                sounds.send(SoundCue::Coin);
            }
            Pickup::Bottle => stocks.add_bottle(),
        }
    }
}

/// Force a loss when the boss can no longer be defeated: no stock, no
/// bottles left on the ground, and nothing still in flight.
pub fn check_soft_lock(
    mut next_state: ResMut<NextState<GameState>>,
    stocks: Res<Stocks>,
    boss_query: Query<&Boss>,
    pickups: Query<&Pickup>,
    bottles: Query<&ThrownBottle>,
) {
    let Ok(boss) = boss_query.get_single() else {
        return;
    };
    if !boss.alive() || stocks.bottles > 0 {
        return;
    }

    let bottles_on_ground = pickups.iter().any(|p| *p == Pickup::Bottle);
    let bottles_in_flight = bottles.iter().any(|b| !b.splashing);

    if !bottles_on_ground && !bottles_in_flight {
        next_state.set(GameState::GameOver);
    }
}
