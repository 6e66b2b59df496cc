//! The boss - a five-health enemy with an explicit behavior state machine.
//!
//! Phases: `Alert` (initial, exits only on being hit) -> `Attack` (bounded
//! back-and-forth patrol anchored where the first hit landed) <-> `Hurt`
//! (500 ms flinch on every accepted hit) -> `Dead` (terminal). `Walk` is a
//! designed leftward-drift phase nothing transitions into by default; it
//! stays reachable by direct phase assignment.

use bevy::prelude::*;

use crate::animation::FrameSet;
use crate::core::GameState;
use crate::physics::Position;

pub const BOSS_WIDTH: f32 = 200.0;
pub const BOSS_HEIGHT: f32 = 480.0;
/// Starting health; each accepted hit removes one point.
pub const BOSS_HEALTH: u32 = 5;
/// Minimum seconds between accepted hits.
pub const BOSS_HIT_COOLDOWN_SECS: f64 = 1.0;
/// Flinch duration before reverting from Hurt to Attack.
pub const BOSS_FLINCH_SECS: f64 = 0.5;
/// Width of the patrol window left of the anchor.
pub const BOSS_PATROL_RANGE: f32 = 300.0;
/// Horizontal distance per behavior tick while patrolling.
pub const BOSS_PATROL_STEP: f32 = 6.0;
/// Slow leftward drift used by the Walk phase.
pub const BOSS_WALK_SPEED: f32 = 0.5;

const ALERT_FRAMES: [&str; 8] = [
    "sprites/boss/alert_1.png",
    "sprites/boss/alert_2.png",
    "sprites/boss/alert_3.png",
    "sprites/boss/alert_4.png",
    "sprites/boss/alert_5.png",
    "sprites/boss/alert_6.png",
    "sprites/boss/alert_7.png",
    "sprites/boss/alert_8.png",
];

const WALK_FRAMES: [&str; 4] = [
    "sprites/boss/walk_1.png",
    "sprites/boss/walk_2.png",
    "sprites/boss/walk_3.png",
    "sprites/boss/walk_4.png",
];

const ATTACK_FRAMES: [&str; 8] = [
    "sprites/boss/attack_1.png",
    "sprites/boss/attack_2.png",
    "sprites/boss/attack_3.png",
    "sprites/boss/attack_4.png",
    "sprites/boss/attack_5.png",
    "sprites/boss/attack_6.png",
    "sprites/boss/attack_7.png",
    "sprites/boss/attack_8.png",
];

const HURT_FRAMES: [&str; 3] = [
    "sprites/boss/hurt_1.png",
    "sprites/boss/hurt_2.png",
    "sprites/boss/hurt_3.png",
];

const DEAD_FRAMES: [&str; 3] = [
    "sprites/boss/dead_1.png",
    "sprites/boss/dead_2.png",
    "sprites/boss/dead_3.png",
];

/// Boss behavior phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossPhase {
    Alert,
    Walk,
    Attack,
    Hurt,
    Dead,
}

/// Boss state: health, phase, cooldown bookkeeping, and patrol anchor.
#[derive(Component, Debug)]
pub struct Boss {
    pub health: u32,
    pub phase: BossPhase,
    pub patrol_origin: f32,
    last_hit: f64,
    hurt_until: f64,
    win_notified: bool,
}

impl Boss {
    pub fn new(x: f32) -> Self {
        Self {
            health: BOSS_HEALTH,
            phase: BossPhase::Alert,
            patrol_origin: x,
            last_hit: f64::NEG_INFINITY,
            hurt_until: 0.0,
            win_notified: false,
        }
    }

    pub fn alive(&self) -> bool {
        self.health > 0
    }

    /// Attempt a hit at time `now`, with the boss currently at `x`.
    ///
    /// Returns whether the hit was accepted. Hits inside the cooldown
    /// window and hits on a dead boss are rejected without side effects.
    /// The first accepted hit outside Attack/Hurt re-anchors the patrol
    /// at the current position.
    pub fn hit(&mut self, now: f64, x: f32) -> bool {
        if self.phase == BossPhase::Dead {
            return false;
        }
        if now - self.last_hit < BOSS_HIT_COOLDOWN_SECS {
            return false;
        }

        self.health -= 1;
        self.last_hit = now;

        if !matches!(self.phase, BossPhase::Attack | BossPhase::Hurt) {
            self.phase = BossPhase::Attack;
            self.patrol_origin = x;
        }

        if self.health == 0 {
            self.phase = BossPhase::Dead;
        } else {
            self.phase = BossPhase::Hurt;
            self.hurt_until = now + BOSS_FLINCH_SECS;
        }
        true
    }

    /// One-shot win signal, armed by death.
    ///
    /// The first call after the boss died returns `true`; every later
    /// call (and any call on a living boss) returns `false`.
    pub fn take_win_notification(&mut self) -> bool {
        if self.phase == BossPhase::Dead && !self.win_notified {
            self.win_notified = true;
            true
        } else {
            false
        }
    }

    /// Revert the flinch to Attack once its window expired.
    pub fn tick_flinch(&mut self, now: f64) {
        if self.phase == BossPhase::Hurt && now >= self.hurt_until {
            self.phase = BossPhase::Attack;
        }
    }

    /// One leftward patrol step, clamped to the anchored window.
    ///
    /// Reaching the left boundary steps back in by one increment (a soft
    /// bounce), it does not flip a persistent direction.
    pub fn patrol_step(&self, x: f32) -> f32 {
        let mut next = x - BOSS_PATROL_STEP;
        let left_boundary = self.patrol_origin - BOSS_PATROL_RANGE;
        if next < left_boundary {
            next = left_boundary + BOSS_PATROL_STEP;
        } else if next > self.patrol_origin {
            next = self.patrol_origin;
        }
        next
    }
}

/// Preloaded frame sets for every boss phase.
#[derive(Component)]
pub struct BossFrames {
    pub alert: FrameSet,
    pub walking: FrameSet,
    pub attack: FrameSet,
    pub hurt: FrameSet,
    pub dead: FrameSet,
}

impl BossFrames {
    pub fn load(asset_server: &AssetServer) -> Self {
        Self {
            alert: FrameSet::load(asset_server, &ALERT_FRAMES),
            walking: FrameSet::load(asset_server, &WALK_FRAMES),
            attack: FrameSet::load(asset_server, &ATTACK_FRAMES),
            hurt: FrameSet::load(asset_server, &HURT_FRAMES),
            dead: FrameSet::load(asset_server, &DEAD_FRAMES),
        }
    }
}

/// Drive the boss phase machine; runs on the 200 ms behavior tick.
pub fn boss_behavior(
    time: Res<Time>,
    mut boss_query: Query<(&mut Boss, &mut Position, &mut BossFrames, &mut Sprite)>,
) {
    let Ok((mut boss, mut pos, mut frames, mut sprite)) = boss_query.get_single_mut() else {
        return;
    };

    boss.tick_flinch(time.elapsed_secs_f64());

    match boss.phase {
        BossPhase::Alert => {
            sprite.image = frames.alert.advance();
        }
        BossPhase::Walk => {
            sprite.image = frames.walking.advance();
            pos.x -= BOSS_WALK_SPEED;
        }
        BossPhase::Attack => {
            sprite.image = frames.attack.advance();
            pos.x = boss.patrol_step(pos.x);
        }
        BossPhase::Hurt => {
            sprite.image = frames.hurt.advance();
            pos.x = boss.patrol_step(pos.x);
        }
        // The death sequence runs in its own system.
        BossPhase::Dead => {}
    }
}

/// Play the death frames once, then signal the win exactly once.
pub fn boss_death(
    mut next_state: ResMut<NextState<GameState>>,
    mut boss_query: Query<(&mut Boss, &mut BossFrames, &mut Sprite)>,
) {
    let Ok((mut boss, mut frames, mut sprite)) = boss_query.get_single_mut() else {
        return;
    };
    if boss.phase != BossPhase::Dead {
        return;
    }

    match frames.dead.advance_once() {
        Some(frame) => sprite.image = frame,
        None => {
            if boss.take_win_notification() {
                next_state.set(GameState::Won);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_inside_cooldown_is_rejected() {
        let mut boss = Boss::new(2800.0);
        assert!(boss.hit(10.0, 2800.0));
        assert_eq!(boss.health, 4);

        // Within the window: rejected, nothing changes.
        let phase_before = boss.phase;
        assert!(!boss.hit(10.5, 2800.0));
        assert_eq!(boss.health, 4);
        assert_eq!(boss.phase, phase_before);
    }

    #[test]
    fn hit_at_exactly_one_second_is_accepted() {
        let mut boss = Boss::new(2800.0);
        assert!(boss.hit(0.0, 2800.0));
        assert!(boss.hit(BOSS_HIT_COOLDOWN_SECS, 2800.0));
        assert_eq!(boss.health, 3);
    }

    #[test]
    fn first_hit_anchors_the_patrol() {
        let mut boss = Boss::new(2800.0);
        assert!(boss.hit(0.0, 2650.0));
        assert_eq!(boss.patrol_origin, 2650.0);

        // Later hits do not move the anchor.
        assert!(boss.hit(2.0, 2500.0));
        assert_eq!(boss.patrol_origin, 2650.0);
    }

    #[test]
    fn lifecycle_alert_to_dead_is_terminal() {
        let mut boss = Boss::new(2800.0);
        assert_eq!(boss.phase, BossPhase::Alert);

        for i in 0..4 {
            assert!(boss.hit(i as f64 * 1.5, 2800.0));
            assert_eq!(boss.phase, BossPhase::Hurt);
            boss.tick_flinch(i as f64 * 1.5 + BOSS_FLINCH_SECS);
            assert_eq!(boss.phase, BossPhase::Attack);
        }

        assert!(boss.hit(10.0, 2800.0));
        assert_eq!(boss.health, 0);
        assert_eq!(boss.phase, BossPhase::Dead);
        assert!(!boss.alive());

        // A sixth hit is a no-op.
        assert!(!boss.hit(20.0, 2800.0));
        assert_eq!(boss.health, 0);
        assert_eq!(boss.phase, BossPhase::Dead);
    }

    #[test]
    fn flinch_reverts_to_attack_only_after_window() {
        let mut boss = Boss::new(2800.0);
        boss.hit(0.0, 2800.0);
        boss.tick_flinch(0.3);
        assert_eq!(boss.phase, BossPhase::Hurt);
        boss.tick_flinch(BOSS_FLINCH_SECS);
        assert_eq!(boss.phase, BossPhase::Attack);
    }

    #[test]
    fn patrol_clamps_and_soft_bounces() {
        let boss = {
            let mut b = Boss::new(2800.0);
            b.hit(0.0, 2800.0);
            b
        };

        // Normal step moves left.
        assert_eq!(boss.patrol_step(2800.0), 2794.0);

        // Crossing the left boundary bounces back inside by one step.
        let left = boss.patrol_origin - BOSS_PATROL_RANGE;
        assert_eq!(boss.patrol_step(left + 1.0), left + BOSS_PATROL_STEP);

        // Never drifts right of the anchor.
        assert!(boss.patrol_step(boss.patrol_origin + 50.0) <= boss.patrol_origin);
    }

    #[test]
    fn win_is_notified_exactly_once() {
        let mut boss = Boss::new(2800.0);

        // A living boss never signals the win.
        assert!(!boss.take_win_notification());

        for i in 0..5 {
            assert!(boss.hit(i as f64 * 2.0, 2800.0));
        }
        assert_eq!(boss.phase, BossPhase::Dead);

        // Drive the death frames to exhaustion twice; the signal fires on
        // the first exhausted tick only.
        let mut dead = FrameSet::new(vec![Handle::default(); 3]);
        let mut notifications = 0;
        for _ in 0..8 {
            if dead.advance_once().is_none() && boss.take_win_notification() {
                notifications += 1;
            }
        }
        assert_eq!(notifications, 1);
    }

    #[test]
    fn walk_phase_is_reachable_by_assignment() {
        let mut boss = Boss::new(2800.0);
        boss.phase = BossPhase::Walk;

        // A hit from Walk starts the attack and re-anchors the patrol.
        assert!(boss.hit(0.0, 2700.0));
        assert_eq!(boss.patrol_origin, 2700.0);
        assert_eq!(boss.phase, BossPhase::Hurt);
    }
}
