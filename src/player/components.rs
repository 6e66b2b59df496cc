//! Player-related components.

use bevy::prelude::*;

use crate::animation::FrameSet;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Player sprite dimensions.
pub const PLAYER_WIDTH: f32 = 160.0;
pub const PLAYER_HEIGHT: f32 = 384.0;

/// Horizontal distance covered per movement tick.
pub const PLAYER_WALK_SPEED: f32 = 10.0;

/// Inactivity span after which the idle animation becomes sleeping.
pub const SLEEP_AFTER_SECS: f64 = 15.0;

const WALK_FRAMES: [&str; 6] = [
    "sprites/player/walk_1.png",
    "sprites/player/walk_2.png",
    "sprites/player/walk_3.png",
    "sprites/player/walk_4.png",
    "sprites/player/walk_5.png",
    "sprites/player/walk_6.png",
];

const JUMP_FRAMES: [&str; 9] = [
    "sprites/player/jump_1.png",
    "sprites/player/jump_2.png",
    "sprites/player/jump_3.png",
    "sprites/player/jump_4.png",
    "sprites/player/jump_5.png",
    "sprites/player/jump_6.png",
    "sprites/player/jump_7.png",
    "sprites/player/jump_8.png",
    "sprites/player/jump_9.png",
];

const HURT_FRAMES: [&str; 3] = [
    "sprites/player/hurt_1.png",
    "sprites/player/hurt_2.png",
    "sprites/player/hurt_3.png",
];

const DEAD_FRAMES: [&str; 7] = [
    "sprites/player/dead_1.png",
    "sprites/player/dead_2.png",
    "sprites/player/dead_3.png",
    "sprites/player/dead_4.png",
    "sprites/player/dead_5.png",
    "sprites/player/dead_6.png",
    "sprites/player/dead_7.png",
];

const IDLE_FRAMES: [&str; 10] = [
    "sprites/player/idle_1.png",
    "sprites/player/idle_2.png",
    "sprites/player/idle_3.png",
    "sprites/player/idle_4.png",
    "sprites/player/idle_5.png",
    "sprites/player/idle_6.png",
    "sprites/player/idle_7.png",
    "sprites/player/idle_8.png",
    "sprites/player/idle_9.png",
    "sprites/player/idle_10.png",
];

const SLEEP_FRAMES: [&str; 10] = [
    "sprites/player/sleep_1.png",
    "sprites/player/sleep_2.png",
    "sprites/player/sleep_3.png",
    "sprites/player/sleep_4.png",
    "sprites/player/sleep_5.png",
    "sprites/player/sleep_6.png",
    "sprites/player/sleep_7.png",
    "sprites/player/sleep_8.png",
    "sprites/player/sleep_9.png",
    "sprites/player/sleep_10.png",
];

/// Preloaded animation frame sets for every player state.
#[derive(Component)]
pub struct PlayerSprites {
    pub walking: FrameSet,
    pub jumping: FrameSet,
    pub hurt: FrameSet,
    pub dead: FrameSet,
    pub idle: FrameSet,
    pub sleep: FrameSet,
}

impl PlayerSprites {
    pub fn load(asset_server: &AssetServer) -> Self {
        Self {
            walking: FrameSet::load(asset_server, &WALK_FRAMES),
            jumping: FrameSet::load(asset_server, &JUMP_FRAMES),
            hurt: FrameSet::load(asset_server, &HURT_FRAMES),
            dead: FrameSet::load(asset_server, &DEAD_FRAMES),
            idle: FrameSet::load(asset_server, &IDLE_FRAMES),
            sleep: FrameSet::load(asset_server, &SLEEP_FRAMES),
        }
    }
}

/// Tracks the last directional input to drive the idle/sleep transition.
#[derive(Component, Debug, Clone, Copy)]
pub struct ActivityClock {
    pub last_active: f64,
    /// Whether the sleep animation is currently showing (snore cue edge).
    pub sleeping: bool,
}

impl Default for ActivityClock {
    fn default() -> Self {
        Self {
            last_active: 0.0,
            sleeping: false,
        }
    }
}

impl ActivityClock {
    /// Reset the inactivity timer.
    pub fn touch(&mut self, now: f64) {
        self.last_active = now;
        self.sleeping = false;
    }

    /// Whether the character has been idle long enough to fall asleep.
    pub fn asleep_at(&self, now: f64) -> bool {
        now - self.last_active >= SLEEP_AFTER_SECS
    }
}

/// Gate disabling movement for the rest of the run (set on death).
#[derive(Component, Debug, Clone, Copy)]
pub struct MoveControl {
    pub can_move: bool,
}

impl Default for MoveControl {
    fn default() -> Self {
        Self { can_move: true }
    }
}

/// One-shot death sequence: plays the dead frames on a fixed cadence,
/// then notifies game over exactly once.
#[derive(Component)]
pub struct DyingSequence {
    pub timer: Timer,
    pub notified: bool,
}

impl Default for DyingSequence {
    fn default() -> Self {
        Self {
            timer: Timer::new(std::time::Duration::from_millis(100), TimerMode::Repeating),
            notified: false,
        }
    }
}

impl DyingSequence {
    /// One-shot game-over signal, fired once the dead frames ran out.
    ///
    /// Returns `true` on the first call only.
    pub fn take_notification(&mut self) -> bool {
        if self.notified {
            false
        } else {
            self.notified = true;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_clock_sleeps_after_fifteen_seconds() {
        let mut clock = ActivityClock::default();
        clock.touch(100.0);
        assert!(!clock.asleep_at(100.0 + SLEEP_AFTER_SECS - 0.1));
        assert!(clock.asleep_at(100.0 + SLEEP_AFTER_SECS));
    }

    #[test]
    fn touch_resets_the_sleep_window() {
        let mut clock = ActivityClock::default();
        clock.touch(0.0);
        clock.sleeping = true;
        clock.touch(14.9);
        assert!(!clock.sleeping);
        assert!(!clock.asleep_at(20.0));
        assert!(clock.asleep_at(14.9 + SLEEP_AFTER_SECS));
    }

    #[test]
    fn death_sequence_notifies_exactly_once() {
        let mut dying = DyingSequence::default();
        let mut dead = FrameSet::new(vec![Handle::default(); DEAD_FRAMES.len()]);

        // Drive well past exhaustion; the game-over signal fires on the
        // first exhausted tick only.
        let mut notifications = 0;
        for _ in 0..DEAD_FRAMES.len() * 2 {
            if dead.advance_once().is_none() && dying.take_notification() {
                notifications += 1;
            }
        }
        assert_eq!(notifications, 1);
    }
}
