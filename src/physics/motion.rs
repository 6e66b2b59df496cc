//! Movement components and gravity integration.

use bevy::prelude::*;

/// Vertical launch speed applied by a jump.
pub const JUMP_LAUNCH_SPEED: f32 = 22.0;

/// Feet line the character rests on when no living ground enemy is nearby.
pub const BASELINE_FEET: f32 = 460.0;

/// World-space position, top-left corner, y growing downward.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Fixed per-type drawing and collision dimensions.
#[derive(Component, Debug, Clone, Copy)]
pub struct BodySize {
    pub w: f32,
    pub h: f32,
}

impl BodySize {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// Facing flag - entities facing left are drawn mirrored.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Facing {
    pub left: bool,
}

/// Horizontal speed applied per movement tick.
#[derive(Component, Debug, Clone, Copy)]
pub struct WalkSpeed(pub f32);

/// Vertical velocity state for gravity-affected entities.
///
/// `speed_y` is positive when moving up; each gravity step subtracts the
/// acceleration from it and subtracts the result from y.
#[derive(Component, Debug, Clone, Copy)]
pub struct VerticalMotion {
    pub speed_y: f32,
    pub acceleration: f32,
}

impl Default for VerticalMotion {
    fn default() -> Self {
        Self {
            speed_y: 0.0,
            acceleration: 1.0,
        }
    }
}

impl VerticalMotion {
    /// One gravity integration step: decay vertical speed, move along y.
    pub fn gravity_step(&mut self, y: &mut f32) {
        self.speed_y -= self.acceleration;
        *y -= self.speed_y;
    }

    /// Set the upward launch speed of a jump.
    pub fn jump(&mut self) {
        self.speed_y = JUMP_LAUNCH_SPEED;
    }

    /// Whether the entity is currently descending.
    pub fn falling(&self) -> bool {
        self.speed_y < 0.0
    }
}

/// Computes the y the character's top rests on.
///
/// The ground line is not a constant: it is the maximum feet line
/// (`y + height`) among all living ground enemies, so the character can
/// stand on the tallest nearby enemy silhouette. Falls back to the fixed
/// baseline when no living enemy exists.
pub fn ground_top(char_height: f32, living_feet: impl Iterator<Item = f32>) -> f32 {
    let max_feet = living_feet.fold(f32::NEG_INFINITY, f32::max);
    let feet = if max_feet.is_finite() {
        max_feet
    } else {
        BASELINE_FEET
    };
    feet - char_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_step_integrates_downward() {
        let mut motion = VerticalMotion::default();
        let mut y = 100.0;

        motion.gravity_step(&mut y);
        assert_eq!(motion.speed_y, -1.0);
        assert_eq!(y, 101.0);

        motion.gravity_step(&mut y);
        assert_eq!(motion.speed_y, -2.0);
        assert_eq!(y, 103.0);
    }

    #[test]
    fn jump_rises_then_falls() {
        let mut motion = VerticalMotion::default();
        let mut y = 76.0;
        motion.jump();
        assert_eq!(motion.speed_y, JUMP_LAUNCH_SPEED);

        // First step moves up (speed still positive after decay).
        motion.gravity_step(&mut y);
        assert!(y < 76.0);
        assert!(!motion.falling());

        // Enough steps eventually turn the motion downward.
        for _ in 0..30 {
            motion.gravity_step(&mut y);
        }
        assert!(motion.falling());
    }

    #[test]
    fn ground_top_falls_back_to_baseline() {
        let top = ground_top(384.0, std::iter::empty());
        assert_eq!(top, BASELINE_FEET - 384.0);
    }

    #[test]
    fn ground_top_uses_tallest_enemy_feet() {
        // Two enemies, feet lines at 440 and 460.
        let top = ground_top(384.0, [440.0, 460.0].into_iter());
        assert_eq!(top, 460.0 - 384.0);

        // Only the small one alive: the ground plane follows it.
        let top = ground_top(384.0, [440.0].into_iter());
        assert_eq!(top, 440.0 - 384.0);
    }
}
