//! Offset-aware AABB collision detection.
//!
//! Every collidable entity carries an [`EntityKind`] tag which indexes a
//! static table of hitbox insets (how far the collision box is shrunk from
//! the sprite rectangle on each side). Kinds without an entry collide with
//! their full sprite rectangle.

use bevy::prelude::*;

/// Closed set of entity kinds, used to index the hitbox inset table.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Boss,
    Chicken,
    SmallChicken,
    Coin,
    Bottle,
    ThrownBottle,
    Cloud,
    Background,
}

/// Per-side inward offsets shrinking a sprite rectangle to its hitbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitboxInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl HitboxInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// Tighter body box used when the player participates in a collision test.
///
/// The table entry for `Player` keeps the wider sprite-aligned box used for
/// feet-line math; actual contact tests use this one.
pub const PLAYER_BODY_INSETS: HitboxInsets = HitboxInsets::new(152.0, 24.0, 44.0, 44.0);

/// Static hitbox inset table keyed by entity kind.
pub const fn insets_for(kind: EntityKind) -> HitboxInsets {
    match kind {
        EntityKind::Player => HitboxInsets::new(190.0, 30.0, 55.0, 55.0),
        EntityKind::Boss => HitboxInsets::new(70.0, 20.0, 20.0, 20.0),
        EntityKind::Coin => HitboxInsets::new(40.0, 40.0, 40.0, 40.0),
        EntityKind::Bottle | EntityKind::ThrownBottle => HitboxInsets::new(10.0, 10.0, 40.0, 40.0),
        EntityKind::Chicken
        | EntityKind::SmallChicken
        | EntityKind::Cloud
        | EntityKind::Background => HitboxInsets::ZERO,
    }
}

/// An axis-aligned sprite rectangle in world space (top-left origin).
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_parts(pos: &super::Position, size: &super::BodySize) -> Self {
        Self::new(pos.x, pos.y, size.w, size.h)
    }

    /// The y of this box's hitbox top edge (head line).
    pub fn head_line(&self, insets: &HitboxInsets) -> f32 {
        self.y + insets.top
    }

    /// The y of this box's hitbox bottom edge (feet line).
    pub fn feet_line(&self, insets: &HitboxInsets) -> f32 {
        self.y + self.h - insets.bottom
    }
}

/// Strict overlap test between two inset-shrunk rectangles.
///
/// Touching edges do not count as a collision.
pub fn overlaps(a: &Aabb, a_insets: &HitboxInsets, b: &Aabb, b_insets: &HitboxInsets) -> bool {
    a.x + a_insets.left < b.x + b.w - b_insets.right
        && a.x + a.w - a_insets.right > b.x + b_insets.left
        && a.y + a_insets.top < b.y + b.h - b_insets.bottom
        && a.y + a.h - a_insets.bottom > b.y + b_insets.top
}

/// Overlap test between two entities using their table insets.
pub fn kinds_collide(a: &Aabb, a_kind: EntityKind, b: &Aabb, b_kind: EntityKind) -> bool {
    overlaps(a, &insets_for(a_kind), b, &insets_for(b_kind))
}

/// Overlap test with the player's tight body box against a table-keyed kind.
pub fn player_collides(player: &Aabb, other: &Aabb, other_kind: EntityKind) -> bool {
    overlaps(player, &PLAYER_BODY_INSETS, other, &insets_for(other_kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_expected_entries() {
        assert_eq!(insets_for(EntityKind::Boss), HitboxInsets::new(70.0, 20.0, 20.0, 20.0));
        assert_eq!(insets_for(EntityKind::Coin), HitboxInsets::new(40.0, 40.0, 40.0, 40.0));
        assert_eq!(
            insets_for(EntityKind::Bottle),
            insets_for(EntityKind::ThrownBottle)
        );
        // Non-combat kinds fall through to zero insets.
        assert_eq!(insets_for(EntityKind::Cloud), HitboxInsets::ZERO);
        assert_eq!(insets_for(EntityKind::Background), HitboxInsets::ZERO);
    }

    #[test]
    fn zero_inset_boxes_overlap() {
        let a = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let b = Aabb::new(50.0, 50.0, 100.0, 100.0);
        assert!(overlaps(&a, &HitboxInsets::ZERO, &b, &HitboxInsets::ZERO));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let b = Aabb::new(100.0, 0.0, 100.0, 100.0);
        assert!(!overlaps(&a, &HitboxInsets::ZERO, &b, &HitboxInsets::ZERO));
    }

    #[test]
    fn insets_shrink_the_hitbox() {
        let a = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let b = Aabb::new(90.0, 0.0, 100.0, 100.0);
        assert!(overlaps(&a, &HitboxInsets::ZERO, &b, &HitboxInsets::ZERO));

        // 20 units trimmed off the facing sides pulls the boxes apart.
        let trimmed = HitboxInsets::new(0.0, 0.0, 20.0, 20.0);
        assert!(!overlaps(&a, &trimmed, &b, &trimmed));
    }

    #[test]
    fn player_body_box_is_tighter_than_table_entry() {
        let insets = insets_for(EntityKind::Player);
        assert!(PLAYER_BODY_INSETS.top < insets.top);
        assert!(PLAYER_BODY_INSETS.left < insets.left);
    }

    #[test]
    fn head_and_feet_lines_respect_insets() {
        let sprite = Aabb::new(0.0, 360.0, 100.0, 100.0);
        assert_eq!(sprite.head_line(&HitboxInsets::ZERO), 360.0);
        assert_eq!(sprite.feet_line(&HitboxInsets::ZERO), 460.0);

        let insets = HitboxInsets::new(10.0, 20.0, 0.0, 0.0);
        assert_eq!(sprite.head_line(&insets), 370.0);
        assert_eq!(sprite.feet_line(&insets), 440.0);
    }
}
