use bevy::prelude::*;

use crate::physics::{BodySize, EntityKind, Facing, Position};
use crate::player::Player;

/// Camera x offset ahead of the player, matching the scrolling viewport.
const CAMERA_LEAD_X: f32 = 260.0;
/// Half the 480 px viewport height, negated into Bevy's y-up space.
const CAMERA_Y: f32 = -240.0;

/// Leftward cloud drift per 60 Hz tick.
const CLOUD_DRIFT: f32 = 0.15;

/// Marker for the in-game world camera.
#[derive(Component)]
pub struct GameCamera;

/// Draw-order bucket; maps to the sprite's z translation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Clouds,
    Pickups,
    Enemies,
    Player,
    Projectiles,
}

impl Layer {
    pub fn z(self) -> f32 {
        match self {
            Layer::Background => 0.0,
            Layer::Clouds => 1.0,
            Layer::Pickups => 2.0,
            Layer::Enemies => 3.0,
            Layer::Player => 4.0,
            Layer::Projectiles => 5.0,
        }
    }
}

/// Keep the camera a fixed lead ahead of the player.
pub fn camera_follow(
    player: Query<&Position, With<Player>>,
    mut camera: Query<&mut Transform, (With<GameCamera>, Without<Player>)>,
) {
    let Ok(pos) = player.get_single() else {
        return;
    };
    let Ok(mut transform) = camera.get_single_mut() else {
        return;
    };
    transform.translation.x = pos.x + CAMERA_LEAD_X;
    transform.translation.y = CAMERA_Y;
}

/// Map simulation coordinates onto transforms and mirror faced-left sprites.
///
/// Positions are top-left anchored with y growing downward; Bevy sprites
/// are center anchored with y growing upward, hence the half-size shift
/// and the negation.
pub fn sync_transforms(
    mut entities: Query<(
        &Position,
        &BodySize,
        &Layer,
        &mut Transform,
        Option<&Facing>,
        &mut Sprite,
    )>,
) {
    for (pos, size, layer, mut transform, facing, mut sprite) in &mut entities {
        transform.translation.x = pos.x + size.w / 2.0;
        transform.translation.y = -(pos.y + size.h / 2.0);
        transform.translation.z = layer.z();

        if let Some(facing) = facing {
            sprite.flip_x = facing.left;
        }
    }
}

/// Slow constant leftward drift for the cloud layer.
pub fn cloud_drift(mut clouds: Query<(&mut Position, &EntityKind)>) {
    for (mut pos, kind) in &mut clouds {
        if *kind == EntityKind::Cloud {
            pos.x -= CLOUD_DRIFT;
        }
    }
}
