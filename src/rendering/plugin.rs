use std::time::Duration;

use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;

use super::systems::{camera_follow, cloud_drift, sync_transforms};
use crate::core::GameState;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                cloud_drift.run_if(on_timer(Duration::from_millis(16))),
                camera_follow,
                sync_transforms,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
    }
}
