//! Keyboard binding for the input flags resource.

use bevy::prelude::*;

use crate::core::GameState;

/// Flat boolean input flags read by the simulation every movement tick.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Edge-triggered: set on key press, cleared by the throw handler.
    pub throw: bool,
}

impl InputState {
    /// Whether any directional or jump input is active.
    pub fn directional(&self) -> bool {
        self.left || self.right || self.up
    }
}

/// Input plugin - owns the flags resource and its keyboard binding.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>().add_systems(
            Update,
            read_keyboard.run_if(in_state(GameState::InGame)),
        );
    }
}

/// Map held arrow keys to flags; latch the throw key on press.
fn read_keyboard(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputState>) {
    input.left = keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::ArrowRight);
    input.up = keyboard.pressed(KeyCode::ArrowUp);
    input.down = keyboard.pressed(KeyCode::ArrowDown);

    // Holding the key does not auto-repeat: the tick handler resets the
    // flag after spawning a bottle.
    if keyboard.just_pressed(KeyCode::KeyD) {
        input.throw = true;
    }
    if keyboard.just_released(KeyCode::KeyD) {
        input.throw = false;
    }
}
