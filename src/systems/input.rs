//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::resources::input::InputState;

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    for key in input.keys_mut() {
        key.active = rl.is_key_down(key.key_binding);
        key.just_pressed = rl.is_key_pressed(key.key_binding);
    }

    input.mouse.position = rl.get_mouse_position();
    input.mouse.left_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    input.mouse.right_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_RIGHT);
}
