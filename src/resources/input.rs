//! Per-tick input snapshot.
//!
//! [`update_input_state`](crate::systems::input::update_input_state) polls the
//! window once per frame and writes the result here. Every other system reads
//! this snapshot, so input handling never re-enters the update step.
//!
//! Letter keys (WASD) and arrow keys are kept apart because some controllers
//! treat them differently, see
//! [`ScreenEdgeBounds`](crate::components::walkcontroller::ScreenEdgeBounds).
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Mouse cursor and button edges, in window pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub position: Vector2,
    pub left_pressed: bool,
    pub right_pressed: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    // WASD
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    pub action_back: BoolState,
    pub mouse: MouseState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound_to(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound_to(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound_to(KeyboardKey::KEY_D),
            secondarydirection_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            secondarydirection_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            secondarydirection_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            secondarydirection_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mouse: MouseState::default(),
        }
    }
}

impl InputState {
    pub fn right(&self) -> bool {
        self.maindirection_right.active || self.secondarydirection_right.active
    }

    pub fn left(&self) -> bool {
        self.maindirection_left.active || self.secondarydirection_left.active
    }

    pub fn up(&self) -> bool {
        self.maindirection_up.active || self.secondarydirection_up.active
    }

    pub fn down(&self) -> bool {
        self.maindirection_down.active || self.secondarydirection_down.active
    }

    /// Every key slot, for polling.
    pub fn keys_mut(&mut self) -> [&mut BoolState; 9] {
        [
            &mut self.maindirection_up,
            &mut self.maindirection_left,
            &mut self.maindirection_down,
            &mut self.maindirection_right,
            &mut self.secondarydirection_up,
            &mut self.secondarydirection_down,
            &mut self.secondarydirection_left,
            &mut self.secondarydirection_right,
            &mut self.action_back,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.maindirection_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.maindirection_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.maindirection_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.maindirection_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.secondarydirection_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(
            input.secondarydirection_down.key_binding,
            KeyboardKey::KEY_DOWN
        );
        assert_eq!(
            input.secondarydirection_left.key_binding,
            KeyboardKey::KEY_LEFT
        );
        assert_eq!(
            input.secondarydirection_right.key_binding,
            KeyboardKey::KEY_RIGHT
        );
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
    }

    #[test]
    fn test_direction_helpers_merge_both_key_sets() {
        let mut input = InputState::default();
        assert!(!input.right() && !input.left() && !input.up() && !input.down());
        input.secondarydirection_right.active = true;
        assert!(input.right());
        input.maindirection_up.active = true;
        assert!(input.up());
        assert!(!input.left());
        assert!(!input.down());
    }

    #[test]
    fn test_keys_mut_covers_all_bindings() {
        let mut input = InputState::default();
        for key in input.keys_mut() {
            key.active = true;
        }
        assert!(input.left() && input.right() && input.up() && input.down());
        assert!(input.action_back.active);
    }
}
