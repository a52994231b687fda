//! Keyboard walking controller.
//!
//! Reads the shared [`InputState`] and, for every entity with a
//! [`WalkController`], resolves one horizontal and one vertical step:
//!
//! 1. Right (`D`/`→`) wins over left (`A`/`←`). Right clears the horizontal
//!    flip, left sets it.
//! 2. Up (`W`/`↑`) wins over down (`S`/`↓`).
//! 3. Each resolved step sets the facing row right away. When both axes move,
//!    the vertical row is the one left on the sprite.
//! 4. The new position is only proposed through [`PendingMove`]; see
//!    [`bounded_movement`](crate::systems::movement::bounded_movement).
//!
//! With [`ScreenEdgeBounds`](crate::components::walkcontroller::ScreenEdgeBounds)
//! the edge test is combined as `letter || (arrow && edge_clear)`, so it only
//! stops the arrow keys.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::{AnimationState, Direction, Motion};
use crate::components::mapposition::{MapPosition, PendingMove};
use crate::components::sprite::Sprite;
use crate::components::walkcontroller::{ScreenEdgeBounds, WalkController};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Outcome of resolving input for one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkStep {
    pub target: Vector2,
    pub row: Option<usize>,
    pub flip_h: Option<bool>,
    pub motion: Motion,
}

/// Resolve the input snapshot for one walker at `pos`.
pub fn resolve_walk(
    controller: &WalkController,
    input: &InputState,
    pos: Vector2,
    extents: Vector2,
    dt: f32,
) -> WalkStep {
    let step = controller.speed * dt;
    let edges = controller.edges;
    let clear = |test: fn(&ScreenEdgeBounds, Vector2, Vector2) -> bool| {
        edges.is_none_or(|e| test(&e, pos, extents))
    };

    let mut out = WalkStep {
        target: pos,
        row: None,
        flip_h: None,
        motion: Motion::Idle,
    };

    let right = input.maindirection_right.active
        || (input.secondarydirection_right.active && clear(|e, p, x| e.right_clear(p, x)));
    let left = input.maindirection_left.active
        || (input.secondarydirection_left.active && clear(|e, p, x| e.left_clear(p, x)));
    if right {
        out.target.x += step;
        out.row = Some(controller.rows.right);
        out.flip_h = Some(false);
        out.motion = Motion::Moving(Direction::Right);
    } else if left {
        out.target.x -= step;
        out.row = Some(controller.rows.left);
        out.flip_h = Some(true);
        out.motion = Motion::Moving(Direction::Left);
    }

    if !controller.vertical {
        return out;
    }
    let up = input.maindirection_up.active
        || (input.secondarydirection_up.active && clear(|e, p, x| e.up_clear(p, x)));
    let down = input.maindirection_down.active
        || (input.secondarydirection_down.active && clear(|e, p, x| e.down_clear(p, x)));
    if up {
        out.target.y += step;
        out.row = Some(controller.rows.up);
        out.motion = Motion::Moving(Direction::Up);
    } else if down {
        out.target.y -= step;
        out.row = Some(controller.rows.down);
        out.motion = Motion::Moving(Direction::Down);
    }

    out
}

/// Apply walking input to every controlled entity.
pub fn walk_controller(
    mut query: Query<(
        &WalkController,
        &MapPosition,
        &mut Sprite,
        &mut AnimationState,
        &mut PendingMove,
    )>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    for (controller, position, mut sprite, mut animation, mut pending) in query.iter_mut() {
        let step = resolve_walk(
            controller,
            &input,
            position.pos,
            sprite.extents(),
            time.delta,
        );
        if let Some(row) = step.row {
            animation.current_row = row;
        }
        if let Some(flip) = step.flip_h {
            sprite.flip_h = flip;
        }
        animation.motion = step.motion;
        pending.target = match step.motion {
            Motion::Idle => None,
            Motion::Moving(_) => Some(step.target),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::walkcontroller::RowMap;

    fn controller() -> WalkController {
        WalkController::new(1.0, RowMap::new(0, 2, 0, 1))
    }

    fn extents() -> Vector2 {
        Vector2 { x: 90.0, y: 90.0 }
    }

    fn edges() -> ScreenEdgeBounds {
        ScreenEdgeBounds::new(
            Vector2 { x: -20.0, y: -20.0 },
            Vector2 { x: 820.0, y: 420.0 },
        )
    }

    #[test]
    fn test_no_input_is_idle() {
        let step = resolve_walk(
            &controller(),
            &InputState::default(),
            Vector2 { x: 5.0, y: 5.0 },
            extents(),
            0.5,
        );
        assert_eq!(step.motion, Motion::Idle);
        assert_eq!(step.target, Vector2 { x: 5.0, y: 5.0 });
        assert_eq!(step.row, None);
        assert_eq!(step.flip_h, None);
    }

    #[test]
    fn test_right_wins_over_left() {
        let mut input = InputState::default();
        input.maindirection_right.active = true;
        input.maindirection_left.active = true;
        let step = resolve_walk(&controller(), &input, Vector2 { x: 0.0, y: 0.0 }, extents(), 2.0);
        assert_eq!(step.target, Vector2 { x: 2.0, y: 0.0 });
        assert_eq!(step.row, Some(1));
        assert_eq!(step.flip_h, Some(false));
        assert_eq!(step.motion, Motion::Moving(Direction::Right));
    }

    #[test]
    fn test_left_flips() {
        let mut input = InputState::default();
        input.secondarydirection_left.active = true;
        let step = resolve_walk(&controller(), &input, Vector2 { x: 0.0, y: 0.0 }, extents(), 1.0);
        assert_eq!(step.target.x, -1.0);
        assert_eq!(step.flip_h, Some(true));
    }

    #[test]
    fn test_vertical_row_overrides_horizontal() {
        let mut input = InputState::default();
        input.maindirection_right.active = true;
        input.maindirection_down.active = true;
        let step = resolve_walk(&controller(), &input, Vector2 { x: 0.0, y: 0.0 }, extents(), 1.0);
        assert_eq!(step.target, Vector2 { x: 1.0, y: -1.0 });
        assert_eq!(step.row, Some(2));
        assert_eq!(step.flip_h, Some(false));
        assert_eq!(step.motion, Motion::Moving(Direction::Down));
    }

    #[test]
    fn test_edge_bounds_stop_arrow_key() {
        let ctrl = controller().with_edges(edges());
        let mut input = InputState::default();
        input.secondarydirection_right.active = true;
        // 800 + 90 / 1.8 = 850 is past 820
        let step = resolve_walk(&ctrl, &input, Vector2 { x: 800.0, y: 100.0 }, extents(), 1.0);
        assert_eq!(step.motion, Motion::Idle);
        assert_eq!(step.target.x, 800.0);
    }

    #[test]
    fn test_edge_bounds_do_not_stop_letter_key() {
        // `D || (RIGHT && clear)`: the letter key ignores the edge test
        let ctrl = controller().with_edges(edges());
        let mut input = InputState::default();
        input.maindirection_right.active = true;
        let step = resolve_walk(&ctrl, &input, Vector2 { x: 800.0, y: 100.0 }, extents(), 1.0);
        assert_eq!(step.target.x, 801.0);
        assert_eq!(step.motion, Motion::Moving(Direction::Right));
    }

    #[test]
    fn test_blocked_right_arrow_falls_through_to_left() {
        let ctrl = controller().with_edges(edges());
        let mut input = InputState::default();
        input.secondarydirection_right.active = true;
        input.maindirection_left.active = true;
        let step = resolve_walk(&ctrl, &input, Vector2 { x: 800.0, y: 100.0 }, extents(), 1.0);
        assert_eq!(step.target.x, 799.0);
        assert_eq!(step.flip_h, Some(true));
    }

    #[test]
    fn test_horizontal_only_ignores_up_and_down() {
        let ctrl = WalkController::new(0.0, RowMap::new(0, 0, 0, 0)).horizontal_only();
        let mut input = InputState::default();
        input.secondarydirection_up.active = true;
        let step = resolve_walk(&ctrl, &input, Vector2 { x: 4.0, y: 4.0 }, extents(), 1.0);
        assert_eq!(step.motion, Motion::Idle);

        input.secondarydirection_left.active = true;
        let step = resolve_walk(&ctrl, &input, Vector2 { x: 4.0, y: 4.0 }, extents(), 1.0);
        assert_eq!(step.motion, Motion::Moving(Direction::Left));
        assert_eq!(step.flip_h, Some(true));
        // Zero speed: facing changes, position does not
        assert_eq!(step.target, Vector2 { x: 4.0, y: 4.0 });
    }

    #[test]
    fn test_edge_bounds_vertical() {
        let ctrl = controller().with_edges(edges());
        let mut input = InputState::default();
        input.secondarydirection_up.active = true;
        let blocked = resolve_walk(&ctrl, &input, Vector2 { x: 100.0, y: 400.0 }, extents(), 1.0);
        assert_eq!(blocked.motion, Motion::Idle);
        let free = resolve_walk(&ctrl, &input, Vector2 { x: 100.0, y: 100.0 }, extents(), 1.0);
        assert_eq!(free.target.y, 101.0);
    }
}
