//! World-space position component.
//!
//! World coordinates are y-up, matching the orthographic projection each demo
//! declares through [`Viewport`](crate::resources::viewport::Viewport).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Anchor of an entity in world units. Sprites and tiles are centered on it.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

/// Candidate position produced by a controller this tick.
///
/// The movement system decides whether it is applied; see
/// [`bounded_movement`](crate::systems::movement::bounded_movement).
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct PendingMove {
    pub target: Option<Vector2>,
}
