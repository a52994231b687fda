//! Keyboard-driven walking.
//!
//! A [`WalkController`] turns the per-tick
//! [`InputState`](crate::resources::input::InputState) into a facing row, a
//! horizontal flip and a candidate position. The
//! [`walk_controller`](crate::systems::walk::walk_controller) system applies it.
//!
//! Optional movement limits:
//! - [`ScreenEdgeBounds`] – per-key edge test on the arrow keys only
//! - [`DiamondBounded`] – reject candidates outside an isometric map

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::resources::isomap::DiamondBounds;

/// Atlas row shown for each walking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMap {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
}

impl RowMap {
    pub fn new(up: usize, down: usize, left: usize, right: usize) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }
}

/// World rectangle the sprite's edge must stay inside when moved by arrow keys.
///
/// The edge test is `position ± extent / 1.8` against the limit and it only
/// gates the arrow key of each pair: the letter key always moves. A sprite
/// driven with WASD can therefore walk past these limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenEdgeBounds {
    pub min: Vector2,
    pub max: Vector2,
}

impl ScreenEdgeBounds {
    pub const EDGE_DIVISOR: f32 = 1.8;

    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    pub fn right_clear(&self, pos: Vector2, extents: Vector2) -> bool {
        pos.x + extents.x.abs() / Self::EDGE_DIVISOR < self.max.x
    }

    pub fn left_clear(&self, pos: Vector2, extents: Vector2) -> bool {
        pos.x - extents.x.abs() / Self::EDGE_DIVISOR > self.min.x
    }

    pub fn up_clear(&self, pos: Vector2, extents: Vector2) -> bool {
        pos.y + extents.y.abs() / Self::EDGE_DIVISOR < self.max.y
    }

    pub fn down_clear(&self, pos: Vector2, extents: Vector2) -> bool {
        pos.y - extents.y.abs() / Self::EDGE_DIVISOR > self.min.y
    }
}

/// Walking parameters for a keyboard-controlled sprite.
///
/// A zero `speed` keeps the sprite in place while it still faces, flips and
/// animates, for walkers that stay centred over scrolling scenery.
#[derive(Component, Clone, Copy, Debug)]
pub struct WalkController {
    /// World units per second.
    pub speed: f32,
    pub rows: RowMap,
    pub edges: Option<ScreenEdgeBounds>,
    /// Whether up and down keys walk. Off leaves them to other systems.
    pub vertical: bool,
}

impl WalkController {
    pub fn new(speed: f32, rows: RowMap) -> Self {
        Self {
            speed,
            rows,
            edges: None,
            vertical: true,
        }
    }

    pub fn horizontal_only(mut self) -> Self {
        self.vertical = false;
        self
    }

    pub fn with_edges(mut self, edges: ScreenEdgeBounds) -> Self {
        self.edges = Some(edges);
        self
    }
}

/// Restricts movement to the diamond covered by an isometric map.
#[derive(Component, Clone, Copy, Debug)]
pub struct DiamondBounded(pub DiamondBounds);
