//! Draw order for sprites and parallax layers.

use bevy_ecs::prelude::Component;

/// Painter's order: lower values are drawn first, higher values end on top.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
