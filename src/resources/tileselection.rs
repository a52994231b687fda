//! Map cell picked with the mouse.

use bevy_ecs::prelude::Resource;

/// Last `(row, col)` clicked on the isometric map. Clicks off the map leave
/// it unchanged.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileSelection {
    pub cell: Option<(usize, usize)>,
}
