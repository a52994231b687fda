//! Mouse picking on the isometric map.
//!
//! A left click is taken from window pixels to world space through the
//! [`Viewport`], then to a grid cell with [`IsoMap::to_grid`]. The cell
//! becomes the [`TileSelection`] and every map walker is sent to its centre
//! through [`PendingMove`], so [`bounded_movement`] still has the last word.
//!
//! [`bounded_movement`]: crate::systems::movement::bounded_movement

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::PendingMove;
use crate::components::walkcontroller::DiamondBounded;
use crate::resources::input::InputState;
use crate::resources::isomap::IsoMap;
use crate::resources::tileselection::TileSelection;
use crate::resources::viewport::Viewport;

pub fn pick_tile(
    input: Res<InputState>,
    viewport: Res<Viewport>,
    map: Res<IsoMap>,
    mut selection: ResMut<TileSelection>,
    mut walkers: Query<&mut PendingMove, With<DiamondBounded>>,
) {
    if !input.mouse.left_pressed {
        return;
    }
    let point = viewport.screen_to_world(input.mouse.position);
    let Some((row, col)) = map.to_grid(point) else {
        debug!("Click at ({:.2}, {:.2}) is off the map", point.x, point.y);
        return;
    };
    selection.cell = Some((row, col));
    let target = map.to_screen(row, col);
    for mut pending in walkers.iter_mut() {
        pending.target = Some(target);
    }
    debug!("Picked tile ({}, {})", row, col);
}
