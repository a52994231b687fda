use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::{MapPosition, PendingMove};
use crate::components::walkcontroller::DiamondBounded;

/// Commit proposed moves.
///
/// A [`DiamondBounded`] entity whose candidate falls outside its diamond
/// stays where it is. Row and flip changes made by the controller are kept
/// either way.
pub fn bounded_movement(
    mut query: Query<(
        Entity,
        &mut MapPosition,
        &mut PendingMove,
        Option<&DiamondBounded>,
    )>,
) {
    for (entity, mut position, mut pending, bounded) in query.iter_mut() {
        let Some(target) = pending.target.take() else {
            continue;
        };
        if let Some(DiamondBounded(bounds)) = bounded
            && !bounds.contains(target)
        {
            debug!(
                "{:?}: move to ({:.2}, {:.2}) rejected by map bounds",
                entity, target.x, target.y
            );
            continue;
        }
        position.pos = target;
    }
}
