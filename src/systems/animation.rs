//! Animation cadence system.
//!
//! - [`animation_cadence`] advances each walking instance's frame at its own
//!   `fps`, measured in simulated time. Idle instances keep their frame.
//!
//! # Animation Flow
//!
//! 1. Atlas layouts are registered in [`AtlasStore`]
//! 2. Entities carry an [`AnimationState`] pointing to an atlas key
//! 3. A controller (see [`walk_controller`](crate::systems::walk::walk_controller))
//!    sets the row and the [`Motion`](crate::components::animation::Motion)
//! 4. This system ticks the frame cursor; the renderer samples
//!    [`AnimationState::uv_rect`]

use bevy_ecs::prelude::*;
use log::warn;
use rustc_hash::FxHashSet;

use crate::components::animation::AnimationState;
use crate::resources::atlasstore::AtlasStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation frames.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Looks up the frame count from [`AtlasStore`]. Instances whose atlas is
///   not registered are left untouched, with one warning per atlas key.
/// - A row past the atlas is a controller bug: it asserts in debug builds
///   and is clamped to the last row otherwise.
pub fn animation_cadence(
    mut query: Query<&mut AnimationState>,
    atlases: Res<AtlasStore>,
    time: Res<WorldTime>,
    mut reported: Local<FxHashSet<String>>,
) {
    for mut state in query.iter_mut() {
        let Some(grid) = atlases.get(&state.atlas_key) else {
            if !reported.contains(&state.atlas_key) {
                warn!("No atlas registered for '{}'", state.atlas_key);
                reported.insert(state.atlas_key.clone());
            }
            continue;
        };
        debug_assert!(
            state.current_row < grid.row_count(),
            "row {} outside the {}-row atlas '{}'",
            state.current_row,
            grid.row_count(),
            state.atlas_key
        );
        if state.current_row >= grid.row_count() {
            state.current_row = grid.row_count() - 1;
        }
        state.tick(time.delta, grid.frame_count());
    }
}
