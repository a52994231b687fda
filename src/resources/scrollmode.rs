//! How parallax layers are driven by input.

use bevy_ecs::prelude::Resource;

/// Scroll drive for [`ParallaxLayer`](crate::components::parallax::ParallaxLayer)s.
///
/// Holding right scrolls forward, holding left scrolls back. Both or neither
/// held leaves the layers where they are.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub enum ScrollMode {
    /// `rate * dt` per tick, frame-rate independent.
    Timed { rate: f32 },
    /// A fixed `step` for every tick the key is held.
    Stepped { step: f32 },
}

impl Default for ScrollMode {
    fn default() -> Self {
        ScrollMode::Timed { rate: 0.5 }
    }
}

impl ScrollMode {
    /// Base scroll amount for one tick lasting `dt` seconds.
    pub fn amount(&self, dt: f32) -> f32 {
        match *self {
            ScrollMode::Timed { rate } => rate * dt,
            ScrollMode::Stepped { step } => step,
        }
    }
}
