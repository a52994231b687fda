//! Zoom applied to every parallax layer.

use bevy_ecs::prelude::Resource;

/// Smallest and largest layer scale.
pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 3.0;

/// Layer scale around the window centre, changed by a fixed step per tick
/// while up or down is held.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ParallaxZoom {
    pub scale: f32,
    pub step: f32,
}

impl Default for ParallaxZoom {
    fn default() -> Self {
        Self {
            scale: 1.0,
            step: 0.01,
        }
    }
}

impl ParallaxZoom {
    /// Apply one tick of zoom input. Both held cancel out.
    pub fn apply(&mut self, zoom_in: bool, zoom_out: bool) {
        if zoom_in {
            self.scale += self.step;
        }
        if zoom_out {
            self.scale -= self.step;
        }
        self.scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_steps_and_clamps() {
        let mut zoom = ParallaxZoom::default();
        zoom.apply(true, false);
        assert!((zoom.scale - 1.01).abs() < 1e-6);
        zoom.apply(true, true);
        assert!((zoom.scale - 1.01).abs() < 1e-6);

        zoom.scale = 2.995;
        zoom.apply(true, false);
        assert_eq!(zoom.scale, MAX_SCALE);

        zoom.scale = 0.105;
        zoom.apply(false, true);
        assert_eq!(zoom.scale, MIN_SCALE);
    }
}
