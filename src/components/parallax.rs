//! Parallax background layers.
//!
//! Each layer is a horizontally repeating texture scrolled at its own rate.
//! Slow layers read as far away, fast layers as close. The offset lives in
//! texture space and always stays in `[0, 1)`, so the repeat has no seam.

use bevy_ecs::prelude::Component;
use raylib::prelude::Rectangle;

/// Wrap `value` into `[0, 1)`.
pub fn wrap_unit(value: f32) -> f32 {
    let wrapped = value - value.floor();
    // Tiny negatives round up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

#[derive(Component, Clone, Debug)]
pub struct ParallaxLayer {
    pub tex_key: String,
    /// Relative scroll rate of this plane.
    pub speed: f32,
    /// Horizontal texture offset in `[0, 1)`.
    pub offset: f32,
}

impl ParallaxLayer {
    pub fn new(tex_key: impl Into<String>, speed: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            speed,
            offset: 0.0,
        }
    }

    /// Move the layer by `amount` scaled with its own speed.
    pub fn scroll(&mut self, amount: f32) {
        self.offset = wrap_unit(self.offset + self.speed * amount);
    }

    /// Pixel-space source rectangle for one full screen width of texture.
    ///
    /// Relies on repeat wrapping past the right edge of the texture.
    pub fn source_rect(&self, tex_width: f32, tex_height: f32) -> Rectangle {
        Rectangle {
            x: self.offset * tex_width,
            y: 0.0,
            width: tex_width,
            height: tex_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_unit() {
        assert!((wrap_unit(1.05) - 0.05).abs() < 1e-6);
        assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-6);
        assert_eq!(wrap_unit(0.0), 0.0);
        assert_eq!(wrap_unit(1.0), 0.0);
        assert!((wrap_unit(3.5) - 0.5).abs() < 1e-6);
        assert!(wrap_unit(-1e-9) < 1.0);
    }

    #[test]
    fn test_scroll_wraps_forward() {
        let mut layer = ParallaxLayer::new("sky", 1.0);
        layer.offset = 0.95;
        layer.scroll(0.10);
        assert!((layer.offset - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_scroll_wraps_backward() {
        let mut layer = ParallaxLayer::new("sky", 0.5);
        layer.offset = 0.02;
        layer.scroll(-0.1);
        assert!((layer.offset - 0.97).abs() < 1e-5);
    }

    #[test]
    fn test_scroll_scales_by_speed() {
        let mut slow = ParallaxLayer::new("sky", 0.07);
        let mut fast = ParallaxLayer::new("ground", 0.5);
        slow.scroll(0.1);
        fast.scroll(0.1);
        assert!(slow.offset < fast.offset);
        assert!((fast.offset - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_source_rect_shift() {
        let mut layer = ParallaxLayer::new("sky", 1.0);
        layer.offset = 0.25;
        let src = layer.source_rect(800.0, 600.0);
        assert!((src.x - 200.0).abs() < 1e-3);
        assert_eq!(src.width, 800.0);
    }
}
