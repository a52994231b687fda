//! World-to-window mapping.
//!
//! Each demo declares the world rectangle it looks at, the same way an
//! orthographic projection `ortho(left, right, bottom, top)` would. World space
//! is y-up; window space is raylib's y-down pixels.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    /// Window width in pixels.
    pub screen_w: i32,
    /// Window height in pixels.
    pub screen_h: i32,
}

impl Viewport {
    pub fn ortho(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        screen_w: i32,
        screen_h: i32,
    ) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            screen_w,
            screen_h,
        }
    }

    /// Pixel-space world: `(0, 0)` bottom-left, one unit per pixel.
    pub fn pixels(screen_w: i32, screen_h: i32) -> Self {
        Self::ortho(0.0, screen_w as f32, 0.0, screen_h as f32, screen_w, screen_h)
    }

    /// Pixels per world unit along each axis.
    pub fn scale(&self) -> Vector2 {
        Vector2 {
            x: self.screen_w as f32 / (self.right - self.left),
            y: self.screen_h as f32 / (self.top - self.bottom),
        }
    }

    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        let scale = self.scale();
        Vector2 {
            x: (world.x - self.left) * scale.x,
            y: (self.top - world.y) * scale.y,
        }
    }

    pub fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        let scale = self.scale();
        Vector2 {
            x: self.left + screen.x / scale.x,
            y: self.top - screen.y / scale.y,
        }
    }

    /// Window rectangle covering a quad of `size` world units centered at `center`.
    ///
    /// Negative sizes are measured by magnitude; mirroring is the caller's job.
    pub fn world_rect_to_screen(&self, center: Vector2, size: Vector2) -> Rectangle {
        let scale = self.scale();
        let width = size.x.abs() * scale.x;
        let height = size.y.abs() * scale.y;
        let c = self.world_to_screen(center);
        Rectangle {
            x: c.x - width / 2.0,
            y: c.y - height / 2.0,
            width,
            height,
        }
    }

    /// Update the window size after a resize, keeping the world rectangle.
    pub fn resize(&mut self, screen_w: i32, screen_h: i32) {
        self.screen_w = screen_w;
        self.screen_h = screen_h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn test_pixels_flips_y() {
        let vp = Viewport::pixels(800, 600);
        let s = vp.world_to_screen(Vector2 { x: 100.0, y: 100.0 });
        assert!(close(s, Vector2 { x: 100.0, y: 500.0 }));
    }

    #[test]
    fn test_round_trip() {
        let vp = Viewport::ortho(-4.0, 4.0, -1.0, 5.0, 800, 600);
        let world = Vector2 { x: 1.5, y: 2.25 };
        let back = vp.screen_to_world(vp.world_to_screen(world));
        assert!(close(world, back));
    }

    #[test]
    fn test_ndc_corners() {
        let vp = Viewport::ortho(-1.0, 1.0, -1.0, 1.0, 800, 600);
        assert!(close(
            vp.screen_to_world(Vector2 { x: 0.0, y: 0.0 }),
            Vector2 { x: -1.0, y: 1.0 }
        ));
        assert!(close(
            vp.screen_to_world(Vector2 { x: 400.0, y: 300.0 }),
            Vector2 { x: 0.0, y: 0.0 }
        ));
    }

    #[test]
    fn test_world_rect_to_screen() {
        let vp = Viewport::ortho(-4.0, 4.0, -1.0, 5.0, 800, 600);
        let r = vp.world_rect_to_screen(Vector2 { x: 0.0, y: 2.0 }, Vector2 { x: -2.0, y: 1.0 });
        assert!((r.width - 200.0).abs() < 1e-3);
        assert!((r.height - 100.0).abs() < 1e-3);
        assert!((r.x - 300.0).abs() < 1e-3);
        assert!((r.y - 250.0).abs() < 1e-3);
    }
}
