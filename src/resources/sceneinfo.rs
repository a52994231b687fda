//! Per-demo presentation settings read by the renderer and the main loop.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

#[derive(Resource, Debug, Clone)]
pub struct SceneInfo {
    pub title: String,
    pub clear_color: Color,
    /// Draw the FPS counter in the corner.
    pub show_fps: bool,
}

impl SceneInfo {
    pub fn new(title: impl Into<String>, clear_color: Color) -> Self {
        Self {
            title: title.into(),
            clear_color,
            show_fps: true,
        }
    }

    /// Window title showing the demo and the measured frame rate.
    pub fn window_title(&self, fps: u32) -> String {
        format!("Spritelab - {} ({} FPS)", self.title, fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title() {
        let info = SceneInfo::new("Isometric tile map", Color::BLACK);
        assert_eq!(
            info.window_title(60),
            "Spritelab - Isometric tile map (60 FPS)"
        );
    }
}
